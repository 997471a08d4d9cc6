#![cfg(feature = "serde")]

use bucketset::SortedSet;

#[test]
fn test_serializes_as_ascending_sequence() {
    let set = SortedSet::from_vec((1..=20).rev().collect::<Vec<u32>>());
    assert_eq!(set.bucket_count(), 2);

    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, serde_json::to_string(&(1..=20).collect::<Vec<u32>>()).unwrap());
}

#[test]
fn test_deserialize_restores_invariants() {
    let set: SortedSet<i32> = serde_json::from_str("[5, 3, 3, 9, -1, 5]").unwrap();

    assert_eq!(set.len(), 4);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![-1, 3, 5, 9]);
    assert_eq!(set.gt(&3), Some(&5));
}

#[test]
fn test_round_trip_keeps_values() {
    let mut set = SortedSet::new();
    set.extend((0..200).map(|value| value * 3 % 101));

    let json = serde_json::to_string(&set).unwrap();
    let restored: SortedSet<i32> = serde_json::from_str(&json).unwrap();

    assert!(restored.iter().eq(set.iter()));
}
