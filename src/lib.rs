pub mod core;
pub mod error;

use crate::core::bucket::{Bucket, BucketLike};
use crate::core::constants::{bucket_count, Ratios};
pub use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Enumerate, FusedIterator, Rev};
use std::ops::Index;

/// An ordered set of unique elements stored as a list of sorted buckets.
///
/// Every bucket is strictly increasing and every element of a bucket is smaller than every
/// element of the next one. Queries first pick a bucket by its maximum and then binary search
/// inside it. A bucket that grows past `bucket_count * split` elements is halved on the spot,
/// and a bucket emptied by a removal is dropped. Neighbouring buckets are never merged.
///
/// Besides membership this gives rank queries ([`count_lt`], [`count_le`]), positional access
/// with negative indices ([`get`], [`pop`]) and neighbour lookups ([`lt`], [`le`], [`gt`],
/// [`ge`]), each in roughly `O(sqrt(n))`.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering
/// relative to any other item, as determined by the [`Ord`] trait, changes while it is in the
/// set.
///
/// [`count_lt`]: SortedSet::count_lt
/// [`count_le`]: SortedSet::count_le
/// [`get`]: SortedSet::get
/// [`pop`]: SortedSet::pop
/// [`lt`]: SortedSet::lt
/// [`le`]: SortedSet::le
/// [`gt`]: SortedSet::gt
/// [`ge`]: SortedSet::ge
///
/// # Examples
///
/// ```
/// use bucketset::SortedSet;
///
/// let mut set = SortedSet::from_vec(vec![5, 1, 4, 1, 3]);
/// assert_eq!(set.len(), 4);
///
/// assert!(set.insert(2));
/// assert!(!set.insert(2));
///
/// assert_eq!(set.lt(&3), Some(&2));
/// assert_eq!(set.ge(&6), None);
/// assert_eq!(set.get(-1), Ok(&5));
/// assert_eq!(set.count_le(&3), 3);
///
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Clone)]
pub struct SortedSet<T>
where
    T: Ord,
{
    inner: Vec<Bucket<T>>,
    len: usize,
    ratios: Ratios,
}

impl<T: Ord> SortedSet<T> {
    /// Makes a new, empty `SortedSet`. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use bucketset::SortedSet;
    ///
    /// let mut set: SortedSet<i32> = SortedSet::new();
    /// assert_eq!(set.bucket_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_ratios(Ratios::default())
    }
    /// Makes a new, empty `SortedSet` tuned with the given ratios.
    pub fn with_ratios(ratios: Ratios) -> Self {
        Self {
            inner: Vec::new(),
            len: 0,
            ratios,
        }
    }
    /// Builds a set out of arbitrary elements. The input is sorted if it is not already,
    /// duplicates are dropped, and the result is sliced into `ceil(sqrt(n / 16))` buckets of
    /// near-equal length.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let set = SortedSet::from_vec((1..=17).rev().collect());
    /// assert_eq!(set.bucket_count(), 2);
    /// assert_eq!(set.buckets().next(), Some(&[1, 2, 3, 4, 5, 6, 7, 8][..]));
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with_ratios(elements, Ratios::default())
    }
    pub fn from_vec_with_ratios(mut elements: Vec<T>, ratios: Ratios) -> Self {
        if !elements.windows(2).all(|pair| pair[0] <= pair[1]) {
            elements.sort_unstable();
        }
        elements.dedup();

        let len = elements.len();
        let count = bucket_count(len, ratios.bucket);
        let mut inner = Vec::with_capacity(count);
        // Peel buckets off the back so that no element has to be cloned.
        for bucket_idx in (0..count).rev() {
            inner.push(elements.split_off(bucket_idx * len / count));
        }
        inner.reverse();

        tracing::debug!(len, buckets = count, "built sorted set");

        Self { inner, len, ratios }
    }
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let mut v = SortedSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Clears the set, removing all elements and buckets.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.len = 0;
    }
    pub fn ratios(&self) -> Ratios {
        self.ratios
    }
    /// Returns the number of buckets currently backing the set. Zero iff the set is empty.
    pub fn bucket_count(&self) -> usize {
        self.inner.len()
    }
    /// Iterates over the buckets in order, each one a strictly increasing slice.
    pub fn buckets(&self) -> impl ExactSizeIterator<Item = &[T]> + DoubleEndedIterator {
        self.inner.iter().map(Vec::as_slice)
    }
    fn locate_bucket<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let bucket_idx = self.inner.partition_point(|bucket| {
            if let Some(max) = bucket.last() {
                return max.borrow() < value;
            }

            false
        });

        // A value above every maximum is routed to the last bucket, where it would be appended.
        bucket_idx.min(self.inner.len().saturating_sub(1))
    }
    /// Finds the bucket owning `value` and its offset there: `Ok` if present, otherwise `Err`
    /// with the insertion point. The set must not be empty.
    fn locate<Q>(&self, value: &Q) -> (usize, std::result::Result<usize, usize>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let bucket_idx = self.locate_bucket(value);

        (bucket_idx, self.inner[bucket_idx].search(value))
    }
    /// Position of the first element for which `pred` is false, as `(bucket, offset)`.
    ///
    /// `pred` must hold on a prefix of the set and nowhere after it. When it holds everywhere
    /// the position is one past the last bucket.
    fn partition<P>(&self, pred: P) -> (usize, usize)
    where
        P: Fn(&T) -> bool,
    {
        let bucket_idx = self
            .inner
            .partition_point(|bucket| bucket.last().map_or(true, |max| pred(max)));

        match self.inner.get(bucket_idx) {
            Some(bucket) => (bucket_idx, bucket.partition_point(|item| pred(item))),
            None => (bucket_idx, 0),
        }
    }
    fn element_at(&self, (bucket_idx, offset): (usize, usize)) -> Option<&T> {
        self.inner.get(bucket_idx).and_then(|bucket| bucket.get(offset))
    }
    fn element_before(&self, (bucket_idx, offset): (usize, usize)) -> Option<&T> {
        if offset > 0 {
            return self.inner[bucket_idx].get(offset - 1);
        }

        bucket_idx
            .checked_sub(1)
            .and_then(|previous| self.inner[previous].last())
    }
    fn rank_of(&self, (bucket_idx, offset): (usize, usize)) -> usize {
        self.inner[..bucket_idx]
            .iter()
            .map(|bucket| bucket.len())
            .sum::<usize>()
            + offset
    }
    /// Resolves a possibly negative index to `(bucket, offset)`.
    ///
    /// Negative indices count from the back, `-1` being the greatest element, and are resolved
    /// by walking the buckets from the back.
    fn locate_index(&self, index: isize) -> Result<(usize, usize)> {
        let out_of_range = Error::IndexOutOfRange {
            index,
            len: self.len,
        };
        // A Vec never holds more than isize::MAX bytes, so neither does the set.
        let len = self.len as isize;
        let position = if index < 0 { index + len } else { index };
        if position < 0 || position >= len {
            return Err(out_of_range);
        }
        let position = position as usize;

        if index < 0 {
            let mut from_back = self.len - 1 - position;
            for (bucket_idx, bucket) in self.inner.iter().enumerate().rev() {
                if from_back < bucket.len() {
                    return Ok((bucket_idx, bucket.len() - 1 - from_back));
                }
                from_back -= bucket.len();
            }
        } else {
            let mut remaining = position;
            for (bucket_idx, bucket) in self.inner.iter().enumerate() {
                if remaining < bucket.len() {
                    return Ok((bucket_idx, remaining));
                }
                remaining -= bucket.len();
            }
        }

        Err(out_of_range)
    }
    fn delete_at(&mut self, bucket_idx: usize, offset: usize) -> T {
        let removal = self.inner[bucket_idx].remove(offset);
        self.len -= 1;

        if self.inner[bucket_idx].is_empty() {
            self.inner.remove(bucket_idx);
            tracing::trace!(
                bucket = bucket_idx,
                buckets = self.inner.len(),
                "pruned empty bucket"
            );
        }

        removal
    }
    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let set = SortedSet::from_vec(vec![1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.inner.is_empty() {
            return false;
        }

        self.locate(value).1.is_ok()
    }
    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. If the set already contained an equal
    /// value, `false` is returned and the set is left untouched.
    ///
    /// When the receiving bucket ends up longer than `bucket_count * split` it is halved into
    /// two adjacent buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.inner.is_empty() {
            self.inner.push(vec![value]);
            self.len = 1;

            return true;
        }

        let bucket_idx = self.locate_bucket(&value);
        if !self.inner[bucket_idx].insert_sorted(value) {
            return false;
        }
        self.len += 1;

        if self.inner[bucket_idx].overflows(self.inner.len(), self.ratios.split) {
            let upper = self.inner[bucket_idx].halve();
            self.inner.insert(bucket_idx + 1, upper);
            tracing::trace!(
                bucket = bucket_idx,
                buckets = self.inner.len(),
                "split overfull bucket"
            );
        }

        true
    }
    /// If the set contains an element equal to the value, removes it from the
    /// set and drops it. Returns whether such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }
    /// Removes and returns the element in the set, if any, that is equal to
    /// the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let mut set = SortedSet::from_vec(vec![1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.inner.is_empty() {
            return None;
        }

        match self.locate(value) {
            (bucket_idx, Ok(offset)) => Some(self.delete_at(bucket_idx, offset)),
            (_, Err(_)) => None,
        }
    }
    /// Returns the element at the given position in ascending order.
    ///
    /// Negative indices count from the greatest element: `-1` is the last one and `-len` the
    /// first.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `-len <= index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::{Error, SortedSet};
    ///
    /// let set = SortedSet::from_vec(vec![10, 20, 30]);
    /// assert_eq!(set.get(0), Ok(&10));
    /// assert_eq!(set.get(-1), Ok(&30));
    /// assert_eq!(set.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// assert!(set.get(-4).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let (bucket_idx, offset) = self.locate_index(index)?;

        Ok(&self.inner[bucket_idx][offset])
    }
    /// Removes and returns the element at the given position, with the same indexing rules
    /// as [`get`](SortedSet::get).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] unless `-len <= index < len`. The set is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let mut set = SortedSet::from_vec(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(set.pop(2), Ok(3));
    /// assert_eq!(set.pop(-1), Ok(5));
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4]);
    /// ```
    pub fn pop(&mut self, index: isize) -> Result<T> {
        let (bucket_idx, offset) = self.locate_index(index)?;

        Ok(self.delete_at(bucket_idx, offset))
    }
    /// Returns the greatest element strictly less than the value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let set = SortedSet::from_vec(vec![1, 2, 4, 5]);
    /// assert_eq!(set.lt(&4), Some(&2));
    /// assert_eq!(set.lt(&3), Some(&2));
    /// assert_eq!(set.lt(&1), None);
    /// ```
    pub fn lt<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.element_before(self.partition(|item| item.borrow() < value))
    }
    /// Returns the greatest element less than or equal to the value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let set = SortedSet::from_vec(vec![1, 2, 4, 5]);
    /// assert_eq!(set.le(&4), Some(&4));
    /// assert_eq!(set.le(&3), Some(&2));
    /// assert_eq!(set.le(&0), None);
    /// ```
    pub fn le<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.element_before(self.partition(|item| item.borrow() <= value))
    }
    /// Returns the least element strictly greater than the value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let set = SortedSet::from_vec(vec![1, 2, 4, 5]);
    /// assert_eq!(set.gt(&2), Some(&4));
    /// assert_eq!(set.gt(&3), Some(&4));
    /// assert_eq!(set.gt(&5), None);
    /// ```
    pub fn gt<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.element_at(self.partition(|item| item.borrow() <= value))
    }
    /// Returns the least element greater than or equal to the value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let set = SortedSet::from_vec(vec![1, 2, 4, 5]);
    /// assert_eq!(set.ge(&2), Some(&2));
    /// assert_eq!(set.ge(&3), Some(&4));
    /// assert_eq!(set.ge(&6), None);
    /// ```
    pub fn ge<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.element_at(self.partition(|item| item.borrow() < value))
    }
    /// Returns the number of elements strictly less than the value, which is also the position
    /// the value has, or would have, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let set = SortedSet::from_vec(vec![1, 2, 3]);
    /// assert_eq!(set.count_lt(&1), 0);
    /// assert_eq!(set.count_lt(&3), 2);
    /// assert_eq!(set.count_lt(&100), 3);
    /// ```
    pub fn count_lt<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.rank_of(self.partition(|item| item.borrow() < value))
    }
    /// Returns the number of elements less than or equal to the value.
    ///
    /// `count_le(x) - count_lt(x)` is 1 exactly when `x` is in the set.
    pub fn count_le<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.rank_of(self.partition(|item| item.borrow() <= value))
    }
    /// Returns a reference to the smallest element, if any.
    pub fn first(&self) -> Option<&T> {
        self.inner.first().and_then(|bucket| bucket.first())
    }
    /// Returns a reference to the greatest element, if any.
    pub fn last(&self) -> Option<&T> {
        self.inner.last().and_then(|bucket| bucket.last())
    }
    /// Removes the smallest element from the set and returns it, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    ///
    /// set.insert(1);
    /// while let Some(n) = set.pop_first() {
    ///     assert_eq!(n, 1);
    /// }
    /// assert!(set.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        self.pop(0).ok()
    }
    /// Removes the greatest element from the set and returns it, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        self.pop(-1).ok()
    }
    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let set = SortedSet::from_vec(vec![3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next_back(), Some(&3));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
    /// Same as [`iter`](SortedSet::iter).
    pub fn values(&self) -> Iter<'_, T> {
        self.iter()
    }
    /// Visits `(rank, element)` pairs in ascending order, ranks starting at 0.
    pub fn all(&self) -> Enumerate<Iter<'_, T>> {
        self.iter().enumerate()
    }
    /// Visits `(rank, element)` pairs in descending order, starting at rank `len - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let set = SortedSet::from_vec(vec![10, 20, 30]);
    /// let pairs: Vec<_> = set.backward().collect();
    /// assert_eq!(pairs, vec![(2, &30), (1, &20), (0, &10)]);
    /// ```
    pub fn backward(&self) -> Rev<Enumerate<Iter<'_, T>>> {
        self.all().rev()
    }
    /// Returns `true` if both sets hold the same elements split into the same buckets.
    ///
    /// This is stricter than having the same elements: a set built in bulk and one grown by
    /// insertions may hold identical values and still compare unequal. Compare
    /// `a.iter().eq(b.iter())` for plain set equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketset::SortedSet;
    ///
    /// let bulk = SortedSet::from_vec((1..=17).collect());
    /// let mut grown = SortedSet::new();
    /// for value in 1..=17 {
    ///     grown.insert(value);
    /// }
    ///
    /// assert!(bulk.iter().eq(grown.iter()));
    /// assert!(!bulk.structural_eq(&grown));
    /// assert!(bulk.structural_eq(&bulk.clone()));
    /// ```
    pub fn structural_eq(&self, other: &Self) -> bool {
        self.len == other.len && self.inner == other.inner
    }
}

impl<T> FromIterator<T> for SortedSet<T>
where
    T: Ord,
{
    fn from_iter<K: IntoIterator<Item = T>>(iter: K) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for SortedSet<T>
where
    T: Ord,
{
    fn from(value: Vec<T>) -> Self {
        Self::from_vec(value)
    }
}

impl<T, const N: usize> From<[T; N]> for SortedSet<T>
where
    T: Ord,
{
    fn from(value: [T; N]) -> Self {
        Self::from_vec(Vec::from(value))
    }
}

impl<T> Extend<T> for SortedSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| {
            self.insert(item);
        });
    }
}

impl<T> Default for SortedSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality, see [`SortedSet::structural_eq`].
impl<T> PartialEq for SortedSet<T>
where
    T: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<T> Eq for SortedSet<T> where T: Ord {}

impl<T> Hash for SortedSet<T>
where
    T: Ord + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.inner.hash(state);
    }
}

impl<T> fmt::Debug for SortedSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for SortedSet<T>
where
    T: Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SortedSet{")?;
        for (rank, value) in self.all() {
            if rank > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

impl<T> Index<usize> for SortedSet<T>
where
    T: Ord,
{
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let Ok(signed) = isize::try_from(index) else {
            panic!("index {index} out of range for set of length {}", self.len);
        };

        match self.get(signed) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(feature = "serde")]
impl<T> Serialize for SortedSet<T>
where
    T: Ord + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for SortedSet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

/// An iterator over the items of a `SortedSet`.
///
/// This `struct` is created by the [`iter`] method on [`SortedSet`].
/// See its documentation for more.
///
/// [`iter`]: SortedSet::iter
pub struct Iter<'a, T>
where
    T: Ord,
{
    buckets: std::slice::Iter<'a, Bucket<T>>,
    current_front_iterator: std::slice::Iter<'a, T>,
    current_back_iterator: std::slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T>
where
    T: Ord,
{
    pub fn new(set: &'a SortedSet<T>) -> Self {
        Self {
            buckets: set.inner.iter(),
            current_front_iterator: Default::default(),
            current_back_iterator: Default::default(),
            remaining: set.len,
        }
    }
}

impl<T> Clone for Iter<'_, T>
where
    T: Ord,
{
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            current_front_iterator: self.current_front_iterator.clone(),
            current_back_iterator: self.current_back_iterator.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current_front_iterator.next() {
                self.remaining -= 1;
                return Some(value);
            }
            match self.buckets.next() {
                Some(bucket) => self.current_front_iterator = bucket.iter(),
                None => {
                    // The back iterator may still hold the tail of the last bucket.
                    let value = self.current_back_iterator.next();
                    if value.is_some() {
                        self.remaining -= 1;
                    }
                    return value;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T>
where
    T: Ord,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current_back_iterator.next_back() {
                self.remaining -= 1;
                return Some(value);
            }
            match self.buckets.next_back() {
                Some(bucket) => self.current_back_iterator = bucket.iter(),
                None => {
                    let value = self.current_front_iterator.next_back();
                    if value.is_some() {
                        self.remaining -= 1;
                    }
                    return value;
                }
            }
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> where T: Ord {}

impl<T> FusedIterator for Iter<'_, T> where T: Ord {}

impl<'a, T> IntoIterator for &'a SortedSet<T>
where
    T: Ord,
{
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// An owning iterator over the items of a `SortedSet`, in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`SortedSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: SortedSet#method.into_iter
pub struct IntoIter<T>
where
    T: Ord,
{
    inner: std::iter::Flatten<std::vec::IntoIter<Bucket<T>>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T>
where
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.inner.next()?;
        self.remaining -= 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T>
where
    T: Ord,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.inner.next_back()?;
        self.remaining -= 1;

        Some(value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> where T: Ord {}

impl<T> FusedIterator for IntoIter<T> where T: Ord {}

impl<T> IntoIterator for SortedSet<T>
where
    T: Ord,
{
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_iter().flatten(),
            remaining: self.len,
        }
    }
}
