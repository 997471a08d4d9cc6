/// Target number of elements per bucket, squared, when a set is built in bulk:
/// `n` elements are sliced into `ceil(sqrt(n / BUCKET_RATIO))` buckets.
pub const BUCKET_RATIO: usize = 16;
/// A bucket is halved once it holds more than `bucket_count * SPLIT_RATIO` elements.
pub const SPLIT_RATIO: usize = 24;

/// Tuning knobs of a [`SortedSet`](crate::SortedSet).
///
/// Both ratios are clamped to at least 1.
///
/// # Examples
///
/// ```
/// use bucketset::core::constants::Ratios;
/// use bucketset::SortedSet;
///
/// let set: SortedSet<u32> = SortedSet::with_ratios(Ratios::new(4, 8));
/// assert_eq!(set.ratios(), Ratios::new(4, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratios {
    pub bucket: usize,
    pub split: usize,
}

impl Ratios {
    pub fn new(bucket: usize, split: usize) -> Self {
        Self {
            bucket: bucket.max(1),
            split: split.max(1),
        }
    }
}

impl Default for Ratios {
    fn default() -> Self {
        Self {
            bucket: BUCKET_RATIO,
            split: SPLIT_RATIO,
        }
    }
}

/// Number of buckets a freshly built set of `len` elements is sliced into, that is
/// `ceil(sqrt(len / bucket_ratio))`.
pub fn bucket_count(len: usize, bucket_ratio: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let bucket_ratio = bucket_ratio.max(1) as u128;
    let len = len as u128;

    let mut count = (len as f64 / bucket_ratio as f64).sqrt().ceil() as u128;
    // Float rounding can be off by one for large inputs.
    while count * count * bucket_ratio < len {
        count += 1;
    }
    while count > 1 && (count - 1) * (count - 1) * bucket_ratio >= len {
        count -= 1;
    }

    count as usize
}
