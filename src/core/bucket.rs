use std::borrow::Borrow;
use std::cmp::Ordering;

/// A strictly increasing run of elements. The unit of local search and mutation.
pub type Bucket<T> = Vec<T>;

pub trait BucketLike<T: Ord> {
    fn search<Q: Ord + ?Sized>(&self, value: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>;
    fn insert_sorted(&mut self, value: T) -> bool;
    fn halve(&mut self) -> Self;
    fn overflows(&self, bucket_count: usize, split_ratio: usize) -> bool;
}

#[inline]
fn search<Q, T>(haystack: &[T], needle: &Q) -> Result<usize, usize>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    let mut i = 0;
    let mut j = haystack.len();
    while i != j {
        let m = (i + j) >> 1;
        match haystack[m].borrow().cmp(needle) {
            Ordering::Equal => return Ok(m),
            Ordering::Less => i = m + 1,
            Ordering::Greater => j = m,
        }
    }

    Err(i)
}

impl<T: Ord> BucketLike<T> for Bucket<T> {
    #[inline]
    fn search<Q>(&self, value: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search(self, value)
    }
    #[inline]
    fn insert_sorted(&mut self, value: T) -> bool {
        match search(self, &value) {
            Ok(_) => false,
            Err(idx) => {
                self.insert(idx, value);
                true
            }
        }
    }
    /// Keeps the lower half and returns the upper one. An odd element goes up.
    #[inline]
    fn halve(&mut self) -> Self {
        self.split_off(self.len() >> 1)
    }
    #[inline]
    fn overflows(&self, bucket_count: usize, split_ratio: usize) -> bool {
        self.len() > bucket_count.saturating_mul(split_ratio)
    }
}
