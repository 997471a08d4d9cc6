use thiserror::Error;

/// Errors raised by positional access into a [`SortedSet`](crate::SortedSet).
///
/// Value lookups never fail: a missing value is reported as `false` or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("index {index} out of range for set of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
