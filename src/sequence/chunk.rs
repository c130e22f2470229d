//! Fixed-size chunking.

use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use crate::error::{Result, SequenceError};

/// Capacity reserved for a chunk when the source gives no upper bound.
const UNBOUNDED_CAPACITY: usize = 1024;

/// A validated chunk size of at least one.
///
/// # Examples
///
/// ```rust
/// use seqext::sequence::ChunkSize;
/// use seqext::SequenceError;
///
/// assert_eq!(ChunkSize::try_from(3_i32).map(ChunkSize::get), Ok(3));
/// assert_eq!(
///     ChunkSize::try_from(-1_i64),
///     Err(SequenceError::OutOfRange { parameter: "size", value: -1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    /// Returns `None` if `size` is zero.
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// Returns the size as a plain `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for ChunkSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

macro_rules! impl_try_from_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl TryFrom<$integer> for ChunkSize {
                type Error = SequenceError;

                fn try_from(value: $integer) -> Result<Self> {
                    usize::try_from(value)
                        .ok()
                        .and_then(Self::new)
                        .ok_or_else(|| {
                            SequenceError::out_of_range(
                                "size",
                                i128::try_from(value).unwrap_or(i128::MAX),
                            )
                        })
                }
            }
        )*
    };
}

impl_try_from_integer!(i32, i64, isize, usize);

/// A lazy iterator over consecutive, non-overlapping chunks of a source.
///
/// Every chunk holds exactly `size` elements except possibly the last one,
/// which holds the remainder. No empty chunk is ever produced, and elements
/// are pulled from the source only when the chunk containing them is
/// requested.
///
/// Created by [`SequenceExt::chunk`](super::SequenceExt::chunk) and
/// [`SequenceExt::chunk_by_size`](super::SequenceExt::chunk_by_size).
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chunk<I> {
    iter: I,
    size: ChunkSize,
    exhausted: bool,
}

impl<I> Chunk<I> {
    pub(super) const fn new(iter: I, size: ChunkSize) -> Self {
        Self {
            iter,
            size,
            exhausted: false,
        }
    }

    /// Returns the configured chunk size.
    pub const fn size(&self) -> ChunkSize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunk<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let size = self.size.get();
        let (lower, upper) = self.iter.size_hint();
        let capacity = upper.unwrap_or(lower.max(UNBOUNDED_CAPACITY)).min(size);

        let mut chunk = Vec::with_capacity(capacity);
        chunk.extend(self.iter.by_ref().take(size));
        if chunk.len() < size {
            self.exhausted = true;
        }
        if chunk.is_empty() {
            return None;
        }
        tracing::trace!(length = chunk.len(), size, "emitted chunk");
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let size = self.size.get();
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(size),
            upper.map(|upper| upper.div_ceil(size)),
        )
    }
}

impl<I: Iterator> FusedIterator for Chunk<I> {}

impl<I: fmt::Debug> fmt::Debug for Chunk<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Chunk")
            .field("iter", &self.iter)
            .field("size", &self.size)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chunks_of(length: usize, size: usize) -> Vec<Vec<usize>> {
        let size = ChunkSize::new(size).unwrap();
        Chunk::new(0..length, size).collect()
    }

    #[rstest]
    #[case(0, 3, vec![])]
    #[case(1, 3, vec![vec![0]])]
    #[case(3, 3, vec![vec![0, 1, 2]])]
    #[case(4, 3, vec![vec![0, 1, 2], vec![3]])]
    #[case(5, 1, vec![vec![0], vec![1], vec![2], vec![3], vec![4]])]
    fn test_chunk_boundaries(
        #[case] length: usize,
        #[case] size: usize,
        #[case] expected: Vec<Vec<usize>>,
    ) {
        assert_eq!(chunks_of(length, size), expected);
    }

    #[rstest]
    #[case(0_i64)]
    #[case(-1_i64)]
    #[case(i64::MIN)]
    fn test_chunk_size_rejects_non_positive(#[case] value: i64) {
        assert_eq!(
            ChunkSize::try_from(value),
            Err(SequenceError::OutOfRange {
                parameter: "size",
                value: i128::from(value)
            })
        );
    }

    #[rstest]
    fn test_chunk_size_conversions() {
        assert_eq!(ChunkSize::try_from(7_isize).map(ChunkSize::get), Ok(7));
        assert_eq!(ChunkSize::try_from(7_usize).map(ChunkSize::get), Ok(7));
        assert_eq!(ChunkSize::new(0), None);
        assert_eq!(ChunkSize::from(NonZeroUsize::MIN).get(), 1);
        assert_eq!(ChunkSize::new(12).map(|size| size.to_string()), Some("12".to_owned()));
    }

    #[rstest]
    fn test_size_hint_rounds_up() {
        let chunk = Chunk::new(0..10, ChunkSize::new(4).unwrap());
        assert_eq!(chunk.size_hint(), (3, Some(3)));
    }

    #[rstest]
    fn test_huge_size_does_not_overallocate() {
        let mut chunk = Chunk::new(
            std::iter::repeat_n(1_u8, 5),
            ChunkSize::new(usize::MAX).unwrap(),
        );
        let first = chunk.next().unwrap();
        assert_eq!(first.len(), 5);
        assert!(first.capacity() < 1024);
        assert_eq!(chunk.next(), None);
    }

    #[rstest]
    fn test_fused_after_short_chunk() {
        let mut flip = false;
        let flaky = std::iter::from_fn(move || {
            flip = !flip;
            flip.then_some(1)
        });
        let mut chunk = Chunk::new(flaky, ChunkSize::new(2).unwrap());
        assert_eq!(chunk.next(), Some(vec![1]));
        assert_eq!(chunk.next(), None);
        assert_eq!(chunk.next(), None);
    }

    #[rstest]
    fn test_does_not_read_ahead() {
        let mut pulled = 0;
        let counting = (0..100).inspect(|_| pulled += 1);
        let mut chunk = Chunk::new(counting, ChunkSize::new(10).unwrap());
        assert_eq!(chunk.next().map(|items| items.len()), Some(10));
        drop(chunk);
        assert_eq!(pulled, 10);
    }
}
