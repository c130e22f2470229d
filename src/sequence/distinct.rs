//! Key-based distinctness filter.

use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::comparer::EqualityComparer;

/// Keys are grouped by `hash_key`; almost every bucket holds a single key.
type Bucket<K> = SmallVec<[K; 1]>;

/// A growing set of keys under an [`EqualityComparer`].
pub(crate) struct KeySet<K, Q> {
    buckets: HashMap<u64, Bucket<K>>,
    length: usize,
    comparer: Q,
}

impl<K, Q: EqualityComparer<K>> KeySet<K, Q> {
    pub(crate) fn new(comparer: Q) -> Self {
        Self {
            buckets: HashMap::new(),
            length: 0,
            comparer,
        }
    }

    /// Adds `key` unless an equal key is present; returns `true` if added.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        let hash = self.comparer.hash_key(&key);
        let bucket = self.buckets.entry(hash).or_default();
        if bucket.iter().any(|stored| self.comparer.equals(stored, &key)) {
            return false;
        }
        bucket.push(key);
        self.length += 1;
        true
    }

    pub(crate) const fn len(&self) -> usize {
        self.length
    }
}

/// A lazy iterator yielding the first element for each distinct key.
///
/// Created by [`SequenceExt::distinct_by`](super::SequenceExt::distinct_by)
/// and [`SequenceExt::distinct_by_with`](super::SequenceExt::distinct_by_with).
/// Each pulled element costs one key projection and one amortized O(1)
/// membership test, so infinite sources are fine as long as the caller
/// stops pulling.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DistinctBy<I, F, K, Q> {
    iter: I,
    key_selector: F,
    seen: KeySet<K, Q>,
}

impl<I, F, K, Q: EqualityComparer<K>> DistinctBy<I, F, K, Q> {
    pub(super) fn new(iter: I, key_selector: F, comparer: Q) -> Self {
        Self {
            iter,
            key_selector,
            seen: KeySet::new(comparer),
        }
    }

    /// Returns the number of distinct keys observed so far.
    pub const fn distinct_count(&self) -> usize {
        self.seen.len()
    }
}

impl<I, F, K, Q> Iterator for DistinctBy<I, F, K, Q>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    Q: EqualityComparer<K>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            iter,
            key_selector,
            seen,
        } = self;
        iter.find(|element| seen.insert(key_selector(element)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, F, K, Q> FusedIterator for DistinctBy<I, F, K, Q>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    Q: EqualityComparer<K>,
{
}

impl<I: fmt::Debug, F, K, Q> fmt::Debug for DistinctBy<I, F, K, Q> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DistinctBy")
            .field("iter", &self.iter)
            .field("distinct_count", &self.seen.length)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::{DefaultEquality, ProjectedEquality};
    use rstest::rstest;

    #[rstest]
    fn test_key_set_insert() {
        let mut keys = KeySet::new(DefaultEquality::new());
        assert!(keys.insert(1));
        assert!(keys.insert(2));
        assert!(!keys.insert(1));
        assert_eq!(keys.len(), 2);
    }

    /// Every key collides into the same bucket.
    struct ConstantHash;

    impl EqualityComparer<i32> for ConstantHash {
        fn equals(&self, left: &i32, right: &i32) -> bool {
            left == right
        }

        fn hash_key(&self, _value: &i32) -> u64 {
            7
        }
    }

    #[rstest]
    fn test_key_set_handles_collisions() {
        let mut keys = KeySet::new(ConstantHash);
        for key in 0..20 {
            assert!(keys.insert(key));
        }
        assert!(!keys.insert(5));
        assert_eq!(keys.len(), 20);
        assert_eq!(keys.buckets.len(), 1);
    }

    #[rstest]
    fn test_distinct_by_counts_keys() {
        let mut distinct = DistinctBy::new(
            ["a", "B", "b", "A", "c"].into_iter(),
            |text: &&str| text.to_string(),
            ProjectedEquality::new(|text: &String| text.to_lowercase()),
        );
        assert_eq!(distinct.next(), Some("a"));
        assert_eq!(distinct.next(), Some("B"));
        assert_eq!(distinct.distinct_count(), 2);
        assert_eq!(distinct.next(), Some("c"));
        assert_eq!(distinct.next(), None);
    }
}
