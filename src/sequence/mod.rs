//! Operations over synchronous (pull) sequences.
//!
//! [`SequenceExt`] is implemented for every [`Iterator`] and adds:
//!
//! - **Materializing operations**, which consume the whole source:
//!   [`to_sorted_set`](SequenceExt::to_sorted_set),
//!   [`to_sorted_list`](SequenceExt::to_sorted_list) and
//!   [`to_sorted_dictionary`](SequenceExt::to_sorted_dictionary), each with
//!   a variant taking an explicit comparer.
//! - **Lazy adapters**, which pull from the source only on demand:
//!   [`distinct_by`](SequenceExt::distinct_by) and
//!   [`chunk`](SequenceExt::chunk).
//!
//! # Duplicate handling
//!
//! The set operations silently keep the **first** element of every
//! equivalence class. The list and dictionary operations instead fail with
//! [`SequenceError::DuplicateKey`](crate::SequenceError::DuplicateKey) on
//! the first comparer-equal key, returning no partial result.
//!
//! # Examples
//!
//! ```rust
//! use seqext::sequence::SequenceExt;
//!
//! let pairs = [(1, 'a'), (0, 'b'), (1, 'c'), (2, 'd')];
//!
//! let first_per_key: Vec<_> = pairs.into_iter().distinct_by(|pair| pair.0).collect();
//! assert_eq!(first_per_key, vec![(1, 'a'), (0, 'b'), (2, 'd')]);
//!
//! let chunks: Vec<Vec<i32>> = (1..=5).chunk(2).unwrap().collect();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let duplicate = pairs.into_iter().to_sorted_list(|pair| pair.0);
//! assert!(duplicate.is_err());
//! ```

mod builder;
mod chunk;
mod distinct;

pub use builder::AssociationBuilder;
pub use chunk::Chunk;
pub use chunk::ChunkSize;
pub use distinct::DistinctBy;

use std::hash::Hash;

use crate::collections::{SortedAssociation, SortedDictionary, SortedList, SortedSet};
use crate::comparer::{Comparer, DefaultEquality, EqualityComparer, NaturalOrder};
use crate::error::Result;
use crate::materialize::{AssociationCollector, SetCollector};

/// Sorting, deduplication and chunking operations for iterators.
///
/// Every method is available on any [`Iterator`] once this trait is in
/// scope.
pub trait SequenceExt: Iterator + Sized {
    /// Collects the elements into a [`SortedSet`] in natural order.
    ///
    /// Of several equal elements only the first one encountered is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::sequence::SequenceExt;
    ///
    /// let set = [3, 1, 3, 2].into_iter().to_sorted_set();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    fn to_sorted_set(self) -> SortedSet<Self::Item>
    where
        Self::Item: Ord,
    {
        self.to_sorted_set_by(NaturalOrder)
    }

    /// Collects the elements into a [`SortedSet`] ordered by `comparer`.
    ///
    /// Of several comparer-equal elements only the first one encountered
    /// is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::comparer::KeyComparer;
    /// use seqext::sequence::SequenceExt;
    ///
    /// let words = ["pear", "Plum", "apple", "plum"];
    /// let set = words
    ///     .into_iter()
    ///     .to_sorted_set_by(KeyComparer::new(|word: &&str| word.to_lowercase()));
    /// let kept: Vec<&str> = set.into_iter().collect();
    /// assert_eq!(kept, vec!["apple", "pear", "Plum"]);
    /// ```
    fn to_sorted_set_by<C>(self, comparer: C) -> SortedSet<Self::Item, C>
    where
        C: Comparer<Self::Item>,
    {
        let mut collector = SetCollector::new(comparer);
        self.for_each(|element| collector.push(element));
        collector.finish()
    }

    /// Collects the elements into a [`SortedList`] keyed by `key_selector`
    /// in natural key order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::DuplicateKey`](crate::SequenceError::DuplicateKey)
    /// if two elements have equal keys.
    fn to_sorted_list<K, F>(self, key_selector: F) -> Result<SortedList<K, Self::Item>>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.to_sorted_list_with(key_selector, std::convert::identity, NaturalOrder)
    }

    /// Collects `element_selector(element)` values into a [`SortedList`]
    /// keyed by `key_selector` and ordered by `comparer`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::DuplicateKey`](crate::SequenceError::DuplicateKey)
    /// if two elements have comparer-equal keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::comparer::{NaturalOrder, ReverseOrder};
    /// use seqext::sequence::SequenceExt;
    ///
    /// let list = [("b", 2), ("a", 1), ("c", 3)]
    ///     .into_iter()
    ///     .to_sorted_list_with(|pair| pair.1, |pair| pair.0, ReverseOrder(NaturalOrder))
    ///     .unwrap();
    /// assert_eq!(list.keys(), &[3, 2, 1]);
    /// assert_eq!(list.values(), &["c", "b", "a"]);
    /// ```
    fn to_sorted_list_with<K, E, C, F, G>(
        self,
        key_selector: F,
        element_selector: G,
        comparer: C,
    ) -> Result<SortedList<K, E, C>>
    where
        C: Comparer<K>,
        F: FnMut(&Self::Item) -> K,
        G: FnMut(Self::Item) -> E,
    {
        self.collect_association(key_selector, element_selector, comparer)
    }

    /// Collects the elements into a [`SortedDictionary`] keyed by
    /// `key_selector` in natural key order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::DuplicateKey`](crate::SequenceError::DuplicateKey)
    /// if two elements have equal keys.
    fn to_sorted_dictionary<K, F>(self, key_selector: F) -> Result<SortedDictionary<K, Self::Item>>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.to_sorted_dictionary_with(key_selector, std::convert::identity, NaturalOrder)
    }

    /// Collects `element_selector(element)` values into a
    /// [`SortedDictionary`] keyed by `key_selector` and ordered by
    /// `comparer`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::DuplicateKey`](crate::SequenceError::DuplicateKey)
    /// if two elements have comparer-equal keys.
    fn to_sorted_dictionary_with<K, E, C, F, G>(
        self,
        key_selector: F,
        element_selector: G,
        comparer: C,
    ) -> Result<SortedDictionary<K, E, C>>
    where
        C: Comparer<K>,
        F: FnMut(&Self::Item) -> K,
        G: FnMut(Self::Item) -> E,
    {
        self.collect_association(key_selector, element_selector, comparer)
    }

    /// Collects the elements into any [`SortedAssociation`].
    ///
    /// This is the algorithm behind
    /// [`to_sorted_list_with`](Self::to_sorted_list_with) and
    /// [`to_sorted_dictionary_with`](Self::to_sorted_dictionary_with): for
    /// each element the key is computed first, then the stored value, then
    /// the entry is inserted.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::DuplicateKey`](crate::SequenceError::DuplicateKey)
    /// carrying the source position of the first element whose key was
    /// already present. The rest of the source is not consumed.
    fn collect_association<A, K, E, F, G>(
        self,
        key_selector: F,
        element_selector: G,
        comparer: A::Comparer,
    ) -> Result<A>
    where
        A: SortedAssociation<K, E>,
        F: FnMut(&Self::Item) -> K,
        G: FnMut(Self::Item) -> E,
    {
        let mut collector =
            AssociationCollector::<A, K, E, F, G>::new(comparer, key_selector, element_selector);
        for element in self {
            collector.push(element)?;
        }
        Ok(collector.finish())
    }

    /// Yields the first element for each distinct key, in source order.
    ///
    /// Keys are compared with their own [`Eq`] and [`Hash`]
    /// implementations.
    fn distinct_by<K, F>(self, key_selector: F) -> DistinctBy<Self, F, K, DefaultEquality>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctBy::new(self, key_selector, DefaultEquality::new())
    }

    /// Yields the first element for each key distinct under `equality`, in
    /// source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::comparer::ProjectedEquality;
    /// use seqext::sequence::SequenceExt;
    ///
    /// let names = ["Ada", "ada", "Grace", "ADA", "grace", "Linus"];
    /// let distinct: Vec<&str> = names
    ///     .into_iter()
    ///     .distinct_by_with(|name| *name, ProjectedEquality::new(|name: &&str| name.to_lowercase()))
    ///     .collect();
    /// assert_eq!(distinct, vec!["Ada", "Grace", "Linus"]);
    /// ```
    fn distinct_by_with<K, F, Q>(self, key_selector: F, equality: Q) -> DistinctBy<Self, F, K, Q>
    where
        F: FnMut(&Self::Item) -> K,
        Q: EqualityComparer<K>,
    {
        DistinctBy::new(self, key_selector, equality)
    }

    /// Splits the sequence into consecutive chunks of `size` elements.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`](crate::SequenceError::OutOfRange)
    /// if `size` is zero. Signed sizes go through [`ChunkSize`] and
    /// [`chunk_by_size`](Self::chunk_by_size).
    fn chunk(self, size: usize) -> Result<Chunk<Self>> {
        ChunkSize::try_from(size).map(|size| Chunk::new(self, size))
    }

    /// Splits the sequence into consecutive chunks of a pre-validated size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqext::sequence::{ChunkSize, SequenceExt};
    ///
    /// let size = ChunkSize::try_from(30_i32).unwrap();
    /// let lengths: Vec<usize> = (1..=100).chunk_by_size(size).map(|chunk| chunk.len()).collect();
    /// assert_eq!(lengths, vec![30, 30, 30, 10]);
    /// ```
    fn chunk_by_size(self, size: ChunkSize) -> Chunk<Self> {
        Chunk::new(self, size)
    }
}

impl<I: Iterator> SequenceExt for I {}

static_assertions::assert_impl_all!(Chunk<std::vec::IntoIter<i32>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(
    DistinctBy<std::vec::IntoIter<i32>, fn(&i32) -> i32, i32, DefaultEquality>: Send, Sync
);
static_assertions::assert_impl_all!(ChunkSize: Send, Sync, Copy);
