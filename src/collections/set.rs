//! Comparer-ordered set.
//!
//! [`SortedSet`] keeps at most one element per equivalence class of its
//! comparer and iterates in ascending comparer order.
//!
//! # Duplicate Policy
//!
//! Inserting an element that compares equal to a stored one is a no-op:
//! **the first inserted element wins**. This matters when the comparer is
//! coarser than the element's own equality (for example when ordering
//! records by a single field).
//!
//! # Examples
//!
//! ```rust
//! use seqext::collections::SortedSet;
//! use seqext::comparer::KeyComparer;
//!
//! let mut set = SortedSet::with_comparer(KeyComparer::new(|pair: &(i32, char)| pair.0));
//! assert!(set.insert((2, 'a')));
//! assert!(set.insert((1, 'b')));
//! assert!(!set.insert((2, 'c')));
//!
//! let elements: Vec<_> = set.iter().copied().collect();
//! assert_eq!(elements, vec![(1, 'b'), (2, 'a')]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::tree::{self, RedBlackTree};
use crate::comparer::{Comparer, NaturalOrder};

/// A set ordered by a [`Comparer`], backed by a red-black tree.
///
/// # Time Complexity
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `insert`           | O(log N)   |
/// | `contains`         | O(log N)   |
/// | `first` / `last`   | O(log N)   |
/// | `len` / `is_empty` | O(1)       |
#[derive(Clone)]
pub struct SortedSet<T, C = NaturalOrder> {
    tree: RedBlackTree<T, (), C>,
}

impl<T: Ord> SortedSet<T> {
    /// Creates an empty set in natural order.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparer(NaturalOrder)
    }
}

impl<T, C> SortedSet<T, C> {
    /// Creates an empty set ordered by `comparer`.
    pub const fn with_comparer(comparer: C) -> Self {
        Self {
            tree: RedBlackTree::new(comparer),
        }
    }

    /// Returns the number of elements.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set holds no element.
    pub const fn is_empty(&self) -> bool {
        self.tree.len() == 0
    }

    /// Returns the comparer ordering this set.
    pub const fn comparer(&self) -> &C {
        self.tree.comparer()
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.tree.first().map(|(element, ())| element)
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        self.tree.last().map(|(element, ())| element)
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> SortedSetIter<'_, T> {
        SortedSetIter {
            inner: self.tree.iter(),
        }
    }
}

impl<T, C: Comparer<T>> SortedSet<T, C> {
    /// Adds an element unless an equivalent one is already present.
    ///
    /// Returns `true` if the element was added. An equivalent element that
    /// is already stored is kept and `element` is dropped.
    pub fn insert(&mut self, element: T) -> bool {
        self.tree.insert(element, ()).is_ok()
    }

    /// Returns `true` if an element equivalent to `element` is present.
    pub fn contains(&self, element: &T) -> bool {
        self.tree.get(element).is_some()
    }
}

impl<T: Ord> Default for SortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparer<T> + Default> FromIterator<T> for SortedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_comparer(C::default());
        set.extend(iter);
        set
    }
}

impl<T, C: Comparer<T>> Extend<T> for SortedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: PartialEq, C> PartialEq for SortedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for SortedSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for SortedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`SortedSet`] in ascending order.
#[derive(Clone)]
pub struct SortedSetIter<'a, T> {
    inner: tree::Iter<'a, T, ()>,
}

impl<'a, T> Iterator for SortedSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SortedSetIter<'_, T> {}

impl<T> FusedIterator for SortedSetIter<'_, T> {}

/// An owning iterator over the elements of a [`SortedSet`].
pub struct SortedSetIntoIter<T> {
    inner: std::vec::IntoIter<(T, ())>,
}

impl<T> Iterator for SortedSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedSetIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(element, ())| element)
    }
}

impl<T> ExactSizeIterator for SortedSetIntoIter<T> {}

impl<T> FusedIterator for SortedSetIntoIter<T> {}

impl<T, C> IntoIterator for SortedSet<T, C> {
    type Item = T;
    type IntoIter = SortedSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SortedSetIntoIter {
            inner: self.tree.into_entries().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSet<T, C> {
    type Item = &'a T;
    type IntoIter = SortedSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C> serde::Serialize for SortedSet<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for SortedSet<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparer<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::{KeyComparer, ReverseOrder};
    use rstest::rstest;

    #[rstest]
    fn test_new_set_is_empty() {
        let set: SortedSet<i32> = SortedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
    }

    #[rstest]
    fn test_insert_reports_whether_added() {
        let mut set = SortedSet::new();
        assert!(set.insert(3));
        assert!(set.insert(1));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(!set.contains(&2));
    }

    #[rstest]
    fn test_first_inserted_wins() {
        let mut set = SortedSet::with_comparer(KeyComparer::new(|text: &&str| text.len()));
        set.extend(["one", "two", "three", "six"]);
        let elements: Vec<&str> = set.into_iter().collect();
        assert_eq!(elements, vec!["one", "three"]);
    }

    #[rstest]
    fn test_reverse_comparer() {
        let set: SortedSet<i32, ReverseOrder> = [1, 5, 3, 5].into_iter().collect();
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![5, 3, 1]);
        assert_eq!(set.first(), Some(&5));
        assert_eq!(set.last(), Some(&1));
    }

    #[rstest]
    fn test_equality_and_debug() {
        let left: SortedSet<i32> = [3, 1, 2].into_iter().collect();
        let right: SortedSet<i32> = [1, 2, 3, 3].into_iter().collect();
        assert_eq!(left, right);
        assert_eq!(format!("{left:?}"), "{1, 2, 3}");
    }

    #[rstest]
    fn test_into_iter_is_double_ended() {
        let set: SortedSet<i32> = (1..=4).collect();
        let reversed: Vec<i32> = set.into_iter().rev().collect();
        assert_eq!(reversed, vec![4, 3, 2, 1]);
    }
}
