//! Array-backed sorted association.
//!
//! [`SortedList`] stores keys and values in two parallel vectors kept in
//! ascending comparer order. Lookups use binary search; insertion shifts the
//! tail, except for keys arriving in ascending order, which are appended.
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity                         |
//! |----------------------------|------------------------------------|
//! | `get` / `index_of_key`     | O(log N)                           |
//! | `key_at` / `value_at`      | O(1)                               |
//! | `try_insert`               | O(N), O(log N) for ascending input |
//! | `remove`                   | O(N)                               |

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use super::SortedAssociation;
use crate::comparer::{Comparer, NaturalOrder};

/// A map with unique keys ordered by a [`Comparer`], indexable by position.
///
/// # Examples
///
/// ```rust
/// use seqext::collections::SortedList;
///
/// let mut list = SortedList::new();
/// assert!(list.try_insert("banana", 3).is_ok());
/// assert!(list.try_insert("apple", 5).is_ok());
///
/// assert_eq!(list.key_at(0), Some(&"apple"));
/// assert_eq!(list.value_at(1), Some(&3));
/// assert_eq!(list.index_of_key(&"banana"), Some(1));
/// ```
#[derive(Clone)]
pub struct SortedList<K, V, C = NaturalOrder> {
    keys: Vec<K>,
    values: Vec<V>,
    comparer: C,
}

impl<K: Ord, V> SortedList<K, V> {
    /// Creates an empty list in natural key order.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparer(NaturalOrder)
    }
}

impl<K, V, C> SortedList<K, V, C> {
    /// Creates an empty list ordered by `comparer`.
    pub const fn with_comparer(comparer: C) -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            comparer,
        }
    }

    /// Creates an empty list ordered by `comparer` with room for
    /// `capacity` entries.
    pub fn with_capacity_and_comparer(capacity: usize, comparer: C) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            comparer,
        }
    }

    /// Returns the number of entries.
    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the list holds no entry.
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the comparer ordering the keys.
    pub const fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Returns the keys in ascending order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Returns the values in key order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Returns the key at `index`.
    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Returns the value at `index`.
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// Removes and returns the entry at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<(K, V)> {
        (index < self.keys.len()).then(|| (self.keys.remove(index), self.values.remove(index)))
    }

    /// Returns an iterator over entries in ascending key order.
    pub fn iter(&self) -> SortedListIter<'_, K, V> {
        SortedListIter {
            inner: self.keys.iter().zip(self.values.iter()),
        }
    }
}

impl<K, V, C: Comparer<K>> SortedList<K, V, C> {
    fn search(&self, key: &K) -> Result<usize, usize> {
        self.keys
            .binary_search_by(|probe| self.comparer.compare(probe, key))
    }

    /// Returns the position of `key`.
    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        self.search(key).ok()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index_of_key(key).map(|index| &self.values[index])
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index_of_key(key).map(|index| &mut self.values[index])
    }

    /// Returns `true` if a comparer-equal key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Adds an entry if no comparer-equal key is present.
    ///
    /// # Errors
    ///
    /// Returns the rejected entry when the key is already present. The
    /// stored entry is left unchanged.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        let position = match self.keys.last() {
            None => 0,
            Some(last) => match self.comparer.compare(last, &key) {
                Ordering::Less => self.keys.len(),
                Ordering::Equal => return Err((key, value)),
                Ordering::Greater => match self.search(&key) {
                    Ok(_) => return Err((key, value)),
                    Err(position) => position,
                },
            },
        };
        self.keys.insert(position, key);
        self.values.insert(position, value);
        Ok(())
    }

    /// Removes the entry stored under `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.index_of_key(key)
            .and_then(|index| self.remove_at(index))
            .map(|(_, value)| value)
    }
}

impl<K: Ord, V> Default for SortedList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Comparer<K>> SortedAssociation<K, V> for SortedList<K, V, C> {
    type Comparer = C;

    fn with_comparer(comparer: C) -> Self {
        Self::with_comparer(comparer)
    }

    fn insert_unique(&mut self, key: K, value: V) -> bool {
        self.try_insert(key, value).is_ok()
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for SortedList<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<K: Eq, V: Eq, C> Eq for SortedList<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for SortedList<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`SortedList`] in key order.
#[derive(Clone)]
pub struct SortedListIter<'a, K, V> {
    inner: std::iter::Zip<std::slice::Iter<'a, K>, std::slice::Iter<'a, V>>,
}

impl<'a, K, V> Iterator for SortedListIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for SortedListIter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for SortedListIter<'_, K, V> {}

impl<K, V> FusedIterator for SortedListIter<'_, K, V> {}

impl<K, V, C> IntoIterator for SortedList<K, V, C> {
    type Item = (K, V);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}

impl<'a, K, V, C> IntoIterator for &'a SortedList<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = SortedListIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize, C> serde::Serialize for SortedList<K, V, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::Deserialize<'de> for SortedList<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparer<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(super::AssociationVisitor::<Self, K, V>::new("a sorted list"))
    }
}

// =============================================================================
// Tests
// =============================================================================
