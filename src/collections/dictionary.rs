//! Tree-backed sorted association.

use std::fmt;
use std::iter::FusedIterator;

use super::SortedAssociation;
use super::tree::{self, RedBlackTree};
use crate::comparer::{Comparer, NaturalOrder};

/// A map with unique keys ordered by a [`Comparer`], backed by a
/// red-black tree.
///
/// Unlike [`SortedList`](super::SortedList) it offers no positional access,
/// but every insertion is O(log N) regardless of input order.
///
/// # Examples
///
/// ```rust
/// use seqext::collections::SortedDictionary;
///
/// let mut dictionary = SortedDictionary::new();
/// assert!(dictionary.try_insert(2, "two").is_ok());
/// assert!(dictionary.try_insert(1, "one").is_ok());
/// assert_eq!(dictionary.try_insert(2, "deux"), Err((2, "deux")));
///
/// let keys: Vec<i32> = dictionary.keys().copied().collect();
/// assert_eq!(keys, vec![1, 2]);
/// assert_eq!(dictionary.get(&2), Some(&"two"));
/// ```
#[derive(Clone)]
pub struct SortedDictionary<K, V, C = NaturalOrder> {
    tree: RedBlackTree<K, V, C>,
}

impl<K: Ord, V> SortedDictionary<K, V> {
    /// Creates an empty dictionary in natural key order.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparer(NaturalOrder)
    }
}

impl<K, V, C> SortedDictionary<K, V, C> {
    /// Creates an empty dictionary ordered by `comparer`.
    pub const fn with_comparer(comparer: C) -> Self {
        Self {
            tree: RedBlackTree::new(comparer),
        }
    }

    /// Returns the number of entries.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the dictionary holds no entry.
    pub const fn is_empty(&self) -> bool {
        self.tree.len() == 0
    }

    /// Returns the comparer ordering the keys.
    pub const fn comparer(&self) -> &C {
        self.tree.comparer()
    }

    /// Returns the entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.first()
    }

    /// Returns the entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.last()
    }

    /// Returns an iterator over entries in ascending key order.
    pub fn iter(&self) -> SortedDictionaryIter<'_, K, V> {
        SortedDictionaryIter {
            inner: self.tree.iter(),
        }
    }

    /// Returns an iterator over keys in ascending order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in key order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V, C: Comparer<K>> SortedDictionary<K, V, C> {
    /// Adds an entry if no comparer-equal key is present.
    ///
    /// # Errors
    ///
    /// Returns the rejected entry when the key is already present. The
    /// stored entry is left unchanged.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        self.tree.insert(key, value)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }

    /// Returns `true` if a comparer-equal key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.get(key).is_some()
    }
}

impl<K: Ord, V> Default for SortedDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Comparer<K>> SortedAssociation<K, V> for SortedDictionary<K, V, C> {
    type Comparer = C;

    fn with_comparer(comparer: C) -> Self {
        Self::with_comparer(comparer)
    }

    fn insert_unique(&mut self, key: K, value: V) -> bool {
        self.tree.insert(key, value).is_ok()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for SortedDictionary<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for SortedDictionary<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for SortedDictionary<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`SortedDictionary`] in key order.
#[derive(Clone)]
pub struct SortedDictionaryIter<'a, K, V> {
    inner: tree::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for SortedDictionaryIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for SortedDictionaryIter<'_, K, V> {}

impl<K, V> FusedIterator for SortedDictionaryIter<'_, K, V> {}

impl<K, V, C> IntoIterator for SortedDictionary<K, V, C> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_entries().into_iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a SortedDictionary<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = SortedDictionaryIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize, C> serde::Serialize for SortedDictionary<K, V, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::Deserialize<'de> for SortedDictionary<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparer<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(super::AssociationVisitor::<Self, K, V>::new("a sorted dictionary"))
    }
}

// =============================================================================
// Tests
// =============================================================================
