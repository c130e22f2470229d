//! Result containers produced by the materializing operations.
//!
//! - [`SortedSet`]: comparer-ordered set (red-black tree), first inserted
//!   element wins on equivalence
//! - [`SortedDictionary`]: comparer-ordered map (red-black tree) with unique
//!   keys
//! - [`SortedList`]: comparer-ordered map (parallel sorted arrays) with
//!   unique keys and positional access
//!
//! [`SortedDictionary`] and [`SortedList`] share the insertion contract
//! [`SortedAssociation`], which is what the sorted-association operations of
//! [`sequence`](crate::sequence) and [`stream`](crate::stream) are written
//! against.
//!
//! # Examples
//!
//! ```rust
//! use seqext::collections::{SortedAssociation, SortedDictionary, SortedList};
//! use seqext::comparer::NaturalOrder;
//!
//! fn fill<A: SortedAssociation<i32, char, Comparer = NaturalOrder>>() -> A {
//!     let mut association = A::with_comparer(NaturalOrder);
//!     association.insert_unique(2, 'b');
//!     association.insert_unique(1, 'a');
//!     association
//! }
//!
//! let list: SortedList<i32, char> = fill();
//! let dictionary: SortedDictionary<i32, char> = fill();
//! assert_eq!(list.keys(), &[1, 2]);
//! assert_eq!(dictionary.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
//! ```

mod dictionary;
mod list;
mod set;
mod tree;

pub use dictionary::SortedDictionary;
pub use dictionary::SortedDictionaryIter;
pub use list::SortedList;
pub use list::SortedListIter;
pub use set::SortedSet;
pub use set::SortedSetIntoIter;
pub use set::SortedSetIter;

use crate::comparer::Comparer;

/// An ordered key-value container whose keys are unique under a comparer.
///
/// Implemented by [`SortedList`] and [`SortedDictionary`]; callers pick the
/// container shape, the building algorithm is the same.
pub trait SortedAssociation<K, V>: Sized {
    /// The comparer ordering the keys.
    type Comparer: Comparer<K>;

    /// Creates an empty container ordered by `comparer`.
    fn with_comparer(comparer: Self::Comparer) -> Self;

    /// Adds an entry if no comparer-equal key is present.
    ///
    /// Returns `false`, leaving the container unchanged, when the key is
    /// already present.
    fn insert_unique(&mut self, key: K, value: V) -> bool;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no entry.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
struct AssociationVisitor<A, K, V> {
    expecting: &'static str,
    marker: std::marker::PhantomData<fn() -> (A, K, V)>,
}

#[cfg(feature = "serde")]
impl<A, K, V> AssociationVisitor<A, K, V> {
    const fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A, K, V> serde::de::Visitor<'de> for AssociationVisitor<A, K, V>
where
    A: SortedAssociation<K, V>,
    A::Comparer: Default,
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    type Value = A;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: serde::de::MapAccess<'de>,
    {
        let mut association = A::with_comparer(A::Comparer::default());
        while let Some((key, value)) = access.next_entry()? {
            if !association.insert_unique(key, value) {
                return Err(serde::de::Error::custom(format_args!(
                    "duplicate key in {}",
                    self.expecting
                )));
            }
        }
        Ok(association)
    }
}
