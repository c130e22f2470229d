//! Equivalence relations with a compatible hash.

use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Hash builder used by [`DefaultEquality`] and [`ProjectedEquality`].
///
/// Selected by Cargo feature: `fxhash` picks `rustc_hash::FxBuildHasher`,
/// `ahash` picks `ahash::RandomState`, and the standard library's
/// `RandomState` is used otherwise.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`DefaultEquality`] and [`ProjectedEquality`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`DefaultEquality`] and [`ProjectedEquality`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// An equivalence relation over values of type `T`.
///
/// `equals` must be reflexive, symmetric and transitive, and values that are
/// equal must produce the same [`hash_key`](Self::hash_key). Both methods
/// must be deterministic for the lifetime of the comparer.
///
/// # Examples
///
/// ```rust
/// use seqext::comparer::{DefaultEquality, EqualityComparer};
///
/// let equality = DefaultEquality::new();
/// assert!(equality.equals(&"a", &"a"));
/// assert_eq!(equality.hash_key(&"a"), equality.hash_key(&"a"));
/// ```
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if both values belong to the same equivalence class.
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Hashes a value consistently with [`equals`](Self::equals).
    fn hash_key(&self, value: &T) -> u64;
}

impl<T: ?Sized, Q: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &Q {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }

    #[inline]
    fn hash_key(&self, value: &T) -> u64 {
        (**self).hash_key(value)
    }
}

/// Equality given by a type's own [`Eq`] and [`Hash`] implementations.
#[derive(Clone, Default)]
pub struct DefaultEquality<S = DefaultHashBuilder> {
    hash_builder: S,
}

impl DefaultEquality {
    /// Creates the default equality with a fresh hash builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> DefaultEquality<S> {
    /// Creates the default equality hashing through `hash_builder`.
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self { hash_builder }
    }
}

impl<T: Eq + Hash + ?Sized, S: BuildHasher> EqualityComparer<T> for DefaultEquality<S> {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    #[inline]
    fn hash_key(&self, value: &T) -> u64 {
        self.hash_builder.hash_one(value)
    }
}

impl<S> fmt::Debug for DefaultEquality<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("DefaultEquality").finish_non_exhaustive()
    }
}

/// Equality through a projected key.
///
/// Two values are equal when their projections are equal; the hash is the
/// hash of the projection.
///
/// # Examples
///
/// ```rust
/// use seqext::comparer::{EqualityComparer, ProjectedEquality};
///
/// let case_insensitive = ProjectedEquality::new(|text: &String| text.to_lowercase());
/// assert!(case_insensitive.equals(&"Tokyo".to_string(), &"TOKYO".to_string()));
/// ```
#[derive(Clone)]
pub struct ProjectedEquality<F, S = DefaultHashBuilder> {
    projection: F,
    hash_builder: S,
}

impl<F> ProjectedEquality<F> {
    /// Creates an equality comparing `projection(value)`.
    pub fn new(projection: F) -> Self {
        Self {
            projection,
            hash_builder: DefaultHashBuilder::default(),
        }
    }
}

impl<F, S> ProjectedEquality<F, S> {
    /// Creates an equality comparing `projection(value)`, hashing through
    /// `hash_builder`.
    pub const fn with_hasher(projection: F, hash_builder: S) -> Self {
        Self {
            projection,
            hash_builder,
        }
    }
}

impl<T: ?Sized, K, F, S> EqualityComparer<T> for ProjectedEquality<F, S>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
    S: BuildHasher,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (self.projection)(left) == (self.projection)(right)
    }

    #[inline]
    fn hash_key(&self, value: &T) -> u64 {
        self.hash_builder.hash_one((self.projection)(value))
    }
}

impl<F, S> fmt::Debug for ProjectedEquality<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ProjectedEquality")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_equality_is_reflexive_and_hash_stable() {
        let equality = DefaultEquality::new();
        assert!(equality.equals(&42, &42));
        assert!(!equality.equals(&42, &43));
        assert_eq!(equality.hash_key(&42), equality.hash_key(&42));
    }

    #[rstest]
    fn test_default_equality_on_unsized_values() {
        let equality = DefaultEquality::new();
        assert!(equality.equals("abc", "abc"));
        assert_eq!(equality.hash_key("abc"), equality.hash_key("abc"));
    }

    #[rstest]
    fn test_projected_equality_hashes_equal_values_alike() {
        let equality = ProjectedEquality::new(|value: &i32| value.rem_euclid(10));
        assert!(equality.equals(&3, &13));
        assert!(!equality.equals(&3, &14));
        assert_eq!(equality.hash_key(&3), equality.hash_key(&-7));
    }

    #[rstest]
    fn test_reference_delegates() {
        let equality = DefaultEquality::new();
        let borrowed = &equality;
        assert!(EqualityComparer::<i32>::equals(&borrowed, &1, &1));
    }
}
