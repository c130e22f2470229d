//! Total-order comparers.

use std::cmp::Ordering;
use std::fmt;

/// A total order over values of type `T`.
///
/// Implementations must be consistent: `compare(a, b)` must always return
/// the same answer for the same inputs, `compare(a, b) == compare(b, a).reverse()`,
/// and the relation must be transitive. Two values comparing
/// [`Ordering::Equal`] are treated as the same key by every sorted container
/// of this crate.
///
/// # Examples
///
/// ```rust
/// use seqext::comparer::{Comparer, NaturalOrder};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
/// ```
pub trait Comparer<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// Combinators for building comparers out of other comparers.
///
/// The methods do not depend on the compared type, so they can be called on
/// comparers such as [`NaturalOrder`] that order many types. Implemented for
/// every comparer of this crate; a custom comparer opts in with an empty
/// `impl ComparerExt for MyComparer {}`.
///
/// # Examples
///
/// ```rust
/// use seqext::comparer::{Comparer, ComparerExt, KeyComparer, NaturalOrder};
/// use std::cmp::Ordering;
///
/// let descending = NaturalOrder.reversed();
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
///
/// let by_length = KeyComparer::new(|word: &&str| word.len()).then(NaturalOrder);
/// assert_eq!(by_length.compare(&"bb", &"aa"), Ordering::Greater);
/// ```
pub trait ComparerExt: Sized {
    /// Returns a comparer that inverts this order.
    fn reversed(self) -> ReverseOrder<Self> {
        ReverseOrder(self)
    }

    /// Returns a comparer that breaks ties of this order with `next`.
    fn then<D>(self, next: D) -> ThenComparer<Self, D> {
        ThenComparer {
            first: self,
            second: next,
        }
    }
}

impl ComparerExt for NaturalOrder {}
impl<C> ComparerExt for ReverseOrder<C> {}
impl<A, B> ComparerExt for ThenComparer<A, B> {}
impl<F> ComparerExt for FnComparer<F> {}
impl<F> ComparerExt for KeyComparer<F> {}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for Box<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

/// The natural order of a type, as given by its [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// The inverse of another comparer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder<C = NaturalOrder>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Lexicographic combination of two comparers.
///
/// Created by [`ComparerExt::then`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ThenComparer<A, B> {
    first: A,
    second: B,
}

impl<T: ?Sized, A: Comparer<T>, B: Comparer<T>> Comparer<T> for ThenComparer<A, B> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.first
            .compare(left, right)
            .then_with(|| self.second.compare(left, right))
    }
}

/// A comparer backed by a closure.
///
/// # Examples
///
/// ```rust
/// use seqext::comparer::{Comparer, FnComparer};
/// use std::cmp::Ordering;
///
/// let case_insensitive =
///     FnComparer::new(|left: &String, right: &String| left.to_lowercase().cmp(&right.to_lowercase()));
/// assert_eq!(
///     case_insensitive.compare(&"Apple".to_string(), &"apple".to_string()),
///     Ordering::Equal
/// );
/// ```
#[derive(Clone, Copy)]
pub struct FnComparer<F> {
    function: F,
}

impl<F> FnComparer<F> {
    /// Wraps `function` as a comparer.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<T: ?Sized, F> Comparer<T> for FnComparer<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.function)(left, right)
    }
}

impl<F> fmt::Debug for FnComparer<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FnComparer").finish_non_exhaustive()
    }
}

/// Orders values by the natural order of a projected key.
///
/// The projection must be pure; it is called on every comparison.
#[derive(Clone, Copy)]
pub struct KeyComparer<F> {
    projection: F,
}

impl<F> KeyComparer<F> {
    /// Creates a comparer ordering by `projection(value)`.
    pub const fn new(projection: F) -> Self {
        Self { projection }
    }
}

impl<T: ?Sized, K: Ord, F> Comparer<T> for KeyComparer<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.projection)(left).cmp(&(self.projection)(right))
    }
}

impl<F> fmt::Debug for KeyComparer<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("KeyComparer").finish_non_exhaustive()
    }
}
