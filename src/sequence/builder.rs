//! Step-by-step configuration of the sorted-association operations.

use std::fmt;

use super::SequenceExt;
use crate::collections::{SortedAssociation, SortedDictionary, SortedList};
use crate::comparer::{Comparer, NaturalOrder};
use crate::error::{Result, SequenceError};

type KeySelector<'a, T, K> = Box<dyn FnMut(&T) -> K + 'a>;
type ElementSelector<'a, T, E> = Box<dyn FnMut(T) -> E + 'a>;

/// Collects the arguments of a sorted-association operation before running
/// it against a source.
///
/// The key selector is required. The element selector defaults to the
/// identity function and the comparer to [`NaturalOrder`]. Running a
/// terminal operation without a key selector fails with
/// [`SequenceError::NullArgument`].
///
/// # Examples
///
/// ```rust
/// use seqext::sequence::AssociationBuilder;
/// use seqext::comparer::{NaturalOrder, ReverseOrder};
/// use seqext::SequenceError;
///
/// let list = AssociationBuilder::new()
///     .key_selector(|word: &&str| word.len())
///     .element_selector(|word: &str| word.to_uppercase())
///     .comparer(ReverseOrder(NaturalOrder))
///     .to_sorted_list(["a", "abc", "ab"])
///     .unwrap();
/// assert_eq!(list.keys(), &[3, 2, 1]);
/// assert_eq!(list.values(), &["ABC", "AB", "A"]);
///
/// let missing = AssociationBuilder::<i32, i32>::new().to_sorted_dictionary([1, 2]);
/// assert_eq!(
///     missing.unwrap_err(),
///     SequenceError::NullArgument { parameter: "key_selector" }
/// );
/// ```
pub struct AssociationBuilder<'a, T, K, E = T, C = NaturalOrder> {
    key_selector: Option<KeySelector<'a, T, K>>,
    element_selector: ElementSelector<'a, T, E>,
    comparer: C,
}

impl<'a, T: 'a, K> AssociationBuilder<'a, T, K> {
    /// Creates a builder with no key selector, the identity element
    /// selector and natural key order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_selector: None,
            element_selector: Box::new(|element: T| element),
            comparer: NaturalOrder,
        }
    }
}

impl<'a, T: 'a, K> Default for AssociationBuilder<'a, T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, K, E, C> AssociationBuilder<'a, T, K, E, C> {
    /// Sets the function computing each element's key.
    #[must_use]
    pub fn key_selector<F>(mut self, key_selector: F) -> Self
    where
        F: FnMut(&T) -> K + 'a,
    {
        self.key_selector = Some(Box::new(key_selector));
        self
    }

    /// Sets the function computing each element's stored value.
    #[must_use]
    pub fn element_selector<E2, G>(self, element_selector: G) -> AssociationBuilder<'a, T, K, E2, C>
    where
        G: FnMut(T) -> E2 + 'a,
    {
        AssociationBuilder {
            key_selector: self.key_selector,
            element_selector: Box::new(element_selector),
            comparer: self.comparer,
        }
    }

    /// Sets the comparer ordering the keys.
    #[must_use]
    pub fn comparer<C2>(self, comparer: C2) -> AssociationBuilder<'a, T, K, E, C2> {
        AssociationBuilder {
            key_selector: self.key_selector,
            element_selector: self.element_selector,
            comparer,
        }
    }

    /// Materializes `source` into any [`SortedAssociation`] ordered by the
    /// configured comparer.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::NullArgument`] if no key selector was set.
    /// - [`SequenceError::DuplicateKey`] if two elements have comparer-equal
    ///   keys.
    pub fn build<A, I>(self, source: I) -> Result<A>
    where
        A: SortedAssociation<K, E, Comparer = C>,
        I: IntoIterator<Item = T>,
    {
        let key_selector = self.key_selector.ok_or(SequenceError::NullArgument {
            parameter: "key_selector",
        })?;
        source
            .into_iter()
            .collect_association(key_selector, self.element_selector, self.comparer)
    }

    /// Materializes `source` into a [`SortedList`].
    ///
    /// # Errors
    ///
    /// See [`build`](Self::build).
    pub fn to_sorted_list<I>(self, source: I) -> Result<SortedList<K, E, C>>
    where
        C: Comparer<K>,
        I: IntoIterator<Item = T>,
    {
        self.build(source)
    }

    /// Materializes `source` into a [`SortedDictionary`].
    ///
    /// # Errors
    ///
    /// See [`build`](Self::build).
    pub fn to_sorted_dictionary<I>(self, source: I) -> Result<SortedDictionary<K, E, C>>
    where
        C: Comparer<K>,
        I: IntoIterator<Item = T>,
    {
        self.build(source)
    }
}

impl<T, K, E, C: fmt::Debug> fmt::Debug for AssociationBuilder<'_, T, K, E, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AssociationBuilder")
            .field("has_key_selector", &self.key_selector.is_some())
            .field("comparer", &self.comparer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::FnComparer;
    use rstest::rstest;

    #[rstest]
    fn test_missing_key_selector() {
        let result = AssociationBuilder::<char, u32>::new().to_sorted_list("abc".chars());
        assert_eq!(
            result,
            Err(SequenceError::NullArgument {
                parameter: "key_selector"
            })
        );
    }

    #[rstest]
    fn test_missing_key_selector_does_not_consume_source() {
        let mut pulled = 0;
        let source = (0..3).inspect(|_| pulled += 1);
        let result = AssociationBuilder::<i32, i32>::new().to_sorted_dictionary(source);
        assert!(result.is_err());
        assert_eq!(pulled, 0);
    }

    #[rstest]
    fn test_key_only() {
        let dictionary = AssociationBuilder::new()
            .key_selector(|value: &i32| value % 10)
            .to_sorted_dictionary([13, 21, 32])
            .unwrap();
        assert_eq!(
            dictionary.into_iter().collect::<Vec<_>>(),
            vec![(1, 21), (2, 32), (3, 13)]
        );
    }

    #[rstest]
    fn test_key_and_comparer() {
        let list = AssociationBuilder::new()
            .key_selector(|value: &i32| *value)
            .comparer(FnComparer::new(|left: &i32, right: &i32| right.cmp(left)))
            .to_sorted_list([1, 3, 2])
            .unwrap();
        assert_eq!(list.keys(), &[3, 2, 1]);
    }

    #[rstest]
    fn test_duplicate_key_is_reported() {
        let result = AssociationBuilder::new()
            .key_selector(|value: &i32| value / 2)
            .element_selector(|value: i32| value * 100)
            .to_sorted_list([0, 2, 3]);
        assert_eq!(result, Err(SequenceError::DuplicateKey { position: 2 }));
    }

    #[rstest]
    fn test_debug_reports_key_selector() {
        let builder = AssociationBuilder::<i32, i32>::new();
        assert!(format!("{builder:?}").contains("has_key_selector: false"));
        let builder = builder.key_selector(|value| *value);
        assert!(format!("{builder:?}").contains("has_key_selector: true"));
    }
}
