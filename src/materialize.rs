//! Insertion loops shared by the synchronous and asynchronous materializing
//! operations.
//!
//! Both front ends feed elements one at a time into a collector, so a sorted
//! set or sorted association built from an iterator is identical to one built
//! from a stream yielding the same elements.

use std::any::type_name;
use std::marker::PhantomData;

use crate::collections::{SortedAssociation, SortedSet};
use crate::comparer::Comparer;
use crate::error::{Result, SequenceError};

/// Builds a [`SortedSet`], keeping the first element of every equivalence
/// class.
pub(crate) struct SetCollector<T, C> {
    set: SortedSet<T, C>,
    observed: usize,
}

impl<T, C: Comparer<T>> SetCollector<T, C> {
    pub(crate) const fn new(comparer: C) -> Self {
        Self {
            set: SortedSet::with_comparer(comparer),
            observed: 0,
        }
    }

    pub(crate) fn push(&mut self, element: T) {
        self.observed += 1;
        self.set.insert(element);
    }

    pub(crate) fn finish(self) -> SortedSet<T, C> {
        tracing::debug!(
            observed = self.observed,
            distinct = self.set.len(),
            "materialized sorted set"
        );
        self.set
    }
}

/// Builds a [`SortedAssociation`], failing on the first comparer-equal key.
pub(crate) struct AssociationCollector<A, K, E, F, G> {
    association: A,
    key_selector: F,
    element_selector: G,
    position: usize,
    marker: PhantomData<fn(K, E)>,
}

impl<A, K, E, F, G> AssociationCollector<A, K, E, F, G>
where
    A: SortedAssociation<K, E>,
{
    pub(crate) fn new(comparer: A::Comparer, key_selector: F, element_selector: G) -> Self {
        Self {
            association: A::with_comparer(comparer),
            key_selector,
            element_selector,
            position: 0,
            marker: PhantomData,
        }
    }

    pub(crate) fn push<T>(&mut self, element: T) -> Result<()>
    where
        F: FnMut(&T) -> K,
        G: FnMut(T) -> E,
    {
        let key = (self.key_selector)(&element);
        let value = (self.element_selector)(element);
        if !self.association.insert_unique(key, value) {
            tracing::debug!(
                position = self.position,
                container = type_name::<A>(),
                "duplicate key while building sorted association"
            );
            return Err(SequenceError::DuplicateKey {
                position: self.position,
            });
        }
        self.position += 1;
        Ok(())
    }

    pub(crate) fn finish(self) -> A {
        tracing::debug!(
            entries = self.association.len(),
            container = type_name::<A>(),
            "materialized sorted association"
        );
        self.association
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{SortedDictionary, SortedList};
    use crate::comparer::NaturalOrder;
    use rstest::rstest;

    #[rstest]
    fn test_set_collector_keeps_first() {
        let mut collector = SetCollector::new(NaturalOrder);
        for element in [2, 1, 2, 3] {
            collector.push(element);
        }
        let set = collector.finish();
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_association_collector_reports_position() {
        let mut collector: AssociationCollector<SortedList<i32, char>, _, _, _, _> =
            AssociationCollector::new(
                NaturalOrder,
                |pair: &(i32, char)| pair.0,
                |pair: (i32, char)| pair.1,
            );
        assert_eq!(collector.push((1, 'a')), Ok(()));
        assert_eq!(collector.push((2, 'b')), Ok(()));
        assert_eq!(
            collector.push((1, 'c')),
            Err(SequenceError::DuplicateKey { position: 2 })
        );
    }

    #[rstest]
    fn test_association_collector_finishes() {
        let mut collector: AssociationCollector<SortedDictionary<i32, i32>, _, _, _, _> =
            AssociationCollector::new(NaturalOrder, |value: &i32| -value, |value: i32| value);
        for value in [1, 2, 3] {
            assert!(collector.push(value).is_ok());
        }
        let dictionary = collector.finish();
        assert_eq!(
            dictionary.into_iter().collect::<Vec<_>>(),
            vec![(-3, 3), (-2, 2), (-1, 1)]
        );
    }
}
