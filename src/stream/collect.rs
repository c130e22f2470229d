//! Futures driving a stream into the shared collectors.

use std::pin::pin;

use futures::{TryStream, TryStreamExt};

use crate::collections::{SortedAssociation, SortedSet};
use crate::comparer::Comparer;
use crate::error::SequenceError;
use crate::materialize::{AssociationCollector, SetCollector};

pub(super) async fn sorted_set<S, C>(stream: S, comparer: C) -> Result<SortedSet<S::Ok, C>, S::Error>
where
    S: TryStream,
    C: Comparer<S::Ok>,
{
    let mut stream = pin!(stream.into_stream());
    let mut collector = SetCollector::new(comparer);
    while let Some(element) = stream.try_next().await? {
        collector.push(element);
    }
    Ok(collector.finish())
}

pub(super) async fn association<A, S, K, E, F, G>(
    stream: S,
    key_selector: F,
    element_selector: G,
    comparer: A::Comparer,
) -> Result<A, S::Error>
where
    S: TryStream,
    S::Error: From<SequenceError>,
    A: SortedAssociation<K, E>,
    F: FnMut(&S::Ok) -> K,
    G: FnMut(S::Ok) -> E,
{
    let mut stream = pin!(stream.into_stream());
    let mut collector =
        AssociationCollector::<A, K, E, F, G>::new(comparer, key_selector, element_selector);
    while let Some(element) = stream.try_next().await? {
        collector.push(element)?;
    }
    Ok(collector.finish())
}
