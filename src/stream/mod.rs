//! Materializing operations over asynchronous, fallible sequences.
//!
//! [`AsyncSequenceExt`] is implemented for every [`TryStream`], which covers
//! paged cursors and any other source delivering `Result<T, E>` items over
//! time. The operations mirror the materializing half of
//! [`sequence`](crate::sequence): they use the same containers and the same
//! duplicate policies, so feeding the same logical sequence to the
//! synchronous and asynchronous variants yields equal results.
//!
//! # Errors
//!
//! The stream's own error type is kept. It must be constructible from
//! [`SequenceError`] so that duplicate keys and cancellation can be reported
//! through it. A source error aborts the operation and is returned
//! unchanged; no partial result is kept.
//!
//! # Cancellation
//!
//! [`with_cancellation`](AsyncSequenceExt::with_cancellation) attaches a
//! [`CancellationToken`] to the source. Any of the operations run on the
//! wrapped stream stops with [`SequenceError::Cancelled`] once the token
//! fires, including before the first element arrives.
//!
//! # Examples
//!
//! ```rust
//! use futures::stream;
//! use seqext::stream::AsyncSequenceExt;
//! use seqext::SequenceError;
//! use tokio_util::sync::CancellationToken;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let pages = stream::iter([Ok::<_, SequenceError>(3), Ok(1), Ok(2)]);
//! let set = pages.to_sorted_set_async().await.unwrap();
//! assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! let token = CancellationToken::new();
//! token.cancel();
//! let pages = stream::iter([Ok::<_, SequenceError>(3), Ok(1)]);
//! let result = pages.with_cancellation(token).to_sorted_set_async().await;
//! assert_eq!(result.unwrap_err(), SequenceError::Cancelled);
//! # });
//! ```

mod cancellation;
mod collect;

pub use cancellation::WithCancellation;

use std::future::Future;

use futures::TryStream;
use tokio_util::sync::CancellationToken;

use crate::collections::{SortedAssociation, SortedDictionary, SortedList, SortedSet};
use crate::comparer::{Comparer, NaturalOrder};
use crate::error::SequenceError;

/// Sorted-container materialization and cancellation for fallible streams.
pub trait AsyncSequenceExt: TryStream + Sized {
    /// Collects the elements into a [`SortedSet`] in natural order.
    ///
    /// Of several equal elements only the first one received is kept.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the stream.
    fn to_sorted_set_async(self) -> impl Future<Output = Result<SortedSet<Self::Ok>, Self::Error>>
    where
        Self::Ok: Ord,
    {
        collect::sorted_set(self, NaturalOrder)
    }

    /// Collects the elements into a [`SortedSet`] ordered by `comparer`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the stream.
    fn to_sorted_set_by_async<C>(
        self,
        comparer: C,
    ) -> impl Future<Output = Result<SortedSet<Self::Ok, C>, Self::Error>>
    where
        C: Comparer<Self::Ok>,
    {
        collect::sorted_set(self, comparer)
    }

    /// Collects the elements into a [`SortedList`] keyed by `key_selector`
    /// in natural key order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the stream, or
    /// [`SequenceError::DuplicateKey`] converted into the stream's error
    /// type if two elements have equal keys.
    fn to_sorted_list_async<K, F>(
        self,
        key_selector: F,
    ) -> impl Future<Output = Result<SortedList<K, Self::Ok>, Self::Error>>
    where
        Self::Error: From<SequenceError>,
        K: Ord,
        F: FnMut(&Self::Ok) -> K,
    {
        collect::association::<SortedList<K, Self::Ok>, _, _, _, _, _>(
            self,
            key_selector,
            std::convert::identity,
            NaturalOrder,
        )
    }

    /// Collects `element_selector(element)` values into a [`SortedList`]
    /// keyed by `key_selector` and ordered by `comparer`.
    ///
    /// # Errors
    ///
    /// See [`to_sorted_list_async`](Self::to_sorted_list_async).
    fn to_sorted_list_with_async<K, E, C, F, G>(
        self,
        key_selector: F,
        element_selector: G,
        comparer: C,
    ) -> impl Future<Output = Result<SortedList<K, E, C>, Self::Error>>
    where
        Self::Error: From<SequenceError>,
        C: Comparer<K>,
        F: FnMut(&Self::Ok) -> K,
        G: FnMut(Self::Ok) -> E,
    {
        collect::association::<SortedList<K, E, C>, _, _, _, _, _>(
            self,
            key_selector,
            element_selector,
            comparer,
        )
    }

    /// Collects the elements into a [`SortedDictionary`] keyed by
    /// `key_selector` in natural key order.
    ///
    /// # Errors
    ///
    /// See [`to_sorted_list_async`](Self::to_sorted_list_async).
    fn to_sorted_dictionary_async<K, F>(
        self,
        key_selector: F,
    ) -> impl Future<Output = Result<SortedDictionary<K, Self::Ok>, Self::Error>>
    where
        Self::Error: From<SequenceError>,
        K: Ord,
        F: FnMut(&Self::Ok) -> K,
    {
        collect::association::<SortedDictionary<K, Self::Ok>, _, _, _, _, _>(
            self,
            key_selector,
            std::convert::identity,
            NaturalOrder,
        )
    }

    /// Collects `element_selector(element)` values into a
    /// [`SortedDictionary`] keyed by `key_selector` and ordered by
    /// `comparer`.
    ///
    /// # Errors
    ///
    /// See [`to_sorted_list_async`](Self::to_sorted_list_async).
    fn to_sorted_dictionary_with_async<K, E, C, F, G>(
        self,
        key_selector: F,
        element_selector: G,
        comparer: C,
    ) -> impl Future<Output = Result<SortedDictionary<K, E, C>, Self::Error>>
    where
        Self::Error: From<SequenceError>,
        C: Comparer<K>,
        F: FnMut(&Self::Ok) -> K,
        G: FnMut(Self::Ok) -> E,
    {
        collect::association::<SortedDictionary<K, E, C>, _, _, _, _, _>(
            self,
            key_selector,
            element_selector,
            comparer,
        )
    }

    /// Collects the elements into any [`SortedAssociation`].
    ///
    /// # Errors
    ///
    /// See [`to_sorted_list_async`](Self::to_sorted_list_async).
    fn collect_association_async<A, K, E, F, G>(
        self,
        key_selector: F,
        element_selector: G,
        comparer: A::Comparer,
    ) -> impl Future<Output = Result<A, Self::Error>>
    where
        Self::Error: From<SequenceError>,
        A: SortedAssociation<K, E>,
        F: FnMut(&Self::Ok) -> K,
        G: FnMut(Self::Ok) -> E,
    {
        collect::association::<A, _, _, _, _, _>(self, key_selector, element_selector, comparer)
    }

    /// Ends the stream with [`SequenceError::Cancelled`] once `token` is
    /// cancelled.
    ///
    /// See [`WithCancellation`].
    fn with_cancellation(self, token: CancellationToken) -> WithCancellation<Self>
    where
        Self::Error: From<SequenceError>,
    {
        WithCancellation::new(self, token)
    }
}

impl<S: TryStream> AsyncSequenceExt for S {}

static_assertions::assert_impl_all!(
    WithCancellation<futures::stream::Iter<std::vec::IntoIter<Result<i32, SequenceError>>>>: Send
);
