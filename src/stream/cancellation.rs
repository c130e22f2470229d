//! Cooperative cancellation for fallible streams.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::TryStream;
use futures::stream::{FusedStream, Stream};
use pin_project_lite::pin_project;
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

use crate::error::SequenceError;

pin_project! {
    /// A stream that ends with [`SequenceError::Cancelled`] once a
    /// [`CancellationToken`] fires.
    ///
    /// The token is checked before every poll of the wrapped stream, so a
    /// token cancelled before the first element is requested yields the
    /// cancellation error without ever polling the source. While the source
    /// is pending, cancelling the token wakes the consuming task.
    ///
    /// After yielding the cancellation error, or after the source ends, the
    /// stream is terminated and only returns `None`.
    ///
    /// Created by [`AsyncSequenceExt::with_cancellation`](super::AsyncSequenceExt::with_cancellation).
    #[must_use = "streams do nothing unless polled"]
    pub struct WithCancellation<S> {
        #[pin]
        stream: S,
        #[pin]
        cancelled: WaitForCancellationFutureOwned,
        terminated: bool,
    }
}

impl<S> WithCancellation<S> {
    pub(super) fn new(stream: S, token: CancellationToken) -> Self {
        Self {
            stream,
            cancelled: token.cancelled_owned(),
            terminated: false,
        }
    }

    /// Returns a reference to the wrapped stream.
    pub const fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Consumes the adapter, returning the wrapped stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S> Stream for WithCancellation<S>
where
    S: TryStream,
    S::Error: From<SequenceError>,
{
    type Item = Result<S::Ok, S::Error>;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.terminated {
            return Poll::Ready(None);
        }
        if this.cancelled.poll(context).is_ready() {
            *this.terminated = true;
            tracing::trace!("cancellation observed, ending stream");
            return Poll::Ready(Some(Err(SequenceError::Cancelled.into())));
        }
        match this.stream.try_poll_next(context) {
            Poll::Ready(None) => {
                *this.terminated = true;
                Poll::Ready(None)
            }
            other => other,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.terminated {
            return (0, Some(0));
        }
        let (_, upper) = self.stream.size_hint();
        (0, upper.map(|upper| upper.saturating_add(1)))
    }
}

impl<S> FusedStream for WithCancellation<S>
where
    S: TryStream,
    S::Error: From<SequenceError>,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl<S: fmt::Debug> fmt::Debug for WithCancellation<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WithCancellation")
            .field("stream", &self.stream)
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{StreamExt, TryStreamExt, stream};
    use rstest::rstest;
    use std::pin::pin;

    fn numbers(count: i32) -> impl Stream<Item = Result<i32, SequenceError>> {
        stream::iter((0..count).map(Ok))
    }

    #[rstest]
    #[tokio::test]
    async fn test_passes_elements_through() {
        let token = CancellationToken::new();
        let collected: Vec<i32> = WithCancellation::new(numbers(4), token)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(collected, vec![0, 1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_cancelled_before_first_poll() {
        let token = CancellationToken::new();
        token.cancel();
        let mut wrapped = pin!(WithCancellation::new(numbers(4), token));
        assert_eq!(wrapped.next().await, Some(Err(SequenceError::Cancelled)));
        assert!(wrapped.is_terminated());
        assert_eq!(wrapped.next().await, None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_cancelled_midway() {
        let token = CancellationToken::new();
        let mut wrapped = pin!(WithCancellation::new(numbers(10), token.clone()));
        assert_eq!(wrapped.next().await, Some(Ok(0)));
        assert_eq!(wrapped.next().await, Some(Ok(1)));
        token.cancel();
        assert_eq!(wrapped.next().await, Some(Err(SequenceError::Cancelled)));
        assert_eq!(wrapped.next().await, None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_terminated_after_source_ends() {
        let mut wrapped = pin!(WithCancellation::new(numbers(1), CancellationToken::new()));
        assert_eq!(wrapped.size_hint(), (0, Some(2)));
        assert_eq!(wrapped.next().await, Some(Ok(0)));
        assert_eq!(wrapped.next().await, None);
        assert!(wrapped.is_terminated());
        assert_eq!(wrapped.size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn test_into_inner_returns_source() {
        let wrapped = WithCancellation::new(vec![1, 2], CancellationToken::new());
        assert_eq!(wrapped.get_ref(), &vec![1, 2]);
        assert_eq!(wrapped.into_inner(), vec![1, 2]);
    }
}
