//! Error types shared by the synchronous and asynchronous sequence operations.
//!
//! Every fallible operation in this crate reports one of the variants of
//! [`SequenceError`]. Errors are surfaced to the immediate caller; nothing
//! is retried and no partial result is ever returned alongside an error.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;

/// Represents errors that can occur while transforming a sequence.
///
/// # Examples
///
/// ```rust
/// use seqext::SequenceError;
///
/// let error = SequenceError::DuplicateKey { position: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "an element with the same key has already been added (source position 3)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A required argument was never supplied.
    ///
    /// The typed API cannot express an absent source, selector or comparer,
    /// so this is only produced by [`AssociationBuilder`](crate::sequence::AssociationBuilder)
    /// when a terminal operation runs without a key selector.
    #[error("required argument `{parameter}` was not supplied")]
    NullArgument {
        /// Name of the missing argument.
        parameter: &'static str,
    },

    /// A numeric argument lies outside its accepted range.
    #[error("argument `{parameter}` is out of range: {value} (must be at least 1)")]
    OutOfRange {
        /// Name of the offending argument.
        parameter: &'static str,
        /// The rejected value.
        value: i128,
    },

    /// Two source elements projected to comparer-equal keys while building
    /// a sorted association.
    #[error("an element with the same key has already been added (source position {position})")]
    DuplicateKey {
        /// Zero-based position in the source of the element whose key was
        /// already present.
        position: usize,
    },

    /// The operation observed a cancellation request before the source was
    /// exhausted.
    #[error("the operation was cancelled")]
    Cancelled,
}

impl SequenceError {
    /// Returns `true` if this error reports a cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub(crate) fn out_of_range(parameter: &'static str, value: impl Into<i128>) -> Self {
        Self::OutOfRange {
            parameter,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        SequenceError::NullArgument { parameter: "key_selector" },
        "required argument `key_selector` was not supplied"
    )]
    #[case(
        SequenceError::OutOfRange { parameter: "size", value: -1 },
        "argument `size` is out of range: -1 (must be at least 1)"
    )]
    #[case(
        SequenceError::DuplicateKey { position: 0 },
        "an element with the same key has already been added (source position 0)"
    )]
    #[case(SequenceError::Cancelled, "the operation was cancelled")]
    fn test_display(#[case] error: SequenceError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_is_cancelled() {
        assert!(SequenceError::Cancelled.is_cancelled());
        assert!(!SequenceError::DuplicateKey { position: 1 }.is_cancelled());
    }

    #[rstest]
    fn test_source_is_none() {
        use std::error::Error;

        let error = SequenceError::out_of_range("size", 0_u64);
        assert!(error.source().is_none());
        assert_eq!(
            error,
            SequenceError::OutOfRange {
                parameter: "size",
                value: 0
            }
        );
    }
}
