//! # seqext
//!
//! Sorted-container materialization, key-based deduplication and fixed-size
//! chunking for iterators, plus the materializing operations for fallible
//! streams with cooperative cancellation.
//!
//! ## Overview
//!
//! - **Sequence operations** ([`sequence`]): [`SequenceExt`](sequence::SequenceExt)
//!   adds `to_sorted_set`, `to_sorted_list`, `to_sorted_dictionary`,
//!   `distinct_by` and `chunk` to every [`Iterator`]
//! - **Stream operations** ([`stream`]): [`AsyncSequenceExt`](stream::AsyncSequenceExt)
//!   adds the asynchronous materializers and `with_cancellation` to every
//!   [`futures::TryStream`]
//! - **Comparers** ([`comparer`]): pluggable total orders and equivalence
//!   relations
//! - **Collections** ([`collections`]): `SortedSet`, `SortedList` and
//!   `SortedDictionary`
//!
//! ## Feature Flags
//!
//! - `sync`: the [`sequence`] module (default)
//! - `async`: the [`stream`] module (default)
//! - `serde`: `Serialize`/`Deserialize` for the collections
//! - `fxhash` / `ahash`: faster hashing for [`comparer::DefaultEquality`]
//! - `full`: `sync`, `async` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use seqext::prelude::*;
//!
//! let people = [("ada", 36), ("grace", 45), ("linus", 28)];
//! let by_age = people.into_iter().to_sorted_list(|person| person.1).unwrap();
//! assert_eq!(by_age.keys(), &[28, 36, 45]);
//! assert_eq!(by_age.value_at(0), Some(&("linus", 28)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the extension traits, comparers, collections and the error
/// type.
///
/// # Usage
///
/// ```rust
/// use seqext::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::comparer::*;
    pub use crate::error::SequenceError;

    #[cfg(feature = "sync")]
    pub use crate::sequence::*;

    #[cfg(feature = "async")]
    pub use crate::stream::*;
}

pub mod collections;
pub mod comparer;
pub mod error;

#[cfg(any(feature = "sync", feature = "async"))]
mod materialize;

#[cfg(feature = "sync")]
pub mod sequence;

#[cfg(feature = "async")]
pub mod stream;

pub use error::{Result, SequenceError};
