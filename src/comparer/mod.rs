//! Pluggable ordering and equality relations.
//!
//! The sorted containers and the sequence operations of this crate never
//! call `Ord` or `Hash` directly. They go through one of two traits so that
//! callers can supply their own relation over a key type:
//!
//! - [`Comparer`]: a total order, used for sorting and for the uniqueness
//!   rule of [`SortedSet`](crate::collections::SortedSet),
//!   [`SortedList`](crate::collections::SortedList) and
//!   [`SortedDictionary`](crate::collections::SortedDictionary).
//! - [`EqualityComparer`]: an equivalence relation with a compatible hash,
//!   used by [`distinct_by`](crate::sequence::SequenceExt::distinct_by).
//!
//! When no relation is supplied, [`NaturalOrder`] and [`DefaultEquality`]
//! fall back to the key type's own `Ord` and `Hash + Eq`. Comparers are
//! combined with [`ComparerExt::reversed`] and [`ComparerExt::then`].
//!
//! # Examples
//!
//! ```rust
//! use seqext::comparer::{Comparer, ComparerExt, KeyComparer, NaturalOrder};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//!
//! let by_length = KeyComparer::new(|word: &&str| word.len());
//! let by_length_then_text = by_length.then(NaturalOrder);
//! assert_eq!(by_length_then_text.compare(&"bb", &"aa"), Ordering::Greater);
//! assert_eq!(by_length_then_text.compare(&"b", &"aa"), Ordering::Less);
//! ```

mod equality;
mod ordering;

pub use equality::DefaultEquality;
pub use equality::DefaultHashBuilder;
pub use equality::EqualityComparer;
pub use equality::ProjectedEquality;
pub use ordering::Comparer;
pub use ordering::ComparerExt;
pub use ordering::FnComparer;
pub use ordering::KeyComparer;
pub use ordering::NaturalOrder;
pub use ordering::ReverseOrder;
pub use ordering::ThenComparer;
