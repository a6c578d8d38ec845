// SPDX-License-Identifier: MPL-2.0

//! Uncountable infinite sets over ordered scalars.
//!
//! A [`UISet`] represents any finite union of points and intervals on an ordered axis, such as
//! `(-inf, 0), {2}, [5, 7]`. It supports union, difference, intersection, symmetric difference
//! and complement, and answers containment and inclusion queries. Internally it is an ordered
//! list of pieces that never overlap and never touch, so every set has exactly one
//! representation and set equality is structural.
//!
//! The axis is any type implementing [`Orderable`]: integers, floats, characters, strings,
//! durations and system times out of the box. It is bounded by the two sentinels of
//! [`Extended`], `-inf` and `inf`, which can only be approached by exclusive endpoints.
//!
//! # Example
//!
//! ```
//! use uiset::{Interval, UISet};
//!
//! let weekdays: UISet<u32> = "[1, 5]".parse().unwrap();
//! let mut days = UISet::from(Interval::<u32>::closed(1, 7).unwrap());
//! days -= &weekdays;
//! assert_eq!(days.to_string(), "(5, 7]");
//! assert!(days.contains(&6));
//! assert_eq!((!&days).to_string(), "(-inf, 5], (7, inf)");
//! ```
//!
//! # Notation
//!
//! Endpoints are written `[v`, `(v`, `v]` and `v)`, intervals as `left, right` and points as
//! `{v}`. Sets list their pieces separated by commas, `{}` being the empty set. Every type
//! of the data model implements [`FromStr`](std::str::FromStr) and
//! [`Display`](std::fmt::Display) for it.
//!
//! # Optional features
//!
//! * `serde`: serialization and deserialization of every type, given that the scalar type
//!   also supports it. Deserialized values are validated like constructed ones.
//! * `proptest`: exports proptest strategies for [`UISet<i32>`] and its pieces.

#![warn(missing_docs)]

mod endpoint;
mod error;
mod interval;
mod notation;
mod piece;
mod scalar;
mod set;

pub use endpoint::{are_adjacent, Endpoint, Side};
pub use error::SetError;
pub use interval::Interval;
pub use piece::Piece;
pub use scalar::{Extended, Orderable};
pub use set::UISet;

#[cfg(feature = "proptest")]
pub use set::{piece_strategy, proptest_strategy};
