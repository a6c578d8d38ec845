// SPDX-License-Identifier: MPL-2.0

//! Handling set algebra errors.

use thiserror::Error;

/// Errors that may occur while building, parsing or operating on sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// An endpoint that cannot exist, such as an inclusive infinite bound
    /// or a left bound at positive infinity.
    #[error("invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Endpoints that do not form an interval:
    /// wrong sides, or a left endpoint after the right one.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// Textual input that does not follow the notation grammar.
    #[error("invalid notation {notation:?}: {reason}")]
    InvalidNotation {
        /// The text that was being parsed.
        notation: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A scalar without a place in the ordering, such as NaN, crossed a comparison.
    #[error("values are not comparable")]
    NotComparable,

    /// A value of one kind was supplied where another kind was expected,
    /// e.g. a point piece where an interval is required.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind that was expected.
        expected: &'static str,
        /// Kind that was supplied.
        found: &'static str,
    },

    /// Pieces given as already ordered overlap, touch, or are out of order.
    #[error("piece at index {index} does not come strictly after the previous one")]
    UnorderedPieces {
        /// Index of the first offending piece.
        index: usize,
    },

    /// Strict removal of something the set does not contain.
    #[error("element is not contained in the set")]
    NotPresent,
}
