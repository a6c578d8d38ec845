// SPDX-License-Identifier: MPL-2.0

//! Endpoints are labeled boundaries of intervals.
//!
//! An endpoint has a value, a side and an inclusivity. There are four kinds of them:
//!
//! ```text
//!  [1      left, inclusive
//!  (1      left, exclusive
//!  1]      right, inclusive
//!  1)      right, exclusive
//! ```
//!
//! Endpoints of equal value are placed on the axis as follows, `1)` ending just before `1`,
//! `(1` starting just after it, and `[1` / `1]` sitting exactly on it:
//!
//! ```text
//!        (0                   1)  1]  (1                   2)
//!                                [1
//!     0                           1                            2
//! ------------------------------------------------------------------------->
//! ```

use std::cmp::Ordering;
use std::cmp::Ordering::{Equal, Greater, Less};
use std::fmt::{self, Display};

use crate::error::SetError;
use crate::scalar::{Extended, Orderable};

/// Which end of an interval an endpoint bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Lower bound, written before the value: `[v` or `(v`.
    Left,
    /// Upper bound, written after the value: `v]` or `v)`.
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A boundary point on the axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Endpoint<T> {
    value: Extended<T>,
    side: Side,
    inclusive: bool,
}

/// The four endpoint kinds, used to index the tie-break tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    LeftClosed = 0,
    LeftOpen = 1,
    RightOpen = 2,
    RightClosed = 3,
}

/// Ordering of `row` relative to `column` when both endpoints share the same value.
///
/// ```text
///            [v    (v    v)    v]
///   [v       =     <     >     =
///   (v       >     =     >     >
///   v)       <     <     =     <
///   v]       =     <     >     =
/// ```
const SAME_VALUE: [[Ordering; 4]; 4] = [
    [Equal, Less, Greater, Equal],
    [Greater, Equal, Greater, Greater],
    [Less, Less, Equal, Less],
    [Equal, Less, Greater, Equal],
];

/// Ordering of an endpoint relative to a bare scalar of the same value.
const AGAINST_SCALAR: [Ordering; 4] = [Equal, Greater, Less, Equal];

impl<T> Endpoint<T> {
    /// Build an endpoint without validation.
    /// Callers guarantee the value is comparable and that inclusive values are finite.
    pub(crate) fn raw(value: Extended<T>, side: Side, inclusive: bool) -> Self {
        Self {
            value,
            side,
            inclusive,
        }
    }

    /// The `(-inf` or `inf)` endpoint.
    pub fn unbounded(side: Side) -> Self {
        let value = match side {
            Side::Left => Extended::NegInf,
            Side::Right => Extended::PosInf,
        };
        Self::raw(value, side, false)
    }

    /// Value of the endpoint.
    pub fn value(&self) -> &Extended<T> {
        &self.value
    }

    /// Side of the endpoint.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Whether the value itself belongs to the bounded range.
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    /// Whether this is a lower bound.
    pub fn is_left(&self) -> bool {
        self.side == Side::Left
    }

    /// Whether this is an upper bound.
    pub fn is_right(&self) -> bool {
        self.side == Side::Right
    }

    /// Whether the value is not one of the infinities.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    fn kind(&self) -> Kind {
        match (self.side, self.inclusive) {
            (Side::Left, true) => Kind::LeftClosed,
            (Side::Left, false) => Kind::LeftOpen,
            (Side::Right, false) => Kind::RightOpen,
            (Side::Right, true) => Kind::RightClosed,
        }
    }

    /// The endpoint abutting this one with no gap: same value, opposite side and inclusivity.
    /// Only meaningful for finite endpoints.
    pub(crate) fn flip(self) -> Self {
        debug_assert!(self.is_finite(), "infinite endpoints have no opposite");
        Self {
            value: self.value,
            side: self.side.opposite(),
            inclusive: !self.inclusive,
        }
    }
}

impl<T: Orderable> Endpoint<T> {
    /// Build a validated endpoint from its parts.
    pub fn new(
        value: impl Into<Extended<T>>,
        side: Side,
        inclusive: bool,
    ) -> Result<Self, SetError> {
        let value = value.into().canonical();
        if !value.is_comparable() {
            return Err(SetError::NotComparable);
        }
        match (&value, side) {
            (Extended::Finite(_), _) => {}
            _ if inclusive => {
                return Err(SetError::InvalidBoundary(
                    "an inclusive endpoint must have a finite value".to_string(),
                ))
            }
            (Extended::PosInf, Side::Left) => {
                return Err(SetError::InvalidBoundary(
                    "a left endpoint cannot be positive infinity".to_string(),
                ))
            }
            (Extended::NegInf, Side::Right) => {
                return Err(SetError::InvalidBoundary(
                    "a right endpoint cannot be negative infinity".to_string(),
                ))
            }
            _ => {}
        }
        Ok(Self::raw(value, side, inclusive))
    }

    /// Compare two endpoints, failing if their values cannot be ordered.
    pub fn try_compare(&self, other: &Self) -> Result<Ordering, SetError> {
        match self.value.partial_cmp(&other.value) {
            None => Err(SetError::NotComparable),
            Some(Ordering::Equal) => Ok(SAME_VALUE[self.kind() as usize][other.kind() as usize]),
            Some(ord) => Ok(ord),
        }
    }

    /// Compare two endpoints.
    ///
    /// Validated endpoints always hold comparable values, so this cannot fail for them.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.try_compare(other)
            .expect("Orderable values admitted into endpoints are mutually ordered")
    }

    /// Position of this endpoint relative to a scalar.
    pub fn compare_to_scalar(&self, scalar: &T) -> Result<Ordering, SetError> {
        match self.value.partial_cmp_scalar(scalar) {
            None => Err(SetError::NotComparable),
            Some(Ordering::Equal) => Ok(AGAINST_SCALAR[self.kind() as usize]),
            Some(ord) => Ok(ord),
        }
    }

    /// An endpoint equals a scalar only when it is inclusive and sits on that value.
    pub fn equals_scalar(&self, scalar: &T) -> bool {
        self.inclusive && self.compare_to_scalar(scalar) == Ok(Ordering::Equal)
    }

    /// The endpoint that begins exactly where this one ends: `~[7` is `7)`.
    pub fn invert(&self) -> Result<Self, SetError> {
        if !self.is_finite() {
            return Err(SetError::InvalidBoundary(
                "an infinite endpoint has no inverse".to_string(),
            ));
        }
        Ok(self.clone().flip())
    }
}

/// Whether a right endpoint followed by a left endpoint leave no gap between them.
///
/// ```text
/// 1] (1   adjacent
/// 1) [1   adjacent
/// 1] [1   adjacent (overlapping on 1)
/// 1) (1   not adjacent, 1 is in between
/// ```
pub fn are_adjacent<T: Orderable>(right: &Endpoint<T>, left: &Endpoint<T>) -> bool {
    right.is_right()
        && left.is_left()
        && (right.inclusive || left.inclusive)
        && right.value.partial_cmp(&left.value) == Some(Ordering::Equal)
}

impl<T: Display> Endpoint<T> {
    /// Textual notation, such as `[1` or `inf)`.
    pub fn to_notation(&self) -> String {
        self.to_string()
    }
}

impl<T: Display> Display for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Kind::LeftClosed => write!(f, "[{}", self.value),
            Kind::LeftOpen => write!(f, "({}", self.value),
            Kind::RightOpen => write!(f, "{})", self.value),
            Kind::RightClosed => write!(f, "{}]", self.value),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Orderable + serde::Deserialize<'de>> serde::Deserialize<'de> for Endpoint<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Endpoint")]
        struct Repr<T> {
            value: Extended<T>,
            side: Side,
            inclusive: bool,
        }

        let repr: Repr<T> = serde::Deserialize::deserialize(deserializer)?;
        Endpoint::new(repr.value, repr.side, repr.inclusive).map_err(serde::de::Error::custom)
    }
}
