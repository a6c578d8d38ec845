// SPDX-License-Identifier: MPL-2.0

//! A piece is one element of a set's internal sequence: an isolated point or an interval.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use crate::endpoint::{Endpoint, Side};
use crate::error::SetError;
use crate::interval::Interval;
use crate::scalar::{Extended, Orderable};

/// Either a single value or a contiguous range of values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: Orderable + serde::Deserialize<'de>"))
)]
pub enum Piece<T> {
    /// An isolated value, `{v}`.
    Point(T),
    /// A range, `[a, b)` and friends.
    Range(Interval<T>),
}

impl<T: Clone> Piece<T> {
    /// Effective lower bound. For a point `v` this is `[v`.
    pub fn lower(&self) -> Endpoint<T> {
        match self {
            Self::Point(v) => Endpoint::raw(Extended::Finite(v.clone()), Side::Left, true),
            Self::Range(interval) => interval.left().clone(),
        }
    }

    /// Effective upper bound. For a point `v` this is `v]`.
    pub fn upper(&self) -> Endpoint<T> {
        match self {
            Self::Point(v) => Endpoint::raw(Extended::Finite(v.clone()), Side::Right, true),
            Self::Range(interval) => interval.right().clone(),
        }
    }
}

impl<T: Orderable> Piece<T> {
    /// A point piece, rejecting values that cannot be ordered or are infinite.
    pub fn point(v: T) -> Result<Self, SetError> {
        let piece = Self::Point(v);
        piece.validate()?;
        Ok(piece)
    }

    /// Check what the type system cannot: a point must hold a finite, comparable value.
    pub fn validate(&self) -> Result<(), SetError> {
        match self {
            Self::Point(v) if !v.is_comparable() => Err(SetError::NotComparable),
            Self::Point(v) if v.infinite_sign().is_some() => Err(SetError::InvalidBoundary(
                "a point must have a finite value".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Build the piece spanning two bounds, collapsing `[v, v]` into the point `v`.
    pub(crate) fn from_bounds(lower: Endpoint<T>, upper: Endpoint<T>) -> Self {
        debug_assert!(lower.is_left() && upper.is_right());
        debug_assert!(lower.compare(&upper) != Ordering::Greater);
        if lower.is_inclusive() && upper.is_inclusive() && lower.compare(&upper) == Ordering::Equal
        {
            if let Extended::Finite(v) = lower.value() {
                return Self::Point(v.clone());
            }
        }
        Self::Range(Interval::raw(lower, upper))
    }

    /// The same piece with a degenerate `[v, v]` range turned into a point.
    pub(crate) fn canonical(self) -> Self {
        match self {
            Self::Range(interval) => {
                let (lower, upper) = interval.into_endpoints();
                Self::from_bounds(lower, upper)
            }
            point => point,
        }
    }

    /// Whether the scalar belongs to this piece.
    pub fn contains(&self, scalar: &T) -> bool {
        match self {
            Self::Point(v) => v.is_comparable() && v.partial_cmp(scalar) == Some(Ordering::Equal),
            Self::Range(interval) => interval.contains(scalar),
        }
    }

    /// Position of this piece relative to an endpoint:
    /// `Less` if the piece lies entirely before it, `Greater` if entirely after it,
    /// `Equal` if the endpoint falls within the piece.
    pub(crate) fn locate(&self, endpoint: &Endpoint<T>) -> Ordering {
        match self {
            Self::Point(v) => endpoint
                .compare_to_scalar(v)
                .expect("points held by a set are comparable")
                .reverse(),
            Self::Range(interval) => {
                if interval.left().compare(endpoint) == Ordering::Greater {
                    Ordering::Greater
                } else if interval.right().compare(endpoint) == Ordering::Less {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            }
        }
    }

    /// The value of a point piece.
    pub fn into_point(self) -> Result<T, SetError> {
        match self {
            Self::Point(v) => Ok(v),
            Self::Range(_) => Err(SetError::TypeMismatch {
                expected: "point",
                found: "range",
            }),
        }
    }
}

impl<T> From<Interval<T>> for Piece<T> {
    fn from(interval: Interval<T>) -> Self {
        Self::Range(interval)
    }
}

impl<T> TryFrom<Piece<T>> for Interval<T> {
    type Error = SetError;

    fn try_from(piece: Piece<T>) -> Result<Self, Self::Error> {
        match piece {
            Piece::Range(interval) => Ok(interval),
            Piece::Point(_) => Err(SetError::TypeMismatch {
                expected: "range",
                found: "point",
            }),
        }
    }
}

impl<T: Display> Display for Piece<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(v) => write!(f, "{{{v}}}"),
            Self::Range(interval) => write!(f, "{interval}"),
        }
    }
}
