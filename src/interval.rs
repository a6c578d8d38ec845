// SPDX-License-Identifier: MPL-2.0

//! Intervals are contiguous ranges between a left and a right endpoint.
//!
//! You can construct an interval from two endpoints with [Interval::new] or from one of the
//! following building blocks:
//!  - [unbounded()](Interval::unbounded): `(-inf, inf)`
//!  - [closed(a, b)](Interval::closed): `[a, b]`
//!  - [open(a, b)](Interval::open): `(a, b)`
//!  - [closed_open(a, b)](Interval::closed_open): `[a, b)`
//!  - [open_closed(a, b)](Interval::open_closed): `(a, b]`
//!  - [at_least(v)](Interval::at_least): `[v, inf)`
//!  - [greater_than(v)](Interval::greater_than): `(v, inf)`
//!  - [at_most(v)](Interval::at_most): `(-inf, v]`
//!  - [less_than(v)](Interval::less_than): `(-inf, v)`

use std::cmp::Ordering;
use std::fmt::{self, Display};

use crate::endpoint::{Endpoint, Side};
use crate::error::SetError;
use crate::scalar::{Extended, Orderable};

/// A contiguous range of values, possibly unbounded on either side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval<T> {
    left: Endpoint<T>,
    right: Endpoint<T>,
}

impl<T> Interval<T> {
    /// Pair two endpoints without validation.
    pub(crate) fn raw(left: Endpoint<T>, right: Endpoint<T>) -> Self {
        Self { left, right }
    }

    /// `(-inf, inf)`, the whole axis.
    pub fn unbounded() -> Self {
        Self::raw(
            Endpoint::unbounded(Side::Left),
            Endpoint::unbounded(Side::Right),
        )
    }

    /// Lower endpoint.
    pub fn left(&self) -> &Endpoint<T> {
        &self.left
    }

    /// Upper endpoint.
    pub fn right(&self) -> &Endpoint<T> {
        &self.right
    }

    /// Whether both ends are infinite.
    pub fn is_unbounded(&self) -> bool {
        !self.left.is_finite() && !self.right.is_finite()
    }

    /// Split back into the two endpoints.
    pub fn into_endpoints(self) -> (Endpoint<T>, Endpoint<T>) {
        (self.left, self.right)
    }
}

impl<T: Orderable> Interval<T> {
    /// Pair a left and a right endpoint into an interval.
    pub fn new(left: Endpoint<T>, right: Endpoint<T>) -> Result<Self, SetError> {
        if !left.is_left() {
            return Err(SetError::InvalidInterval(
                "first endpoint must be a left endpoint".to_string(),
            ));
        }
        if !right.is_right() {
            return Err(SetError::InvalidInterval(
                "second endpoint must be a right endpoint".to_string(),
            ));
        }
        if left.try_compare(&right)? == Ordering::Greater {
            return Err(SetError::InvalidInterval(
                "second endpoint is less than the first one".to_string(),
            ));
        }
        Ok(Self::raw(left, right))
    }

    fn from_parts(
        lower: impl Into<Extended<T>>,
        lower_inclusive: bool,
        upper: impl Into<Extended<T>>,
        upper_inclusive: bool,
    ) -> Result<Self, SetError> {
        Self::new(
            Endpoint::new(lower, Side::Left, lower_inclusive)?,
            Endpoint::new(upper, Side::Right, upper_inclusive)?,
        )
    }

    /// `[a, b]`
    pub fn closed(a: impl Into<Extended<T>>, b: impl Into<Extended<T>>) -> Result<Self, SetError> {
        Self::from_parts(a, true, b, true)
    }

    /// `(a, b)`
    pub fn open(a: impl Into<Extended<T>>, b: impl Into<Extended<T>>) -> Result<Self, SetError> {
        Self::from_parts(a, false, b, false)
    }

    /// `[a, b)`
    pub fn closed_open(
        a: impl Into<Extended<T>>,
        b: impl Into<Extended<T>>,
    ) -> Result<Self, SetError> {
        Self::from_parts(a, true, b, false)
    }

    /// `(a, b]`
    pub fn open_closed(
        a: impl Into<Extended<T>>,
        b: impl Into<Extended<T>>,
    ) -> Result<Self, SetError> {
        Self::from_parts(a, false, b, true)
    }

    /// `[v, inf)`
    pub fn at_least(v: T) -> Result<Self, SetError> {
        Self::from_parts(v, true, Extended::PosInf, false)
    }

    /// `(v, inf)`
    pub fn greater_than(v: T) -> Result<Self, SetError> {
        Self::from_parts(v, false, Extended::PosInf, false)
    }

    /// `(-inf, v]`
    pub fn at_most(v: T) -> Result<Self, SetError> {
        Self::from_parts(Extended::NegInf, false, v, true)
    }

    /// `(-inf, v)`
    pub fn less_than(v: T) -> Result<Self, SetError> {
        Self::from_parts(Extended::NegInf, false, v, false)
    }

    /// Whether the scalar lies within the interval. Non comparable scalars lie nowhere.
    pub fn contains(&self, scalar: &T) -> bool {
        matches!(
            self.left.compare_to_scalar(scalar),
            Ok(Ordering::Less | Ordering::Equal)
        ) && matches!(
            self.right.compare_to_scalar(scalar),
            Ok(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Whether the endpoint lies within the interval.
    pub fn contains_endpoint(&self, endpoint: &Endpoint<T>) -> bool {
        self.left.compare(endpoint) != Ordering::Greater
            && endpoint.compare(&self.right) != Ordering::Greater
    }

    /// Whether the other interval is nested in this one.
    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        self.left.compare(&other.left) != Ordering::Greater
            && other.right.compare(&self.right) != Ordering::Greater
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.left, self.right)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Orderable + serde::Deserialize<'de>> serde::Deserialize<'de> for Interval<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Interval")]
        struct Repr<T: Orderable> {
            left: Endpoint<T>,
            right: Endpoint<T>,
        }

        let repr: Repr<T> = serde::Deserialize::deserialize(deserializer)?;
        Interval::new(repr.left, repr.right).map_err(serde::de::Error::custom)
    }
}
