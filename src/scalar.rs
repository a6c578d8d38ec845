// SPDX-License-Identifier: MPL-2.0

//! Scalars and the infinite sentinels placed around them.
//!
//! Any type implementing [`Orderable`] can be the element domain of a set. The axis is then
//! extended with two sentinels by [`Extended`]: [`NegInf`](Extended::NegInf) below every
//! comparable value and [`PosInf`](Extended::PosInf) above every comparable value.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::time::{Duration, SystemTime};

/// Capability of values that can be placed on an ordered axis.
///
/// All values for which [`is_comparable`](Orderable::is_comparable) returns `true` must be
/// mutually ordered by [`PartialOrd`], i.e. `partial_cmp` never returns `None` between them.
/// Values that are not comparable (NaN) are rejected wherever a scalar enters a set.
pub trait Orderable: Clone + Debug + PartialOrd {
    /// Whether the value has a place in the ordering at all.
    fn is_comparable(&self) -> bool {
        true
    }

    /// `Some(Greater)` if the value itself stands for positive infinity,
    /// `Some(Less)` for negative infinity.
    fn infinite_sign(&self) -> Option<Ordering> {
        None
    }
}

macro_rules! totally_ordered {
    ($($t:ty),* $(,)?) => {
        $(impl Orderable for $t {})*
    };
}

totally_ordered!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, String,
    Duration, SystemTime,
);

impl Orderable for &str {}

macro_rules! float_orderable {
    ($($t:ty),*) => {
        $(impl Orderable for $t {
            fn is_comparable(&self) -> bool {
                !self.is_nan()
            }

            fn infinite_sign(&self) -> Option<Ordering> {
                if self.is_infinite() {
                    self.partial_cmp(&0.0)
                } else {
                    None
                }
            }
        })*
    };
}

float_orderable!(f32, f64);

/// A scalar, or one of the two infinities bounding the axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extended<T> {
    /// Less than every comparable scalar.
    NegInf,
    /// A regular value.
    Finite(T),
    /// Greater than every comparable scalar.
    PosInf,
}

impl<T> Extended<T> {
    /// Whether this is a regular value rather than a sentinel.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The regular value, if any.
    pub fn as_finite(&self) -> Option<&T> {
        match self {
            Self::Finite(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Orderable> Extended<T> {
    /// Replace finite values that are themselves infinities by the matching sentinel.
    pub fn canonical(self) -> Self {
        match self {
            Self::Finite(v) => match v.infinite_sign() {
                Some(Ordering::Greater) => Self::PosInf,
                Some(Ordering::Less) => Self::NegInf,
                _ => Self::Finite(v),
            },
            sentinel => sentinel,
        }
    }

    /// Whether the value can be ordered against others.
    pub fn is_comparable(&self) -> bool {
        match self {
            Self::Finite(v) => v.is_comparable(),
            _ => true,
        }
    }

    /// Ordering of this value relative to a bare scalar.
    pub(crate) fn partial_cmp_scalar(&self, other: &T) -> Option<Ordering> {
        if !other.is_comparable() {
            return None;
        }
        match (self, other.infinite_sign()) {
            (Self::NegInf, Some(Ordering::Less)) | (Self::PosInf, Some(Ordering::Greater)) => {
                Some(Ordering::Equal)
            }
            (Self::NegInf, _) => Some(Ordering::Less),
            (Self::PosInf, _) => Some(Ordering::Greater),
            (Self::Finite(v), _) => v.partial_cmp(other),
        }
    }
}

impl<T: Orderable> From<T> for Extended<T> {
    fn from(v: T) -> Self {
        Self::Finite(v).canonical()
    }
}

impl<T: Orderable> PartialOrd for Extended<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Finite(l), r) => r.partial_cmp_scalar(l).map(Ordering::reverse),
            (l, Self::Finite(r)) => l.partial_cmp_scalar(r),
            (Self::NegInf, Self::NegInf) | (Self::PosInf, Self::PosInf) => Some(Ordering::Equal),
            (Self::NegInf, Self::PosInf) => Some(Ordering::Less),
            (Self::PosInf, Self::NegInf) => Some(Ordering::Greater),
        }
    }
}

impl<T: Display> Display for Extended<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegInf => write!(f, "-inf"),
            Self::Finite(v) => write!(f, "{v}"),
            Self::PosInf => write!(f, "inf"),
        }
    }
}
