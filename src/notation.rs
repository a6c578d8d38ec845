// SPDX-License-Identifier: MPL-2.0

//! Parsing of the textual notation.
//!
//! ```text
//! endpoint  [v  (v  v]  v)      v is a value, or one of inf, +inf, -inf, neg_inf
//! interval  left, right         e.g. [0, 1)
//! set       piece, piece, ...   each piece an interval or a point {v}
//!           {}                  the empty set, as is the empty string
//! ```
//!
//! The [`Display`](std::fmt::Display) implementations of endpoints, intervals, pieces and sets
//! write the same notation, so a formatted value parses back to itself.

use std::str::FromStr;

use crate::endpoint::{Endpoint, Side};
use crate::error::SetError;
use crate::interval::Interval;
use crate::piece::Piece;
use crate::scalar::{Extended, Orderable};
use crate::set::UISet;

fn invalid(notation: &str, reason: impl ToString) -> SetError {
    SetError::InvalidNotation {
        notation: notation.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_value<T: Orderable + FromStr>(
    token: &str,
    notation: &str,
) -> Result<Extended<T>, SetError> {
    match token {
        "inf" | "+inf" => Ok(Extended::PosInf),
        "-inf" | "neg_inf" => Ok(Extended::NegInf),
        _ => token
            .parse::<T>()
            .map(Extended::from)
            .map_err(|_| invalid(notation, format!("cannot parse value `{token}`"))),
    }
}

fn parse_endpoint<T: Orderable + FromStr>(
    token: &str,
    notation: &str,
) -> Result<Endpoint<T>, SetError> {
    let token = token.trim();
    let (value, side, inclusive) = if let Some(value) = token.strip_prefix('[') {
        (value, Side::Left, true)
    } else if let Some(value) = token.strip_prefix('(') {
        (value, Side::Left, false)
    } else if let Some(value) = token.strip_suffix(']') {
        (value, Side::Right, true)
    } else if let Some(value) = token.strip_suffix(')') {
        (value, Side::Right, false)
    } else {
        return Err(invalid(
            notation,
            format!("`{token}` is not bracketed like [v, (v, v] or v)"),
        ));
    };
    let value = parse_value(value.trim(), notation)?;
    Endpoint::new(value, side, inclusive).map_err(|e| invalid(notation, e))
}

fn parse_interval<T: Orderable + FromStr>(
    left: &str,
    right: &str,
    notation: &str,
) -> Result<Interval<T>, SetError> {
    let left = parse_endpoint(left, notation)?;
    let right = parse_endpoint(right, notation)?;
    Interval::new(left, right).map_err(|e| invalid(notation, e))
}

fn parse_point<T: Orderable + FromStr>(
    token: &str,
    notation: &str,
) -> Result<Option<Piece<T>>, SetError> {
    let Some(inner) = token.strip_prefix('{').and_then(|t| t.strip_suffix('}')) else {
        return Ok(None);
    };
    match parse_value(inner.trim(), notation)? {
        Extended::Finite(v) => Piece::point(v).map(Some).map_err(|e| invalid(notation, e)),
        _ => Err(invalid(notation, "a point must have a finite value")),
    }
}

impl<T: Orderable + FromStr> FromStr for Endpoint<T> {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_endpoint(s, s)
    }
}

impl<T: Orderable + FromStr> FromStr for Interval<T> {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((left, right)) => parse_interval(left, right, s),
            None => Err(invalid(s, "an interval needs two endpoints separated by a comma")),
        }
    }
}

impl<T: Orderable + FromStr> FromStr for UISet<T> {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "{}" {
            return Ok(UISet::new());
        }

        let mut pieces = Vec::new();
        let mut tokens = trimmed.split(',').map(str::trim);
        while let Some(token) = tokens.next() {
            if let Some(point) = parse_point(token, s)? {
                pieces.push(point);
                continue;
            }
            let Some(right) = tokens.next() else {
                return Err(invalid(s, format!("`{token}` has no matching right endpoint")));
            };
            pieces.push(Piece::Range(parse_interval(token, right, s)?));
        }

        UISet::from_pieces(pieces).map_err(|e| invalid(s, e))
    }
}
