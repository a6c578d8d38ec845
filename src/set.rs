// SPDX-License-Identifier: MPL-2.0

//! Uncountable infinite sets.
//!
//! A [`UISet`] is an ordered sequence of pieces, each an isolated point or an interval, that
//! never overlap and never touch: `(0, 1), [1, 2)` is always stored as `(0, 2)`. Because the
//! representation is canonical, set equality is structural equality of the piece sequences.
//!
//! You can construct a set from one of the following building blocks, all other sets are
//! unions, differences and complements of these:
//!  - [new()](UISet::new): the empty set
//!  - [full()](UISet::full): every value, `(-inf, inf)`
//!  - [singleton(v)](UISet::singleton): only the value `v`
//!  - [from(interval)](UISet::from): all values in an [`Interval`]
//!
//! Superset and subset form a partial order: two disjoint non empty sets are neither equal,
//! nor a subset of each other. [`PartialOrd`] reports `None` for them, so sets must never be
//! sorted with it.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Range, Sub, SubAssign,
};

#[cfg(any(feature = "proptest", test))]
use proptest::prelude::*;
use smallvec::{smallvec, SmallVec};

use crate::endpoint::{are_adjacent, Endpoint, Side};
use crate::error::SetError;
use crate::interval::Interval;
use crate::piece::Piece;
use crate::scalar::{Extended, Orderable};

/// A union of intervals and points over an ordered domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UISet<T> {
    /// Strictly ascending, non overlapping and non adjacent.
    /// Each set owns its pieces, they are cloned whenever they cross from one set to another.
    pieces: SmallVec<[Piece<T>; 1]>,
}

impl<T> UISet<T> {
    /// The empty set.
    pub fn new() -> Self {
        Self {
            pieces: SmallVec::new(),
        }
    }

    /// Whether the set contains nothing.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The ordered pieces of the set, for formatting or inspection.
    pub fn pieces(&self) -> &[Piece<T>] {
        &self.pieces
    }

    /// Iterate over the pieces in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece<T>> {
        self.pieces.iter()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.pieces.clear();
    }

    /// Remove and return the lowest piece, if any.
    pub fn pop(&mut self) -> Option<Piece<T>> {
        if self.pieces.is_empty() {
            None
        } else {
            Some(self.pieces.remove(0))
        }
    }

    fn replace(&mut self, range: Range<usize>, with: impl IntoIterator<Item = Piece<T>>) {
        let start = range.start;
        self.pieces.drain(range);
        self.pieces.insert_many(start, with);
    }
}

impl<T> Default for UISet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Building blocks.
impl<T: Orderable> UISet<T> {
    /// Every value, `(-inf, inf)`.
    pub fn full() -> Self {
        Self {
            pieces: smallvec![Piece::Range(Interval::unbounded())],
        }
    }

    /// The set containing exactly one value.
    pub fn singleton(v: T) -> Result<Self, SetError> {
        Ok(Self {
            pieces: smallvec![Piece::point(v)?],
        })
    }

    /// Build a set from pieces that are already in ascending order, with gaps between them.
    ///
    /// Degenerate `[v, v]` ranges are stored as points.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece<T>>) -> Result<Self, SetError> {
        let mut checked: SmallVec<[Piece<T>; 1]> = SmallVec::new();
        for (index, piece) in pieces.into_iter().enumerate() {
            piece.validate()?;
            if let Some(previous) = checked.last() {
                let end = previous.upper();
                let start = piece.lower();
                if end.compare(&start) != Ordering::Less || are_adjacent(&end, &start) {
                    return Err(SetError::UnorderedPieces { index });
                }
            }
            checked.push(piece.canonical());
        }
        Ok(Self { pieces: checked }.check_invariants())
    }

    /// Build a set from pieces in any order, merging them one by one.
    pub fn try_from_iter(pieces: impl IntoIterator<Item = Piece<T>>) -> Result<Self, SetError> {
        let mut set = Self::new();
        for piece in pieces {
            set.add(piece)?;
        }
        Ok(set)
    }

    fn check_invariants(self) -> Self {
        self.assert_invariants();
        self
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions) {
            for p in self.pieces.windows(2) {
                let end = p[0].upper();
                let start = p[1].lower();
                assert_eq!(end.compare(&start), Ordering::Less, "{p:?} out of order");
                assert!(!are_adjacent(&end, &start), "{p:?} should have been merged");
            }
            for piece in self.pieces.iter() {
                assert!(
                    piece.lower().compare(&piece.upper()) != Ordering::Greater,
                    "{piece:?} is reversed"
                );
                if let Piece::Range(interval) = piece {
                    assert!(
                        !(interval.left().is_inclusive()
                            && interval.right().is_inclusive()
                            && interval.left().compare(interval.right()) == Ordering::Equal),
                        "{piece:?} should be a point"
                    );
                }
            }
        }
    }
}

// Search.
impl<T: Orderable> UISet<T> {
    /// Binary search for the piece containing `x`.
    ///
    /// Returns the index of that piece with the piece itself, or the index at which a piece
    /// covering `x` would be inserted with `None`.
    pub fn search(&self, x: &T) -> Result<(usize, Option<&Piece<T>>), SetError> {
        self.search_within(x, 0, self.pieces.len())
    }

    /// Same as [search](UISet::search), restricted to the pieces in `lo..hi`.
    ///
    /// Panics if `lo > hi` or if `hi` is greater than the number of pieces.
    pub fn search_within(
        &self,
        x: &T,
        lo: usize,
        hi: usize,
    ) -> Result<(usize, Option<&Piece<T>>), SetError> {
        if !x.is_comparable() {
            return Err(SetError::NotComparable);
        }
        let probe = Endpoint::raw(Extended::from(x.clone()), Side::Left, true);
        Ok(
            match self.pieces[lo..hi].binary_search_by(|piece| piece.locate(&probe)) {
                Ok(i) => (lo + i, Some(&self.pieces[lo + i])),
                Err(i) => (lo + i, None),
            },
        )
    }

    /// Index of the piece containing the endpoint, or where it would be inserted,
    /// looking only at pieces from `lo` onwards.
    fn locate(&self, endpoint: &Endpoint<T>, lo: usize) -> Result<usize, usize> {
        self.pieces[lo..]
            .binary_search_by(|piece| piece.locate(endpoint))
            .map(|i| lo + i)
            .map_err(|i| lo + i)
    }

    /// Whether the set contains the scalar. Non comparable scalars are never contained.
    pub fn contains(&self, x: &T) -> bool {
        matches!(self.search(x), Ok((_, Some(_))))
    }

    /// Whether the whole piece is contained in the set.
    pub fn contains_piece(&self, piece: &Piece<T>) -> bool {
        if piece.validate().is_err() {
            return false;
        }
        match self.locate(&piece.lower(), 0) {
            Ok(i) => self.pieces[i].upper().compare(&piece.upper()) != Ordering::Less,
            Err(_) => false,
        }
    }
}

// Mutation.
impl<T: Orderable> UISet<T> {
    /// Merge a point or an interval into the set.
    pub fn add(&mut self, piece: impl Into<Piece<T>>) -> Result<(), SetError> {
        let piece = piece.into();
        piece.validate()?;
        self.merge(piece);
        Ok(())
    }

    /// Remove a point or an interval from the set, if present.
    pub fn discard(&mut self, piece: impl Into<Piece<T>>) -> Result<(), SetError> {
        let piece = piece.into();
        piece.validate()?;
        self.cut(&piece);
        Ok(())
    }

    /// Remove a point or an interval from the set,
    /// failing with [`SetError::NotPresent`] unless all of it is contained.
    pub fn remove(&mut self, piece: impl Into<Piece<T>>) -> Result<(), SetError> {
        let piece = piece.into();
        piece.validate()?;
        if !self.contains_piece(&piece) {
            return Err(SetError::NotPresent);
        }
        self.cut(&piece);
        Ok(())
    }

    /// Union with a single validated piece.
    fn merge(&mut self, piece: Piece<T>) {
        let lower = piece.lower();
        let upper = piece.upper();

        // Absorb a piece containing or touching the new lower bound.
        let (low, lower) = match self.locate(&lower, 0) {
            Ok(i) => (i, self.pieces[i].lower()),
            Err(i) if i > 0 && are_adjacent(&self.pieces[i - 1].upper(), &lower) => {
                (i - 1, self.pieces[i - 1].lower())
            }
            Err(i) => (i, lower),
        };

        // Same on the upper side.
        let (high, upper) = match self.locate(&upper, low) {
            Ok(j) => (j + 1, self.pieces[j].upper()),
            Err(j) if j < self.pieces.len() && are_adjacent(&upper, &self.pieces[j].lower()) => {
                (j + 1, self.pieces[j].upper())
            }
            Err(j) => (j, upper),
        };

        log::trace!("merge replaces pieces {low}..{high}");
        self.replace(low..high, [Piece::from_bounds(lower, upper)]);
        self.assert_invariants();
    }

    /// Difference with a single validated piece.
    fn cut(&mut self, piece: &Piece<T>) {
        let lower = piece.lower();
        let upper = piece.upper();
        let mut remainders: SmallVec<[Piece<T>; 2]> = SmallVec::new();

        let low = match self.locate(&lower, 0) {
            Ok(i) => {
                let kept = self.pieces[i].lower();
                if kept.compare(&lower) == Ordering::Less {
                    remainders.push(Piece::from_bounds(kept, lower.flip()));
                }
                i
            }
            Err(i) => i,
        };

        let high = match self.locate(&upper, low) {
            Ok(j) => {
                let kept = self.pieces[j].upper();
                if upper.compare(&kept) == Ordering::Less {
                    remainders.push(Piece::from_bounds(upper.flip(), kept));
                }
                j + 1
            }
            Err(j) => j,
        };

        if low == high && remainders.is_empty() {
            return;
        }
        log::trace!(
            "cut replaces pieces {low}..{high} with {} remainder(s)",
            remainders.len()
        );
        self.replace(low..high, remainders);
        self.assert_invariants();
    }
}

// Complement.
impl<T: Orderable> UISet<T> {
    /// Every value the set does not contain.
    pub fn complement(&self) -> Self {
        let starts_unbounded = self
            .pieces
            .first()
            .is_some_and(|piece| !piece.lower().is_finite());
        let ends_unbounded = self
            .pieces
            .last()
            .is_some_and(|piece| !piece.upper().is_finite());

        let mut bounds = Vec::with_capacity(2 * self.pieces.len() + 2);
        if !starts_unbounded {
            bounds.push(Endpoint::unbounded(Side::Left));
        }
        let last = 2 * self.pieces.len();
        let flat = self.pieces.iter().flat_map(|piece| [piece.lower(), piece.upper()]);
        for (i, endpoint) in flat.enumerate() {
            if (i == 0 && starts_unbounded) || (i + 1 == last && ends_unbounded) {
                continue;
            }
            bounds.push(endpoint.flip());
        }
        if !ends_unbounded {
            bounds.push(Endpoint::unbounded(Side::Right));
        }

        debug_assert!(bounds.len() % 2 == 0);
        let mut pieces = SmallVec::with_capacity(bounds.len() / 2);
        let mut bounds = bounds.into_iter();
        while let (Some(lower), Some(upper)) = (bounds.next(), bounds.next()) {
            pieces.push(Piece::from_bounds(lower, upper));
        }
        log::debug!(
            "complement of {} piece(s) has {} piece(s)",
            self.pieces.len(),
            pieces.len()
        );
        Self { pieces }.check_invariants()
    }
}

// Set operations.
impl<T: Orderable> UISet<T> {
    /// Values in either set.
    pub fn union(&self, other: &Self) -> Self {
        let mut output = self.clone();
        output.update(other);
        output
    }

    /// Values in this set or any of the others.
    pub fn union_all<'a>(&self, others: impl IntoIterator<Item = &'a Self>) -> Self
    where
        T: 'a,
    {
        let mut output = self.clone();
        for other in others {
            output.update(other);
        }
        output
    }

    /// Add every value of the other set to this one.
    pub fn update(&mut self, other: &Self) {
        for piece in other.pieces.iter() {
            self.merge(piece.clone());
        }
    }

    /// Values in this set but not in the other.
    pub fn difference(&self, other: &Self) -> Self {
        let mut output = self.clone();
        output.difference_update(other);
        output
    }

    /// Remove every value of the other set from this one.
    pub fn difference_update(&mut self, other: &Self) {
        for piece in other.pieces.iter() {
            if self.is_empty() {
                break;
            }
            self.cut(piece);
        }
    }

    /// Values in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        self.difference(&other.complement())
    }

    /// Keep only the values also found in the other set.
    pub fn intersection_update(&mut self, other: &Self) {
        self.difference_update(&other.complement());
    }

    /// Values in exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut output = self.difference(other);
        output.update(&other.difference(self));
        output
    }

    /// Keep only the values found in exactly one of the two sets.
    pub fn symmetric_difference_update(&mut self, other: &Self) {
        *self = self.symmetric_difference(other);
    }

    /// Whether the two sets have no value in common.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let mut left_iter = self.pieces.iter().peekable();
        let mut right_iter = other.pieces.iter().peekable();

        while let Some((left, right)) = left_iter.peek().zip(right_iter.peek()) {
            if left.upper().compare(&right.lower()) == Ordering::Less {
                left_iter.next();
            } else if right.upper().compare(&left.lower()) == Ordering::Less {
                right_iter.next();
            } else {
                return false;
            }
        }

        // The remaining pieces can't intersect anymore
        true
    }

    /// Whether every value of the other set is in this one.
    pub fn is_superset(&self, other: &Self) -> bool {
        let mut start = 0;
        for piece in other.pieces.iter() {
            match self.locate(&piece.lower(), start) {
                Ok(i) => {
                    if self.pieces[i].upper().compare(&piece.upper()) == Ordering::Less {
                        return false;
                    }
                    // Following pieces of `other` may still be covered by the same piece.
                    start = i;
                }
                Err(_) => return false,
            }
        }
        true
    }

    /// Whether every value of this set is in the other.
    pub fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Superset but not equal.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        self != other && self.is_superset(other)
    }

    /// Subset but not equal.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self != other && self.is_subset(other)
    }
}

impl<T: Orderable> PartialOrd for UISet<T> {
    /// Inclusion order: `Greater` for a proper superset, `Less` for a proper subset,
    /// `None` when neither contains the other.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_superset(other) {
            Some(Ordering::Greater)
        } else if other.is_superset(self) {
            Some(Ordering::Less)
        } else {
            None
        }
    }
}

impl<T: Orderable> From<Interval<T>> for UISet<T> {
    fn from(interval: Interval<T>) -> Self {
        Self {
            pieces: smallvec![Piece::Range(interval).canonical()],
        }
    }
}

impl<T: Orderable> FromIterator<Interval<T>> for UISet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(intervals: I) -> Self {
        let mut set = Self::new();
        set.extend(intervals);
        set
    }
}

impl<T: Orderable> Extend<Interval<T>> for UISet<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, intervals: I) {
        for interval in intervals {
            self.merge(Piece::Range(interval));
        }
    }
}

impl<'a, T> IntoIterator for &'a UISet<T> {
    type Item = &'a Piece<T>;
    type IntoIter = std::slice::Iter<'a, Piece<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

// OPERATORS ###################################################################

impl<T: Orderable> Not for &UISet<T> {
    type Output = UISet<T>;

    fn not(self) -> UISet<T> {
        self.complement()
    }
}

impl<T: Orderable> Not for UISet<T> {
    type Output = UISet<T>;

    fn not(self) -> UISet<T> {
        self.complement()
    }
}

macro_rules! binary_operator {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $set_op:ident, $update:ident) => {
        impl<T: Orderable> $op<&UISet<T>> for &UISet<T> {
            type Output = UISet<T>;

            fn $method(self, rhs: &UISet<T>) -> UISet<T> {
                self.$set_op(rhs)
            }
        }

        impl<T: Orderable> $assign_op<&UISet<T>> for UISet<T> {
            fn $assign_method(&mut self, rhs: &UISet<T>) {
                self.$update(rhs)
            }
        }
    };
}

binary_operator!(BitOr, bitor, BitOrAssign, bitor_assign, union, update);
binary_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, intersection, intersection_update);
binary_operator!(Sub, sub, SubAssign, sub_assign, difference, difference_update);
binary_operator!(
    BitXor,
    bitxor,
    BitXorAssign,
    bitxor_assign,
    symmetric_difference,
    symmetric_difference_update
);

// REPORT ######################################################################

impl<T: Display> Display for UISet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.pieces.is_empty() {
            return write!(f, "{{}}");
        }
        for (idx, piece) in self.pieces.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{piece}")?;
        }
        Ok(())
    }
}

// SERIALIZATION ###############################################################

#[cfg(feature = "serde")]
impl<'de, T: Orderable + serde::Deserialize<'de>> serde::Deserialize<'de> for UISet<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pieces: Vec<Piece<T>> = serde::Deserialize::deserialize(deserializer)?;
        UISet::from_pieces(pieces).map_err(serde::de::Error::custom)
    }
}

/// Generate pieces over a small window of integers, with randomly inclusive, exclusive or
/// unbounded ends.
#[cfg(any(feature = "proptest", test))]
pub fn piece_strategy() -> impl Strategy<Value = Piece<i32>> {
    (-50i32..50, 0i32..20, 0u8..3, 0u8..3).prop_map(|(start, len, lower_kind, upper_kind)| {
        if len == 0 {
            return Piece::Point(start);
        }
        let lower = match lower_kind {
            0 => Endpoint::raw(Extended::Finite(start), Side::Left, true),
            1 => Endpoint::raw(Extended::Finite(start), Side::Left, false),
            _ => Endpoint::unbounded(Side::Left),
        };
        let upper = match upper_kind {
            0 => Endpoint::raw(Extended::Finite(start + len), Side::Right, true),
            1 => Endpoint::raw(Extended::Finite(start + len), Side::Right, false),
            _ => Endpoint::unbounded(Side::Right),
        };
        Piece::Range(Interval::raw(lower, upper))
    })
}

/// Generate sets by merging a handful of random pieces.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl Strategy<Value = UISet<i32>> {
    prop::collection::vec(piece_strategy(), 0..8).prop_map(|pieces| {
        let mut set = UISet::new();
        for piece in pieces {
            set.merge(piece);
        }
        set
    })
}

#[cfg(test)]
pub mod tests {
    use proptest::prelude::*;

    use super::*;

    fn set(notation: &str) -> UISet<i32> {
        notation.parse().unwrap()
    }

    fn iv(notation: &str) -> Interval<i32> {
        notation.parse().unwrap()
    }

    fn scalar_strat() -> impl Strategy<Value = i32> {
        -80i32..80
    }

    proptest! {

        // Testing serde ----------------------------------

        #[cfg(feature = "serde")]
        #[test]
        fn serde_round_trip(s in proptest_strategy()) {
            let text = ron::ser::to_string(&s).unwrap();
            let back: UISet<i32> = ron::de::from_str(&text).unwrap();
            assert_eq!(s, back);
        }

        // Testing complement -----------------------------

        #[test]
        fn complement_is_different(s in proptest_strategy()) {
            assert_ne!(s.complement(), s);
        }

        #[test]
        fn double_complement_is_identity(s in proptest_strategy()) {
            assert_eq!(s.complement().complement(), s);
        }

        #[test]
        fn complement_partitions_the_axis(s in proptest_strategy(), x in scalar_strat()) {
            assert_ne!(s.contains(&x), s.complement().contains(&x));
        }

        // Testing add ------------------------------------

        #[test]
        fn add_is_commutative(p in piece_strategy(), q in piece_strategy()) {
            let mut pq = UISet::new();
            pq.add(p.clone()).unwrap();
            pq.add(q.clone()).unwrap();
            let mut qp = UISet::new();
            qp.add(q).unwrap();
            qp.add(p).unwrap();
            assert_eq!(pq, qp);
        }

        #[test]
        fn add_contains_the_piece(s in proptest_strategy(), p in piece_strategy(), x in scalar_strat()) {
            let mut added = s.clone();
            added.add(p.clone()).unwrap();
            assert!(added.contains_piece(&p));
            assert_eq!(added.contains(&x), s.contains(&x) || p.contains(&x));
        }

        #[test]
        fn from_pieces_accepts_canonical_sequences(s in proptest_strategy()) {
            assert_eq!(UISet::from_pieces(s.pieces().to_vec()), Ok(s));
        }

        // Testing discard --------------------------------

        #[test]
        fn discard_removes_exactly_the_piece(s in proptest_strategy(), p in piece_strategy(), x in scalar_strat()) {
            let mut cut = s.clone();
            cut.discard(p.clone()).unwrap();
            assert!(cut.is_disjoint(&UISet::try_from_iter([p.clone()]).unwrap()));
            assert_eq!(cut.contains(&x), s.contains(&x) && !p.contains(&x));
        }

        #[test]
        fn add_then_discard_is_difference(s in proptest_strategy(), p in piece_strategy()) {
            let mut grown = s.clone();
            grown.add(p.clone()).unwrap();
            grown.discard(p.clone()).unwrap();
            let piece = UISet::try_from_iter([p]).unwrap();
            assert_eq!(grown, s.difference(&piece));
        }

        // Testing union ----------------------------------

        #[test]
        fn union_is_commutative(r1 in proptest_strategy(), r2 in proptest_strategy()) {
            assert_eq!(r1.union(&r2), r2.union(&r1));
        }

        #[test]
        fn union_is_associative(r1 in proptest_strategy(), r2 in proptest_strategy(), r3 in proptest_strategy()) {
            assert_eq!(r1.union(&r2).union(&r3), r1.union(&r3).union(&r2));
        }

        #[test]
        fn union_of_complements_is_full(s in proptest_strategy()) {
            assert_eq!(s.complement().union(&s), UISet::full());
        }

        #[test]
        fn union_contains_either(r1 in proptest_strategy(), r2 in proptest_strategy(), x in scalar_strat()) {
            assert_eq!(r1.union(&r2).contains(&x), r1.contains(&x) || r2.contains(&x));
        }

        #[test]
        fn union_leaves_operands_untouched(r1 in proptest_strategy(), r2 in proptest_strategy()) {
            let (c1, c2) = (r1.clone(), r2.clone());
            let _ = &r1 | &r2;
            assert_eq!((r1, r2), (c1, c2));
        }

        // Testing intersection and difference ------------

        #[test]
        fn intersection_is_symmetric(r1 in proptest_strategy(), r2 in proptest_strategy()) {
            assert_eq!(r1.intersection(&r2), r2.intersection(&r1));
        }

        #[test]
        fn intersection_contains_both(r1 in proptest_strategy(), r2 in proptest_strategy(), x in scalar_strat()) {
            assert_eq!(r1.intersection(&r2).contains(&x), r1.contains(&x) && r2.contains(&x));
        }

        #[test]
        fn intersection_of_complements_is_empty(s in proptest_strategy()) {
            assert!(s.complement().intersection(&s).is_empty());
        }

        #[test]
        fn difference_contains_only_left(r1 in proptest_strategy(), r2 in proptest_strategy(), x in scalar_strat()) {
            assert_eq!(r1.difference(&r2).contains(&x), r1.contains(&x) && !r2.contains(&x));
        }

        #[test]
        fn symmetric_difference_through_union(r1 in proptest_strategy(), r2 in proptest_strategy()) {
            let def = r1.union(&r2).difference(&r1.intersection(&r2));
            assert_eq!(r1.symmetric_difference(&r2), def);
        }

        #[test]
        fn is_disjoint_through_intersection(r1 in proptest_strategy(), r2 in proptest_strategy()) {
            assert_eq!(r1.is_disjoint(&r2), r1.intersection(&r2).is_empty());
        }

        // Testing relations ------------------------------

        #[test]
        fn superset_is_reflexive(s in proptest_strategy()) {
            assert!(s.is_superset(&s));
            assert_eq!(s.partial_cmp(&s), Some(Ordering::Equal));
        }

        #[test]
        fn subset_through_intersection(r1 in proptest_strategy(), r2 in proptest_strategy()) {
            assert_eq!(r1.is_subset(&r2), r1.intersection(&r2) == r1);
        }

        #[test]
        fn superset_is_antisymmetric(r1 in proptest_strategy(), r2 in proptest_strategy()) {
            if r1.is_superset(&r2) && r2.is_superset(&r1) {
                assert_eq!(r1, r2);
            }
        }

        #[test]
        fn union_is_a_superset(r1 in proptest_strategy(), r2 in proptest_strategy()) {
            let u = r1.union(&r2);
            assert!(u >= r1 && u >= r2);
        }

        // Testing search ---------------------------------

        #[test]
        fn search_agrees_with_linear_scan(s in proptest_strategy(), x in scalar_strat()) {
            let (index, found) = s.search(&x).unwrap();
            let linear = s.pieces().iter().position(|p| p.contains(&x));
            match linear {
                Some(i) => assert_eq!((index, found), (i, Some(&s.pieces()[i]))),
                None => {
                    assert!(found.is_none());
                    assert!(s.pieces()[..index].iter().all(|p| p.upper().compare_to_scalar(&x) == Ok(Ordering::Less)));
                    assert!(s.pieces()[index..].iter().all(|p| p.lower().compare_to_scalar(&x) == Ok(Ordering::Greater)));
                }
            }
        }
    }

    #[test]
    fn add_scenarios() {
        let mut s = UISet::new();
        s.add(iv("(1, 2)")).unwrap();
        s.add(iv("[2, 5]")).unwrap();
        assert_eq!(s, set("(1, 5]"));

        let mut s = UISet::new();
        s.add(iv("(-inf, 0)")).unwrap();
        s.add(iv("(-inf, 0)")).unwrap();
        assert_eq!(s, set("(-inf, 0)"));
        s.add(iv("[-1, 0]")).unwrap();
        assert_eq!(s, set("(-inf, 0]"));
        s.add(iv("(0, 1)")).unwrap();
        assert_eq!(s, set("(-inf, 1)"));

        let mut s = set("(1, 2), (5, 8)");
        s.add(iv("[2, 5]")).unwrap();
        assert_eq!(s, set("(1, 8)"));

        let mut s = set("(0, 1), (1, 2)");
        s.add(Piece::Point(1)).unwrap();
        assert_eq!(s, set("(0, 2)"));

        let mut s = set("{1}, [3, 4], {9}");
        s.add(Interval::<i32>::unbounded()).unwrap();
        assert_eq!(s, UISet::full());
    }

    #[test]
    fn add_keeps_gaps() {
        let mut s = UISet::new();
        s.add(iv("(0, 1)")).unwrap();
        s.add(iv("(1, 2)")).unwrap();
        assert_eq!(s.pieces(), &[Piece::from(iv("(0, 1)")), Piece::from(iv("(1, 2)"))]);

        let mut s = UISet::new();
        s.add(iv("[7, 9]")).unwrap();
        s.add(iv("[1, 4]")).unwrap();
        assert_eq!(s.pieces(), &[Piece::from(iv("[1, 4]")), Piece::from(iv("[7, 9]"))]);

        s.add(iv("[3, 5]")).unwrap();
        assert_eq!(s, set("[1, 5], [7, 9]"));
        s.add(iv("[2, 3]")).unwrap();
        assert_eq!(s, set("[1, 5], [7, 9]"));
    }

    #[test]
    fn add_rejects_invalid_points() {
        let mut s: UISet<f64> = UISet::new();
        assert_eq!(s.add(Piece::Point(f64::NAN)), Err(SetError::NotComparable));
        assert!(s.add(Piece::Point(f64::INFINITY)).is_err());
        assert!(s.is_empty());
    }

    #[test]
    fn discard_scenarios() {
        let mut s = set("[0, 2]");
        s.discard(Piece::Point(1)).unwrap();
        assert_eq!(s, set("[0, 1), (1, 2]"));

        let mut s = set("[0, 2]");
        s.discard(Piece::Point(0)).unwrap();
        assert_eq!(s, set("(0, 2]"));

        let mut s = set("{0}, [3, 4]");
        s.discard(Piece::Point(0)).unwrap();
        assert_eq!(s, set("[3, 4]"));

        let mut s = set("(-inf, inf)");
        s.discard(iv("[0, 1)")).unwrap();
        assert_eq!(s, set("(-inf, 0), [1, inf)"));

        let mut s = set("[0, 1], [2, 3], [4, 5]");
        s.discard(iv("(0, 5)")).unwrap();
        assert_eq!(s, set("{0}, {5}"));

        let mut s = set("[0, 1]");
        s.discard(iv("[5, 6]")).unwrap();
        assert_eq!(s, set("[0, 1]"));
    }

    #[test]
    fn remove_requires_presence() {
        let mut s = set("[0, 2]");
        assert_eq!(s.remove(iv("[1, 3]")), Err(SetError::NotPresent));
        assert_eq!(s, set("[0, 2]"));
        assert_eq!(s.remove(iv("(0, 1]")), Ok(()));
        assert_eq!(s, set("{0}, (1, 2]"));
    }

    #[test]
    fn complement_scenarios() {
        assert_eq!(set("[0, inf)").complement(), set("(-inf, 0)"));
        assert_eq!(UISet::<i32>::new().complement(), UISet::full());
        assert_eq!(UISet::<i32>::full().complement(), UISet::new());
        assert_eq!(set("{1}").complement(), set("(-inf, 1), (1, inf)"));
        assert_eq!(
            set("(-inf, 0], {2}, (4, 5)").complement(),
            set("(0, 2), (2, 4], [5, inf)")
        );
        assert_eq!(set("[0, 1), (1, 2]").complement(), set("(-inf, 0), {1}, (2, inf)"));
        assert_eq!(!set("[3, 4]"), set("(-inf, 3), (4, inf)"));
    }

    #[test]
    fn superset_scenarios() {
        assert!(set("[1, 3]").is_superset(&set("(1, 3)")));
        assert!(!set("(1, 3)").is_superset(&set("[1, 3]")));
        assert!(set("[1, 3]").is_proper_superset(&set("(1, 3)")));
        assert!(set("(1, 3)").is_proper_subset(&set("[1, 3]")));
        assert!(set("(-inf, 0), [1, 5]").is_superset(&set("{-3}, (-2, -1), {1}, [2, 3]")));
        assert!(!set("(-inf, 0), [1, 5]").is_superset(&set("{-3}, {0}")));
        assert!(UISet::<i32>::new().is_subset(&set("{1}")));
    }

    #[test]
    fn inclusion_is_not_total() {
        let one = set("{1}");
        let two = set("{2}");
        assert!(!(one >= two));
        assert!(!(two >= one));
        assert_eq!(one.partial_cmp(&two), None);
        assert!(set("[1, 2]") > one);
        assert!(one < set("[1, 2]"));
    }

    #[test]
    fn search_reports_insertion_points() {
        let s = set("[0, 1), {3}, (5, inf)");
        assert_eq!(s.search(&0).unwrap(), (0, Some(&s.pieces()[0])));
        assert_eq!(s.search(&1).unwrap(), (1, None));
        assert_eq!(s.search(&3).unwrap(), (1, Some(&s.pieces()[1])));
        assert_eq!(s.search(&4).unwrap(), (2, None));
        assert_eq!(s.search(&5).unwrap(), (2, None));
        assert_eq!(s.search(&6).unwrap(), (2, Some(&s.pieces()[2])));
        assert_eq!(s.search(&-1).unwrap(), (0, None));
        assert_eq!(s.search_within(&6, 0, 2).unwrap(), (2, None));

        let f: UISet<f64> = UISet::full();
        assert_eq!(f.search(&f64::NAN), Err(SetError::NotComparable));
        assert!(!f.contains(&f64::NAN));
        assert!(f.contains(&f64::MAX));
    }

    #[test]
    fn from_pieces_validates_order() {
        assert_eq!(
            UISet::from_pieces([Piece::from(iv("[2, 3]")), Piece::from(iv("[0, 1]"))]),
            Err(SetError::UnorderedPieces { index: 1 })
        );
        assert_eq!(
            UISet::from_pieces([Piece::from(iv("[0, 1]")), Piece::from(iv("(1, 2]"))]),
            Err(SetError::UnorderedPieces { index: 1 })
        );
        assert_eq!(
            UISet::from_pieces([Piece::from(iv("[0, 0]")), Piece::from(iv("(1, 2]"))])
                .unwrap()
                .pieces()[0],
            Piece::Point(0)
        );
    }

    #[test]
    fn in_place_operators() {
        let mut s = set("[0, 10]");
        s -= &set("[2, 3]");
        assert_eq!(s, set("[0, 2), (3, 10]"));
        s &= &set("[1, 5]");
        assert_eq!(s, set("[1, 2), (3, 5]"));
        s |= &set("{2}");
        assert_eq!(s, set("[1, 2], (3, 5]"));
        s ^= &set("[2, 4]");
        assert_eq!(s, set("[1, 2), (2, 3], (4, 5]"));
        assert_eq!(&s & &UISet::new(), UISet::new());
        assert_eq!(&s - &s, UISet::new());
        assert_eq!(&s ^ &s, UISet::new());
    }

    #[test]
    fn pop_and_clear() {
        let mut s = set("{1}, [2, 3]");
        assert_eq!(s.pop(), Some(Piece::Point(1)));
        assert_eq!(s, set("[2, 3]"));
        s.clear();
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn collect_intervals() {
        let s: UISet<i32> = [iv("[5, 8]"), iv("[1, 6]")].into_iter().collect();
        assert_eq!(s, set("[1, 8]"));
        let union = set("{0}").union_all([&set("{1}"), &set("(1, 2)")]);
        assert_eq!(union, set("{0}, [1, 2)"));
    }
}
