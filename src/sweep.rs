// SPDX-License-Identifier: MPL-2.0

//! Union and intersection as one merge sweep over two boundary sequences.
//!
//! Both operands are scanned left to right at the same time, each with its own cursor.
//! Where only one operand has an event, the other one is steady there, so the event either
//! survives verbatim or disappears. Where both have an event at the same value, the two
//! [`Profile`]s are combined pointwise and mapped back to a single event, which keeps the output
//! free of duplicate positions. Equal values may be spelled differently (`2` and `2.0`); the
//! merged event takes the spelling with fewer fraction digits, whichever operand it came from.

use std::cmp::Ordering;

use smallvec::SmallVec;

use extended_decimal::ExtendedDecimal;

use crate::boundary::{Cursor, Profile};
use crate::set::Set;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combine {
    Union,
    Intersection,
}

impl Combine {
    /// Whether an event of one operand survives when the other operand is steady at `other`.
    fn keeps_lone_event(self, other: Cursor) -> bool {
        match self {
            Self::Union => !other.is_inside(),
            Self::Intersection => other.is_inside(),
        }
    }

    fn profiles(self, left: Profile, right: Profile) -> Profile {
        match self {
            Self::Union => left.or(right),
            Self::Intersection => left.and(right),
        }
    }
}

/// Of two equal values, the one rendered with fewer fraction digits.
fn tie_value<'a>(left: &'a ExtendedDecimal, right: &'a ExtendedDecimal) -> &'a ExtendedDecimal {
    if right.scale() < left.scale() {
        right
    } else {
        left
    }
}

impl Set {
    /// Computes the union of this set and another.
    pub fn union(&self, other: &Self) -> Self {
        self.sweep(other, Combine::Union)
    }

    /// Computes the intersection of two sets.
    pub fn intersection(&self, other: &Self) -> Self {
        self.sweep(other, Combine::Intersection)
    }

    fn sweep(&self, other: &Self, combine: Combine) -> Self {
        let mut output = SmallVec::new();
        let mut left_iter = self.boundaries.iter().peekable();
        let mut right_iter = other.boundaries.iter().peekable();
        let mut left_cursor = Cursor::Outside;
        let mut right_cursor = Cursor::Outside;

        while let Some((left, right)) = left_iter.peek().copied().zip(right_iter.peek().copied())
        {
            match left.value().cmp(right.value()) {
                Ordering::Less => {
                    left_iter.next();
                    if combine.keeps_lone_event(right_cursor) {
                        log::trace!("{combine:?}: keep {left:?} from the left");
                        output.push(left.clone());
                    }
                    left_cursor = left.advance(left_cursor);
                }
                Ordering::Greater => {
                    right_iter.next();
                    if combine.keeps_lone_event(left_cursor) {
                        log::trace!("{combine:?}: keep {right:?} from the right");
                        output.push(right.clone());
                    }
                    right_cursor = right.advance(right_cursor);
                }
                Ordering::Equal => {
                    left_iter.next();
                    right_iter.next();
                    let profile = combine
                        .profiles(left.profile(left_cursor), right.profile(right_cursor));
                    let value = tie_value(left.value(), right.value()).clone();
                    let merged = profile.boundary_at(value);
                    log::trace!("{combine:?}: {left:?} and {right:?} merge into {merged:?}");
                    output.extend(merged);
                    left_cursor = left.advance(left_cursor);
                    right_cursor = right.advance(right_cursor);
                }
            }
        }

        // The exhausted operand is outside from here on.
        if combine == Combine::Union {
            output.extend(left_iter.cloned());
            output.extend(right_iter.cloned());
        }

        log::debug!(
            "{combine:?}: {} and {} boundaries -> {}",
            self.boundaries.len(),
            other.boundaries.len(),
            output.len()
        );
        Self { boundaries: output }
    }
}

#[cfg(test)]
mod tests {
    use extended_decimal::ExtendedDecimal;

    use crate::boundary::BoundaryKind;

    use super::*;

    fn d(s: &str) -> ExtendedDecimal {
        s.parse().unwrap()
    }

    fn closed(low: i64, high: i64) -> Set {
        Set::new(low, false, high, false)
    }

    fn open(low: i64, high: i64) -> Set {
        Set::new(low, true, high, true)
    }

    #[test]
    fn disjoint() {
        let u = closed(0, 1).union(&Set::new(2, false, 3, true));
        assert_eq!(u.to_string(), "[0, 1], [2, 3)");
        assert!(closed(0, 1)
            .intersection(&Set::new(2, false, 3, true))
            .is_empty());
    }

    #[test]
    fn overlapping() {
        assert_eq!(closed(0, 2).union(&open(1, 3)).to_string(), "[0, 3)");
        assert_eq!(closed(0, 2).intersection(&open(1, 3)).to_string(), "(1, 2]");
    }

    #[test]
    fn nested() {
        assert_eq!(closed(0, 10).union(&open(2, 3)), closed(0, 10));
        assert_eq!(closed(0, 10).intersection(&open(2, 3)), open(2, 3));
    }

    #[test]
    fn shared_lower_bound() {
        assert_eq!(open(0, 2).union(&closed(0, 1)).to_string(), "[0, 2)");
        assert_eq!(open(0, 2).intersection(&closed(0, 1)).to_string(), "(0, 1]");
    }

    #[test]
    fn shared_upper_bound() {
        assert_eq!(open(0, 2).union(&closed(1, 2)).to_string(), "(0, 2]");
        assert_eq!(open(0, 2).intersection(&closed(1, 2)).to_string(), "[1, 2)");
    }

    #[test]
    fn touching_bounds() {
        assert_eq!(closed(0, 1).union(&closed(1, 2)).to_string(), "[0, 2]");
        assert_eq!(closed(0, 1).intersection(&closed(1, 2)).to_string(), "[1, 1]");
        assert_eq!(open(0, 1).union(&open(1, 2)).to_string(), "(0, 1), (1, 2)");
        assert!(open(0, 1).intersection(&open(1, 2)).is_empty());
        assert_eq!(
            Set::new(0, true, 1, false).union(&open(1, 2)).to_string(),
            "(0, 2)"
        );
    }

    #[test]
    fn point_meets_bound() {
        // Inclusion against an open bound at the same value.
        assert_eq!(Set::singleton(1).union(&open(1, 2)).to_string(), "[1, 2)");
        assert_eq!(Set::singleton(2).union(&open(1, 2)).to_string(), "(1, 2]");
        assert!(Set::singleton(1).intersection(&open(1, 2)).is_empty());
        assert_eq!(
            Set::singleton(1).intersection(&closed(1, 2)).to_string(),
            "[1, 1]"
        );

        // Exclusion against a bound at the same value.
        let holed = closed(0, 4).intersection(&Set::singleton(2).complement());
        assert_eq!(holed.to_string(), "[0, 2), (2, 4]");
        assert_eq!(holed.union(&closed(2, 3)).to_string(), "[0, 4]");
        assert_eq!(holed.union(&open(2, 3)).to_string(), "[0, 2), (2, 4]");
        assert_eq!(holed.intersection(&closed(2, 3)).to_string(), "(2, 3]");
        assert_eq!(holed.intersection(&closed(1, 2)).to_string(), "[1, 2)");
    }

    #[test]
    fn point_meets_point() {
        let holed = closed(0, 4).intersection(&Set::singleton(2).complement());
        assert_eq!(holed.union(&Set::singleton(2)), closed(0, 4));
        assert!(holed.intersection(&Set::singleton(2)).is_empty());
        assert_eq!(holed.union(&holed), holed);
        assert_eq!(Set::singleton(2).union(&Set::singleton(2)), Set::singleton(2));
        assert_eq!(
            Set::singleton(2).intersection(&Set::singleton(d("2.0"))),
            Set::singleton(2)
        );
    }

    #[test]
    fn infinite_bounds() {
        let below = Set::new(ExtendedDecimal::NEG_INFINITY, true, 0, false);
        let above = Set::new(0, false, ExtendedDecimal::INFINITY, true);
        assert_eq!(below.union(&above), Set::full());
        assert_eq!(below.intersection(&above).to_string(), "[0, 0]");
        assert_eq!(
            Set::singleton(0).intersection(&above).to_string(),
            "[0, 0]"
        );
        assert_eq!(Set::full().intersection(&closed(1, 2)), closed(1, 2));
        assert_eq!(Set::full().union(&closed(1, 2)), Set::full());
    }

    #[test]
    fn empty_operands() {
        assert_eq!(Set::empty().union(&closed(1, 2)), closed(1, 2));
        assert_eq!(closed(1, 2).union(&Set::empty()), closed(1, 2));
        assert!(Set::empty().intersection(&closed(1, 2)).is_empty());
    }

    #[test]
    fn ties_do_not_depend_on_operand_order() {
        let a = closed(0, 2);
        let b = Set::singleton(d("2.0"));
        assert_eq!(a.union(&b).to_string(), "[0, 2]");
        assert_eq!(b.union(&a).to_string(), "[0, 2]");

        let c = Set::new(d("2.0"), false, 5, false);
        assert_eq!(a.intersection(&c).to_string(), "[2, 2]");
        assert_eq!(c.intersection(&a).to_string(), "[2, 2]");

        let padded = Set::new(d("0.00"), true, d("2.000"), true);
        let plain = Set::new(d("0.0"), false, d("2.00"), false);
        assert_eq!(padded.union(&plain).to_string(), "[0.0, 2.00]");
        assert_eq!(plain.union(&padded).to_string(), "[0.0, 2.00]");
        assert_eq!(padded.intersection(&plain).to_string(), "(0.0, 2.00)");
        assert_eq!(plain.intersection(&padded).to_string(), "(0.0, 2.00)");
    }

    #[test]
    fn query_predicate() {
        // x > 3 AND NOT (x BETWEEN 5 AND 7)
        let above_three = Set::new(3, true, ExtendedDecimal::INFINITY, true);
        let set = above_three.intersection(&closed(5, 7).complement());
        assert_eq!(set.to_string(), "(3, 5), (7, Infinity)");
        assert_eq!(set.validate(), Ok(()));
    }

    #[test]
    fn results_are_canonical() {
        let left = Set::from_parts([
            (d("0"), BoundaryKind::Lower, true),
            (d("1"), BoundaryKind::Point, false),
            (d("3"), BoundaryKind::Upper, false),
            (d("5"), BoundaryKind::Point, false),
        ])
        .unwrap();
        let right = Set::from_parts([
            (d("1"), BoundaryKind::Point, false),
            (d("3"), BoundaryKind::Lower, true),
            (d("5"), BoundaryKind::Upper, true),
        ])
        .unwrap();
        let u = left.union(&right);
        assert_eq!(u.validate(), Ok(()));
        assert_eq!(u.to_string(), "(0, 5]");
        let i = left.intersection(&right);
        assert_eq!(i.validate(), Ok(()));
        assert!(i.is_empty());
    }
}
