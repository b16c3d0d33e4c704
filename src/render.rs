// SPDX-License-Identifier: MPL-2.0

//! Interval notation for sets.
//!
//! ```text
//! (-Infinity, 0], [2, 3), [5, 5]
//! [0, 1), (1, 4]        the value 1 excluded from [0, 4]
//! ```
//!
//! The empty set renders as the empty string.

use std::fmt::{self, Display, Formatter};

use crate::boundary::{Boundary, Cursor};
use crate::set::Set;

impl Display for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut cursor = Cursor::Outside;
        for (idx, boundary) in self.boundaries.iter().enumerate() {
            match boundary {
                Boundary::Lower { value, open } => {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    let bracket = if *open { '(' } else { '[' };
                    write!(f, "{bracket}{value}, ")?;
                }
                Boundary::Upper { value, open } => {
                    let bracket = if *open { ')' } else { ']' };
                    write!(f, "{value}{bracket}")?;
                }
                // An excluded value splits the current interval in two.
                Boundary::Point(value) if cursor.is_inside() => write!(f, "{value}), ({value}, ")?,
                Boundary::Point(value) => {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[{value}, {value}]")?;
                }
            }
            cursor = boundary.advance(cursor);
        }
        Ok(())
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

    #[test]
    fn single_intervals() {
        assert_eq!(Set::new(0, false, 1, true).to_string(), "[0, 1)");
        assert_eq!(Set::new(0, true, 1, false).to_string(), "(0, 1]");
        assert_eq!(Set::new(7, false, 7, false).to_string(), "[7, 7]");
        assert_eq!(Set::full().to_string(), "(-Infinity, Infinity)");
        assert_eq!(Set::empty().to_string(), "");
    }

    #[test]
    fn keeps_literal_text() {
        assert_eq!(Set::from_strings("1", "2.0").unwrap().to_string(), "[1, 2.0]");
        assert_eq!(
            Set::from_strings("-0.50", "infinity").unwrap().to_string(),
            "[-0.50, Infinity)"
        );
    }

    #[test]
    fn points_inside_and_outside() {
        let s = Set::from_parts([
            (ExtendedDecimal::NEG_INFINITY, BoundaryKind::Lower, true),
            (d("1"), BoundaryKind::Point, false),
            (d("2"), BoundaryKind::Point, false),
            (d("3"), BoundaryKind::Upper, false),
            (d("4"), BoundaryKind::Point, false),
            (d("6"), BoundaryKind::Lower, true),
            (d("8"), BoundaryKind::Upper, true),
        ])
        .unwrap();
        assert_eq!(
            s.to_string(),
            "(-Infinity, 1), (1, 2), (2, 3], [4, 4], (6, 8)"
        );
    }
}
