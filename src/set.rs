// SPDX-License-Identifier: MPL-2.0

//! The [`Set`] type and its building blocks.

use std::cmp::Ordering;

use extended_decimal::ExtendedDecimal;
#[cfg(any(feature = "proptest", test))]
use proptest::prelude::*;
use smallvec::{smallvec, SmallVec};

use crate::boundary::{Boundary, BoundaryKind, Cursor};
use crate::error::{ParseError, ValidationError};
use crate::validate::{validate_boundaries, validate_parts};

/// A subset of the extended real line, stored as its canonical boundary sequence.
///
/// Sets are immutable values. All constructors either validate their input or build a
/// canonical sequence directly, and the algebra operations return new canonical sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Set {
    /// A single interval is two events, so that case stays inline.
    pub(crate) boundaries: SmallVec<[Boundary; 2]>,
}

// Building blocks.
impl Set {
    /// The set containing nothing.
    pub fn empty() -> Self {
        Self {
            boundaries: SmallVec::new(),
        }
    }

    /// Every finite value, `(-Infinity, Infinity)`.
    pub fn full() -> Self {
        Self {
            boundaries: smallvec![
                Boundary::open_lower_at_negative_infinity(),
                Boundary::open_upper_at_positive_infinity()
            ],
        }
    }

    /// The set containing exactly one value. A single infinity is the empty set.
    pub fn singleton(v: impl Into<ExtendedDecimal>) -> Self {
        let v = v.into();
        if v.is_infinite() {
            Self::empty()
        } else {
            Self {
                boundaries: smallvec![Boundary::Point(v)],
            }
        }
    }

    /// The interval between two values, in either order.
    ///
    /// Infinite bounds are always open. Equal bounds give a single value (the open flags are
    /// ignored), unless both are infinite, which gives the empty set.
    pub fn new(
        low: impl Into<ExtendedDecimal>,
        low_open: bool,
        high: impl Into<ExtendedDecimal>,
        high_open: bool,
    ) -> Self {
        let low = low.into();
        let high = high.into();
        let low_open = low_open || low.is_infinite();
        let high_open = high_open || high.is_infinite();

        let boundaries = match low.cmp(&high) {
            Ordering::Equal if low.is_infinite() => SmallVec::new(),
            Ordering::Equal => smallvec![Boundary::Point(low)],
            Ordering::Less => smallvec![
                Boundary::Lower {
                    value: low,
                    open: low_open,
                },
                Boundary::Upper {
                    value: high,
                    open: high_open,
                },
            ],
            Ordering::Greater => smallvec![
                Boundary::Lower {
                    value: high,
                    open: high_open,
                },
                Boundary::Upper {
                    value: low,
                    open: low_open,
                },
            ],
        };
        Self { boundaries }
    }

    /// The closed interval between two decimal literals.
    pub fn from_strings(low: &str, high: &str) -> Result<Self, ParseError> {
        let low: ExtendedDecimal = low.parse()?;
        let high: ExtendedDecimal = high.parse()?;
        Ok(Self::new(low, false, high, false))
    }

    /// Adopt an explicit boundary sequence after validating it.
    pub fn from_boundaries(
        boundaries: impl IntoIterator<Item = Boundary>,
    ) -> Result<Self, ValidationError> {
        let boundaries: SmallVec<[Boundary; 2]> = boundaries.into_iter().collect();
        validate_boundaries(&boundaries)?;
        Ok(Self { boundaries })
    }

    /// Adopt a sequence in the flat `(value, kind, open)` form after validating it.
    pub fn from_parts(
        parts: impl IntoIterator<Item = (ExtendedDecimal, BoundaryKind, bool)>,
    ) -> Result<Self, ValidationError> {
        let parts: Vec<_> = parts.into_iter().collect();
        validate_parts(parts.iter().map(|(value, kind, open)| (value, *kind, *open)))?;
        let boundaries = parts
            .into_iter()
            .map(|(value, kind, open)| match kind {
                BoundaryKind::Lower => Boundary::Lower { value, open },
                BoundaryKind::Upper => Boundary::Upper { value, open },
                BoundaryKind::Point => Boundary::Point(value),
            })
            .collect();
        Ok(Self { boundaries })
    }
}

impl Set {
    /// Whether the set contains nothing.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// The canonical boundary sequence.
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Iterate over the boundary sequence.
    pub fn iter(&self) -> impl Iterator<Item = &Boundary> {
        self.boundaries.iter()
    }

    /// Check the boundary sequence against the canonical form rules.
    ///
    /// Every set obtained through this crate passes; the check exists for callers and tests
    /// that want to confirm it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_boundaries(&self.boundaries)
    }

    /// Returns true if `value` is a member. The infinities never are.
    pub fn contains(&self, value: &ExtendedDecimal) -> bool {
        if value.is_infinite() {
            return false;
        }
        let mut cursor = Cursor::Outside;
        for boundary in &self.boundaries {
            match boundary.value().cmp(value) {
                Ordering::Less => cursor = boundary.advance(cursor),
                Ordering::Equal => return boundary.profile(cursor).at,
                Ordering::Greater => break,
            }
        }
        cursor.is_inside()
    }

    #[cfg(any(feature = "proptest", test))]
    fn check_invariants(self) -> Self {
        if cfg!(debug_assertions) {
            if let Err(err) = self.validate() {
                panic!("{err}: {:?}", self.boundaries);
            }
        }
        self
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a Boundary;
    type IntoIter = std::slice::Iter<'a, Boundary>;

    fn into_iter(self) -> Self::IntoIter {
        self.boundaries.iter()
    }
}

// SERIALIZATION ###############################################################

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Set {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let boundaries: Vec<Boundary> = serde::Deserialize::deserialize(deserializer)?;
        Self::from_boundaries(boundaries).map_err(serde::de::Error::custom)
    }
}

/// Generate sets over a grid of half-step decimals (`-9.5`, `-9.0`, ... `6.0`), with random
/// membership below, at, and above each grid coordinate.
///
/// Coordinates are sometimes written with trailing zeros (`-9.50`, `6.000`), so two sets may
/// spell the same coordinate differently.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl Strategy<Value = Set> {
    use crate::boundary::Profile;

    (
        any::<bool>(),
        prop::collection::vec((0u8..4, any::<bool>(), any::<bool>(), 0u32..3), 0..8),
    )
        .prop_map(|(from_negative_infinity, steps)| {
            let mut boundaries = SmallVec::new();
            let mut cursor = Cursor::from(from_negative_infinity);
            if from_negative_infinity {
                boundaries.push(Boundary::open_lower_at_negative_infinity());
            }
            let mut position: i64 = -20;
            for (gap, at, above, extra_zeros) in steps {
                position += i64::from(gap) + 1;
                let profile = Profile {
                    below: cursor.is_inside(),
                    at,
                    above,
                };
                if let Some(boundary) = profile.boundary_at(grid_value(position, extra_zeros)) {
                    boundaries.push(boundary);
                }
                cursor = Cursor::from(above);
            }
            if cursor.is_inside() {
                boundaries.push(Boundary::open_upper_at_positive_infinity());
            }
            Set { boundaries }.check_invariants()
        })
}

#[cfg(any(feature = "proptest", test))]
fn grid_value(position: i64, extra_zeros: u32) -> ExtendedDecimal {
    ExtendedDecimal::from_scaled(
        position * 5 * 10i64.pow(extra_zeros),
        1 + i64::from(extra_zeros),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> ExtendedDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn new_orders_its_bounds() {
        let ascending = Set::new(1, true, 4, false);
        let descending = Set::new(4, false, 1, true);
        assert_eq!(ascending, descending);
        assert_eq!(
            ascending.boundaries(),
            &[
                Boundary::Lower {
                    value: d("1"),
                    open: true
                },
                Boundary::Upper {
                    value: d("4"),
                    open: false
                },
            ]
        );
    }

    #[test]
    fn new_forces_infinity_open() {
        let s = Set::new(ExtendedDecimal::NEG_INFINITY, false, 0, false);
        assert_eq!(
            s.boundaries()[0],
            Boundary::Lower {
                value: ExtendedDecimal::NEG_INFINITY,
                open: true
            }
        );
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn new_with_equal_bounds() {
        assert_eq!(Set::new(3, true, d("3.0"), true).boundaries(), &[Boundary::Point(d("3"))]);
        assert!(Set::new(
            ExtendedDecimal::INFINITY,
            false,
            ExtendedDecimal::INFINITY,
            false
        )
        .is_empty());
        assert!(Set::new(
            ExtendedDecimal::NEG_INFINITY,
            true,
            d("-inf"),
            true
        )
        .is_empty());
    }

    #[test]
    fn from_strings_builds_closed_interval() {
        let s = Set::from_strings("2.0", "-1").unwrap();
        assert_eq!(s, Set::new(d("-1"), false, d("2.0"), false));
        assert!(matches!(
            Set::from_strings("1", "one"),
            Err(ParseError::Decimal(_))
        ));
        assert!(matches!(
            Set::from_strings("", "1"),
            Err(ParseError::Decimal(_))
        ));
    }

    #[test]
    fn singleton_and_full() {
        assert_eq!(Set::singleton(5), Set::new(5, false, 5, false));
        assert!(Set::singleton(ExtendedDecimal::INFINITY).is_empty());
        assert_eq!(
            Set::full(),
            Set::new(ExtendedDecimal::INFINITY, false, ExtendedDecimal::NEG_INFINITY, false)
        );
    }

    #[test]
    fn from_parts_validates() {
        let s = Set::from_parts([
            (d("0"), BoundaryKind::Lower, false),
            (d("1"), BoundaryKind::Point, false),
            (d("2"), BoundaryKind::Upper, true),
        ])
        .unwrap();
        assert_eq!(s.boundaries()[1], Boundary::Point(d("1")));
        assert_eq!(
            Set::from_parts([(d("1"), BoundaryKind::Point, true)]),
            Err(ValidationError::PointMustBeClosed(0))
        );
        assert_eq!(
            Set::from_boundaries([Boundary::Lower {
                value: d("0"),
                open: false
            }]),
            Err(ValidationError::UnterminatedTrailingInterval)
        );
    }

    #[test]
    fn membership() {
        // [0, 2) without 1, plus 5
        let s = Set::from_parts([
            (d("0"), BoundaryKind::Lower, false),
            (d("1"), BoundaryKind::Point, false),
            (d("2"), BoundaryKind::Upper, true),
            (d("5"), BoundaryKind::Point, false),
        ])
        .unwrap();
        assert!(!s.contains(&d("-0.1")));
        assert!(s.contains(&d("0")));
        assert!(s.contains(&d("0.5")));
        assert!(!s.contains(&d("1.0")));
        assert!(s.contains(&d("1.9999")));
        assert!(!s.contains(&d("2")));
        assert!(!s.contains(&d("4.9")));
        assert!(s.contains(&d("5")));
        assert!(!s.contains(&d("5.1")));
        assert!(!Set::full().contains(&ExtendedDecimal::INFINITY));
        assert!(Set::full().contains(&d("-1e20")));
    }

    #[test]
    fn long_fractions_stay_distinct() {
        let s = Set::from_strings("0.1", "0.10000000000000000000000000001").unwrap();
        assert_eq!(s.to_string(), "[0.1, 0.10000000000000000000000000001]");
        assert!(s.contains(&d("0.100000000000000000000000000005")));
        assert!(!s.contains(&d("0.100000000000000000000000000011")));

        let wide = Set::from_strings("0", "100000000000000000000000000000").unwrap();
        assert_eq!(wide.to_string(), "[0, 100000000000000000000000000000]");
        assert!(wide.contains(&d("99999999999999999999999999999.9999")));
    }

    proptest! {
        #[test]
        fn strategy_is_valid(set in proptest_strategy()) {
            prop_assert_eq!(set.validate(), Ok(()));
        }
    }
}
