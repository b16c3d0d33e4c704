// SPDX-License-Identifier: MPL-2.0

//! Boundary events and the inside/outside cursor.
//!
//! A [`Set`](crate::Set) is stored as the sorted list of coordinates where membership changes.
//! Reading those events left to right while tracking a [`Cursor`] recovers membership
//! everywhere on the line:
//!
//! ```text
//!            Lower(0)      Point(3)      Upper(5)     Point(8)
//!  outside  [------------------)(-----------]          [8]       outside
//!                inside          inside        outside
//! ```
//!
//! A [`Profile`] samples membership just below, exactly at, and just above one coordinate.
//! Every event has a profile, and every profile that is not constant maps back to exactly one
//! event, which is what makes the representation canonical.

use extended_decimal::ExtendedDecimal;

/// One position in the canonical event sequence of a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Start of an interval extending to the right. `open` excludes the value itself.
    Lower {
        /// Coordinate of the boundary.
        value: ExtendedDecimal,
        /// Whether the coordinate itself is excluded.
        open: bool,
    },
    /// End of an interval that started to the left. `open` excludes the value itself.
    Upper {
        /// Coordinate of the boundary.
        value: ExtendedDecimal,
        /// Whether the coordinate itself is excluded.
        open: bool,
    },
    /// A single value whose membership is flipped relative to its surroundings: an included
    /// value while outside, an excluded value while inside.
    Point(ExtendedDecimal),
}

/// The tag of a [`Boundary`], used by the flat `(value, kind, open)` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryKind {
    /// See [`Boundary::Lower`].
    Lower,
    /// See [`Boundary::Upper`].
    Upper,
    /// See [`Boundary::Point`].
    Point,
}

impl Boundary {
    pub(crate) fn open_lower_at_negative_infinity() -> Self {
        Self::Lower {
            value: ExtendedDecimal::NEG_INFINITY,
            open: true,
        }
    }

    pub(crate) fn open_upper_at_positive_infinity() -> Self {
        Self::Upper {
            value: ExtendedDecimal::INFINITY,
            open: true,
        }
    }

    /// Coordinate of the event.
    pub fn value(&self) -> &ExtendedDecimal {
        match self {
            Self::Lower { value, .. } | Self::Upper { value, .. } | Self::Point(value) => value,
        }
    }

    /// Tag of the event.
    pub fn kind(&self) -> BoundaryKind {
        match self {
            Self::Lower { .. } => BoundaryKind::Lower,
            Self::Upper { .. } => BoundaryKind::Upper,
            Self::Point(_) => BoundaryKind::Point,
        }
    }

    /// Whether the coordinate is excluded on that side. Always false for points.
    pub fn is_open(&self) -> bool {
        match self {
            Self::Lower { open, .. } | Self::Upper { open, .. } => *open,
            Self::Point(_) => false,
        }
    }

    /// Cursor after crossing this event.
    pub fn advance(&self, cursor: Cursor) -> Cursor {
        match self {
            Self::Lower { .. } => Cursor::Inside,
            Self::Upper { .. } => Cursor::Outside,
            Self::Point(_) => cursor,
        }
    }

    /// Membership around this event given the cursor before it.
    ///
    /// For a valid sequence `cursor` is outside before a lower bound and inside before an upper
    /// bound; the profile of a bound does not depend on it.
    pub fn profile(&self, cursor: Cursor) -> Profile {
        match self {
            Self::Lower { open, .. } => Profile {
                below: false,
                at: !open,
                above: true,
            },
            Self::Upper { open, .. } => Profile {
                below: true,
                at: !open,
                above: false,
            },
            Self::Point(_) => {
                let inside = cursor.is_inside();
                Profile {
                    below: inside,
                    at: !inside,
                    above: inside,
                }
            }
        }
    }
}

/// Membership state while scanning events left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Values just before the next event are not members.
    #[default]
    Outside,
    /// Values just before the next event are members.
    Inside,
}

impl Cursor {
    /// Whether the cursor is inside the set.
    pub fn is_inside(self) -> bool {
        matches!(self, Self::Inside)
    }
}

impl From<bool> for Cursor {
    fn from(inside: bool) -> Self {
        if inside {
            Self::Inside
        } else {
            Self::Outside
        }
    }
}

/// Membership just below, exactly at, and just above a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    /// Membership of the values immediately to the left.
    pub below: bool,
    /// Membership of the coordinate itself.
    pub at: bool,
    /// Membership of the values immediately to the right.
    pub above: bool,
}

impl Profile {
    /// Profile of a coordinate where nothing changes.
    pub fn steady(cursor: Cursor) -> Self {
        let inside = cursor.is_inside();
        Self {
            below: inside,
            at: inside,
            above: inside,
        }
    }

    /// Pointwise disjunction.
    pub fn or(self, other: Self) -> Self {
        Self {
            below: self.below || other.below,
            at: self.at || other.at,
            above: self.above || other.above,
        }
    }

    /// Pointwise conjunction.
    pub fn and(self, other: Self) -> Self {
        Self {
            below: self.below && other.below,
            at: self.at && other.at,
            above: self.above && other.above,
        }
    }

    /// The event encoding this profile at `value`, or `None` if membership does not change.
    ///
    /// | below | at | above | event |
    /// |---|---|---|---|
    /// | F | F | F | none |
    /// | T | T | T | none |
    /// | F | T | F | included point |
    /// | T | F | T | excluded point |
    /// | F | x | T | lower, open if !x |
    /// | T | x | F | upper, open if !x |
    pub fn boundary_at(self, value: ExtendedDecimal) -> Option<Boundary> {
        match (self.below, self.above) {
            (false, false) if self.at => Some(Boundary::Point(value)),
            (true, true) if !self.at => Some(Boundary::Point(value)),
            (false, false) | (true, true) => None,
            (false, true) => Some(Boundary::Lower {
                value,
                open: !self.at,
            }),
            (true, false) => Some(Boundary::Upper {
                value,
                open: !self.at,
            }),
        }
    }
}
