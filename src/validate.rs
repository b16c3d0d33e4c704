// SPDX-License-Identifier: MPL-2.0

//! The well-formedness check for boundary sequences.

use extended_decimal::ExtendedDecimal;

use crate::boundary::{Boundary, BoundaryKind, Cursor};
use crate::error::ValidationError;

/// Check a sequence of boundaries against the canonical form rules.
///
/// Values must be strictly increasing, infinite values may only sit on open bounds, lower and
/// upper bounds must alternate around the cursor, and the cursor must end outside.
pub fn validate_boundaries(boundaries: &[Boundary]) -> Result<(), ValidationError> {
    validate_parts(
        boundaries
            .iter()
            .map(|b| (b.value(), b.kind(), b.is_open())),
    )
}

/// Same check over the flat `(value, kind, open)` form, where a point may still carry an open
/// flag.
pub fn validate_parts<'a>(
    parts: impl IntoIterator<Item = (&'a ExtendedDecimal, BoundaryKind, bool)>,
) -> Result<(), ValidationError> {
    let mut cursor = Cursor::Outside;
    let mut previous: Option<&ExtendedDecimal> = None;
    for (index, (value, kind, open)) in parts.into_iter().enumerate() {
        if previous.is_some_and(|p| p >= value) {
            return Err(ValidationError::UnsortedOrDuplicate(index));
        }
        // A point includes or excludes its value, so at infinity it is a closed boundary.
        if value.is_infinite() && (!open || kind == BoundaryKind::Point) {
            return Err(ValidationError::InfiniteMustBeOpen(index));
        }
        cursor = match (kind, cursor) {
            (BoundaryKind::Point, _) if open => {
                return Err(ValidationError::PointMustBeClosed(index))
            }
            (BoundaryKind::Point, cursor) => cursor,
            (BoundaryKind::Lower, Cursor::Inside) => {
                return Err(ValidationError::LowerWhileInside(index))
            }
            (BoundaryKind::Lower, Cursor::Outside) => Cursor::Inside,
            (BoundaryKind::Upper, Cursor::Outside) => {
                return Err(ValidationError::UpperWhileOutside(index))
            }
            (BoundaryKind::Upper, Cursor::Inside) => Cursor::Outside,
        };
        previous = Some(value);
    }

    if cursor.is_inside() {
        return Err(ValidationError::UnterminatedTrailingInterval);
    }
    Ok(())
}
