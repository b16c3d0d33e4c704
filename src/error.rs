// SPDX-License-Identifier: MPL-2.0

//! Handling construction and validation errors.

use extended_decimal::ParseDecimalError;
use thiserror::Error;

/// Errors that may occur while building a set from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A bound is not a valid decimal or infinity literal.
    #[error(transparent)]
    Decimal(#[from] ParseDecimalError),

    /// The text is not a comma separated list of intervals.
    #[error("malformed interval notation at byte {position}: expected {expected}")]
    Malformed {
        /// Byte offset where parsing stopped.
        position: usize,
        /// What the parser was looking for.
        expected: &'static str,
    },
}

/// Structural defects of a boundary sequence, reported with the offending index.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not strictly greater than the previous one.
    #[error("boundary {0} is not strictly greater than the previous boundary")]
    UnsortedOrDuplicate(usize),

    /// An infinite value is attached to a closed boundary.
    #[error("boundary {0} is infinite, so it cannot be closed")]
    InfiniteMustBeOpen(usize),

    /// A lower bound while values below it are already members.
    #[error("boundary {0} is a lower bound, but values below it are in the set as well")]
    LowerWhileInside(usize),

    /// An upper bound while values below it are not members.
    #[error("boundary {0} is an upper bound, but values below it are out of the set as well")]
    UpperWhileOutside(usize),

    /// A point event flagged as open.
    #[error("boundary {0} is a single value, so it cannot be open")]
    PointMustBeClosed(usize),

    /// The last interval never ends.
    #[error("the last interval is not bounded")]
    UnterminatedTrailingInterval,
}
