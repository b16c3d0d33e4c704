// SPDX-License-Identifier: MPL-2.0

//! Exact set algebra over unions of decimal intervals on the extended real line.
//!
//! A [`Set`] can represent predicates such as `x > 3 AND NOT (5 <= x <= 7)`. Internally it is the
//! ordered list of coordinates where membership changes, each tagged as a [`Boundary`]:
//!  - [Lower](Boundary::Lower): an interval starts here, open or closed
//!  - [Upper](Boundary::Upper): an interval ends here, open or closed
//!  - [Point](Boundary::Point): this single value is the exception to its surroundings
//!
//! That sequence is canonical: two sets contain the same values exactly when their boundaries
//! are equal, so [`Eq`] compares membership. The rendered text also keeps the spelling of each
//! value, so `[3, 3]` and `[3.0, 3.0]` are equal sets with different text.
//!
//! You can construct a basic set from one of the following building blocks. All other sets are
//! union, intersection, and complement of these basic sets.
//!  - [empty()](Set::empty): No value
//!  - [full()](Set::full): Every finite value, `(-Infinity, Infinity)`
//!  - [singleton(v)](Set::singleton): Only the value v exactly
//!  - [new(low, low_open, high, high_open)](Set::new): The interval between two values
//!  - [from_strings(low, high)](Set::from_strings): The closed interval between two literals
//!
//! Values are [`ExtendedDecimal`]s: exact decimals of unbounded precision plus `-Infinity` and `Infinity`. The
//! infinities close the line but are never members themselves.
//!
//! ```
//! use decimal_intervals::{ExtendedDecimal, Set};
//!
//! let above_three = Set::new(3, true, ExtendedDecimal::INFINITY, true);
//! let five_to_seven = Set::new(5, false, 7, false);
//! let predicate = above_three.intersection(&five_to_seven.complement());
//! assert_eq!(predicate.to_string(), "(3, 5), (7, Infinity)");
//! assert_eq!(predicate.validate(), Ok(()));
//! assert_eq!(predicate.to_string().parse::<Set>(), Ok(predicate));
//! ```
//!
//! ## Optional features
//!
//! * `serde`: serialization of a set as its boundary list; deserialization validates it.
//! * `proptest`: Exports a proptest strategy for [`Set`].

#![warn(missing_docs)]

mod boundary;
mod complement;
mod error;
mod parse;
mod render;
mod set;
mod sweep;
mod validate;

pub use boundary::{Boundary, BoundaryKind, Cursor, Profile};
pub use error::{ParseError, ValidationError};
pub use extended_decimal::{BigDecimal, ExtendedDecimal, ParseDecimalError};
#[cfg(any(feature = "proptest", test))]
pub use set::proptest_strategy;
pub use set::Set;
pub use validate::{validate_boundaries, validate_parts};
