// SPDX-License-Identifier: MPL-2.0

//! Decimal numbers extended with the two infinity sentinels.
//!
//! [`ExtendedDecimal`] is either a finite [`BigDecimal`] or one of `-Infinity` / `Infinity`, the
//! points closing the extended real line. The type is totally ordered:
//!
//! ```text
//! -Infinity < every finite value < Infinity
//! ```
//!
//! Finite values have unbounded precision and compare exactly, so `3` and `3.0` are equal even
//! though they render differently, while `0.1` and `0.1000000000000000000000000000001` are not.
//! Rendering keeps the scale of the literal a value was parsed from (`2.0` stays `2.0`) and never
//! switches to scientific notation.
//!
//! Parsing accepts an optional sign, digits with an optional fraction, and an optional exponent
//! (`1.5e3`), as well as the infinity tokens `inf` and `infinity` in any case with an optional
//! sign. Every spelling of an infinity parses to the same sentinel.
//!
//! ## Optional features
//!
//! * `serde`: (de)serialization through the canonical text form.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use thiserror::Error;

/// A finite decimal, or one of the two infinities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtendedDecimal {
    /// Smaller than every other value.
    NegativeInfinity,
    /// A finite decimal value.
    Finite(BigDecimal),
    /// Greater than every other value.
    PositiveInfinity,
}

impl ExtendedDecimal {
    /// `-Infinity`.
    pub const NEG_INFINITY: Self = Self::NegativeInfinity;
    /// `Infinity`.
    pub const INFINITY: Self = Self::PositiveInfinity;

    /// The finite value `digits * 10^-scale`, so `from_scaled(25, 1)` is `2.5`.
    pub fn from_scaled(digits: i64, scale: i64) -> Self {
        Self::Finite(BigDecimal::new(BigInt::from(digits), scale))
    }

    /// Whether this is one of the two sentinels.
    pub fn is_infinite(&self) -> bool {
        !matches!(self, Self::Finite(_))
    }

    /// Whether this is a finite value.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Whether the value is strictly below zero. `-Infinity` is negative, a negative zero is not.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::NegativeInfinity => true,
            Self::Finite(d) => d.sign() == Sign::Minus,
            Self::PositiveInfinity => false,
        }
    }

    /// Whether this is `-Infinity`.
    pub fn is_negative_infinity(&self) -> bool {
        matches!(self, Self::NegativeInfinity)
    }

    /// Whether this is `Infinity`.
    pub fn is_positive_infinity(&self) -> bool {
        matches!(self, Self::PositiveInfinity)
    }

    /// The finite value, if any.
    pub fn as_finite(&self) -> Option<&BigDecimal> {
        match self {
            Self::Finite(d) => Some(d),
            _ => None,
        }
    }

    /// Number of digits after the decimal point in the rendered form, negative when the value
    /// was written with a positive exponent. `None` for the infinities.
    pub fn scale(&self) -> Option<i64> {
        self.as_finite().map(|d| d.as_bigint_and_exponent().1)
    }
}

/// Error creating an [`ExtendedDecimal`] from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDecimalError {
    /// The literal was empty.
    #[error("empty decimal literal")]
    Empty,
    /// NaN literals are recognised but have no place on the extended real line.
    #[error("'{literal}' is not a number")]
    NotANumber {
        /// Literal that was being parsed.
        literal: String,
    },
    /// The literal is not a decimal number.
    #[error("cannot parse '{literal}' as a decimal: {parse_error}")]
    Invalid {
        /// Literal that was being parsed.
        literal: String,
        /// What is wrong with it.
        parse_error: String,
    },
}

/// Digits (mantissa without the point) and scale of an unsigned decimal literal.
fn split_literal(magnitude: &str) -> Result<(String, i64), &'static str> {
    let (mantissa, exponent) = match magnitude.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&magnitude[..idx], Some(&magnitude[idx + 1..])),
        None => (magnitude, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int.is_empty() && frac.is_empty() {
        return Err("missing digits");
    }
    if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err("unexpected character");
    }

    let exponent = match exponent {
        None => 0,
        Some(text) => {
            let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err("malformed exponent");
            }
            text.parse::<i64>().map_err(|_| "exponent out of range")?
        }
    };
    let scale = i64::try_from(frac.len())
        .ok()
        .and_then(|n| n.checked_sub(exponent))
        .ok_or("exponent out of range")?;
    Ok((format!("{int}{frac}"), scale))
}

impl FromStr for ExtendedDecimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let (negative, magnitude) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };
        if magnitude.eq_ignore_ascii_case("inf") || magnitude.eq_ignore_ascii_case("infinity") {
            return Ok(if negative {
                Self::NegativeInfinity
            } else {
                Self::PositiveInfinity
            });
        }
        if magnitude.eq_ignore_ascii_case("nan") || magnitude.eq_ignore_ascii_case("snan") {
            return Err(ParseDecimalError::NotANumber {
                literal: s.to_string(),
            });
        }

        let invalid = |parse_error: String| ParseDecimalError::Invalid {
            literal: s.to_string(),
            parse_error,
        };
        let (digits, scale) = split_literal(magnitude).map_err(|e| invalid(e.to_string()))?;
        let mut digits = BigInt::from_str(&digits).map_err(|e| invalid(e.to_string()))?;
        if negative {
            digits = -digits;
        }
        Ok(Self::Finite(BigDecimal::new(digits, scale)))
    }
}

/// Plain notation for a finite value, padding with zeros instead of using an exponent.
fn write_plain(f: &mut Formatter<'_>, d: &BigDecimal) -> fmt::Result {
    let (digits, scale) = d.as_bigint_and_exponent();
    if digits.sign() == Sign::Minus {
        f.write_str("-")?;
    }
    let digits = digits.magnitude().to_string();
    if scale <= 0 {
        f.write_str(&digits)?;
        if digits != "0" {
            for _ in 0..scale.unsigned_abs() {
                f.write_str("0")?;
            }
        }
        return Ok(());
    }

    let scale = usize::try_from(scale).map_err(|_| fmt::Error)?;
    if digits.len() > scale {
        let (int, frac) = digits.split_at(digits.len() - scale);
        write!(f, "{int}.{frac}")
    } else {
        write!(f, "0.{digits:0>scale$}")
    }
}

impl Display for ExtendedDecimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeInfinity => write!(f, "-Infinity"),
            Self::Finite(d) => write_plain(f, d),
            Self::PositiveInfinity => write!(f, "Infinity"),
        }
    }
}

impl From<BigDecimal> for ExtendedDecimal {
    fn from(d: BigDecimal) -> Self {
        Self::Finite(d)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ExtendedDecimal {
                fn from(v: $t) -> Self {
                    Self::Finite(BigDecimal::from(v))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

// SERIALIZATION ###############################################################

#[cfg(feature = "serde")]
impl serde::Serialize for ExtendedDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ExtendedDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}
