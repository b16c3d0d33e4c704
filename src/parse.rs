// SPDX-License-Identifier: MPL-2.0

//! Reading sets back from interval notation.
//!
//! The accepted text is what [`Display`](std::fmt::Display) produces: a comma separated list
//! of intervals such as `(-Infinity, 0], [2, 3)`. Each interval goes through [`Set::new`] and
//! the results are unioned, so `[0, 1), (1, 2]` reads back as `[0, 2]` with 1 excluded, and
//! every rendered set parses to itself.

use std::str::FromStr;

use extended_decimal::ExtendedDecimal;

use crate::error::ParseError;
use crate::set::Set;

struct Scanner<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    fn at_end(&self) -> bool {
        self.position == self.text.len()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.position += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn malformed(&self, expected: &'static str) -> ParseError {
        ParseError::Malformed {
            position: self.position,
            expected,
        }
    }

    /// Consume a literal up to and including the first of `stops`.
    fn literal(
        &mut self,
        stops: &[char],
        expected: &'static str,
    ) -> Result<(ExtendedDecimal, char), ParseError> {
        let rest = self.rest();
        let Some(end) = rest.find(stops) else {
            return Err(ParseError::Malformed {
                position: self.text.len(),
                expected,
            });
        };
        let value = rest[..end].trim().parse()?;
        let stop = rest[end..].chars().next().unwrap_or_default();
        self.position += end + stop.len_utf8();
        Ok((value, stop))
    }

    fn interval(&mut self) -> Result<Set, ParseError> {
        let low_open = if self.eat('[') {
            false
        } else if self.eat('(') {
            true
        } else {
            return Err(self.malformed("'[' or '('"));
        };
        let (low, _) = self.literal(&[','], "','")?;
        let (high, close) = self.literal(&[']', ')'], "']' or ')'")?;
        Ok(Set::new(low, low_open, high, close == ')'))
    }
}

impl FromStr for Set {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scanner = Scanner {
            text: s,
            position: 0,
        };
        let mut set = Set::empty();
        scanner.skip_whitespace();
        if scanner.at_end() {
            return Ok(set);
        }
        loop {
            set = set.union(&scanner.interval()?);
            scanner.skip_whitespace();
            if scanner.at_end() {
                return Ok(set);
            }
            if !scanner.eat(',') {
                return Err(scanner.malformed("','"));
            }
            scanner.skip_whitespace();
        }
    }
}
