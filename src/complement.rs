// SPDX-License-Identifier: MPL-2.0

//! Complement on the extended real line.

use smallvec::SmallVec;

use crate::boundary::Boundary;
use crate::set::Set;

impl Set {
    /// Returns the complement, which contains every finite value not included in `self`.
    ///
    /// Bounds swap sides and flip between open and closed, points stay where they are. The
    /// regions before the first and after the last event were outside and become inside, so
    /// they gain a bound at the matching infinity, unless the set already reached it.
    pub fn complement(&self) -> Self {
        // Complement of ∅ is the whole line
        if self.boundaries.is_empty() {
            return Self::full();
        }

        let last = self.boundaries.len() - 1;
        let mut boundaries = SmallVec::with_capacity(self.boundaries.len() + 2);
        for (idx, boundary) in self.boundaries.iter().enumerate() {
            match boundary {
                // A lone point becomes (-∞, v) ∪ (v, ∞) through both arms here.
                Boundary::Point(value) => {
                    if idx == 0 {
                        boundaries.push(Boundary::open_lower_at_negative_infinity());
                    }
                    boundaries.push(Boundary::Point(value.clone()));
                    if idx == last {
                        boundaries.push(Boundary::open_upper_at_positive_infinity());
                    }
                }
                Boundary::Lower { value, open } => {
                    if idx == 0 {
                        if value.is_negative_infinity() {
                            continue;
                        }
                        boundaries.push(Boundary::open_lower_at_negative_infinity());
                    }
                    boundaries.push(Boundary::Upper {
                        value: value.clone(),
                        open: !open,
                    });
                }
                Boundary::Upper { value, open } => {
                    if idx == last && value.is_positive_infinity() {
                        continue;
                    }
                    boundaries.push(Boundary::Lower {
                        value: value.clone(),
                        open: !open,
                    });
                    if idx == last {
                        boundaries.push(Boundary::open_upper_at_positive_infinity());
                    }
                }
            }
        }

        log::debug!(
            "complement: {} boundaries -> {}",
            self.boundaries.len(),
            boundaries.len()
        );
        Self { boundaries }
    }
}
