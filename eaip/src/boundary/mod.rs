// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Lateral boundaries from their textual description.
//!
//! A boundary is either a circle like `A circle radius 3 KM centered on
//! 473000N 0190300E` or a ring of points separated by `-`:
//!
//! ```text
//! 480000N 0170000E - 481000N 0180000E along the state border - 470000N 0180000E
//! ```
//!
//! A point followed by `along the state border` is connected to the next
//! point by the section of the state border between them. The border is
//! supplied by the caller as a polyline.

use crate::fields::{find_ignore_case, parse_circle, CIRCLE_PREFIX};
use crate::{Boundary, Coordinate, Error, Warning};

mod border;
mod ring;

pub use border::splice_border_section;
pub use ring::{parse_ring, BORDER_MARKER};

/// Parses a circle or a ring of points.
///
/// Errors and warnings are tagged by the `key` of the record.
pub fn parse_boundary(
    key: &str,
    text: &str,
    border: Option<&[Coordinate]>,
    warnings: &mut Vec<Warning>,
) -> Result<Boundary, Error> {
    if find_ignore_case(text, CIRCLE_PREFIX).is_some() {
        parse_circle(key, text)
    } else {
        parse_ring(key, text, border, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_circle() {
        let mut warnings = Vec::new();
        let boundary = parse_boundary(
            "LHP1",
            "A circle radius 3 KM centered on 473000N 0190300E",
            None,
            &mut warnings,
        );

        assert!(matches!(boundary, Ok(Boundary::Circle { .. })));
        assert!(warnings.is_empty());
    }

    #[test]
    fn dispatches_ring() {
        let mut warnings = Vec::new();
        let boundary = parse_boundary(
            "LHR1",
            "473000N 0190000E - 474000N 0190000E - 474000N 0191000E",
            None,
            &mut warnings,
        );

        assert!(matches!(boundary, Ok(Boundary::Ring(points)) if points.len() == 3));
    }
}
