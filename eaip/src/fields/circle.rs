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

use super::{find_ignore_case, parse_distance, parse_point};
use crate::{Boundary, Error};

/// Phrase that starts a circle description.
pub const CIRCLE_PREFIX: &str = "A circle radius";

const CIRCLE_INFIXES: [&str; 2] = ["centered on", "centred on"];

/// Parses a circle like `A circle radius 3 KM centered on 473000N 0190300E`.
///
/// The radius between the prefix and `centered on` (or `centred on`) must be
/// given in kilometers. The text after the infix is the center point.
///
/// # Errors
///
/// Returns an error tagged by the `key` if the prefix or infix is missing or
/// if the radius isn't a positive distance in kilometers.
pub fn parse_circle(key: &str, text: &str) -> Result<Boundary, Error> {
    let start = find_ignore_case(text, CIRCLE_PREFIX).ok_or_else(|| Error::MissingAnchor {
        field: key.to_string(),
        anchor: CIRCLE_PREFIX,
    })? + CIRCLE_PREFIX.len();
    let rest = &text[start..];

    let (infix_start, infix) = CIRCLE_INFIXES
        .iter()
        .find_map(|infix| find_ignore_case(rest, infix).map(|i| (i, infix)))
        .ok_or_else(|| Error::MissingAnchor {
            field: key.to_string(),
            anchor: CIRCLE_INFIXES[0],
        })?;

    let radius_text = rest[..infix_start].trim();
    let radius = parse_distance(radius_text)?
        .filter(|radius| radius.value > 0.0)
        .ok_or_else(|| Error::invalid(key, radius_text))?;

    let center = parse_point(key, &rest[infix_start + infix.len()..])?;

    Ok(Boundary::Circle { center, radius })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::Distance;

    #[test]
    fn parses_circle() {
        let circle = parse_circle("LHP1", "A circle radius3KM centered on 465700N0185100E");

        match circle {
            Ok(Boundary::Circle { center, radius }) => {
                assert_eq!(radius, Distance::m(3000.0));
                assert!((center.latitude - 46.95).abs() < 1e-9);
                assert!((center.longitude - 18.85).abs() < 1e-9);
            }
            other => panic!("should be a circle but is {other:?}"),
        }
    }

    #[test]
    fn parses_british_spelling() {
        let circle = parse_circle("LHR1", "A circle radius 5.5 KM centred on 473000N 0190300E");
        assert!(matches!(
            circle,
            Ok(Boundary::Circle { radius, .. }) if radius == Distance::m(5500.0)
        ));
    }

    #[test]
    fn fails_without_infix() {
        assert_eq!(
            parse_circle("LHP2", "A circle radius 3 KM around 473000N 0190300E"),
            Err(Error::MissingAnchor {
                field: "LHP2".to_string(),
                anchor: "centered on",
            })
        );
    }

    #[test]
    fn fails_without_prefix() {
        assert!(matches!(
            parse_circle("LHP2", "473000N 0190300E - 474000N 0190300E"),
            Err(Error::MissingAnchor { anchor: CIRCLE_PREFIX, .. })
        ));
    }

    #[test]
    fn fails_without_kilometers() {
        assert_eq!(
            parse_circle("LHP3", "A circle radius 2 NM centered on 473000N 0190300E"),
            Err(Error::invalid("LHP3", "2 NM"))
        );
        assert!(parse_circle("LHP3", "A circle radius 0 KM centered on 473000N 0190300E").is_err());
    }
}
