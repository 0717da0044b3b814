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

use super::{parse_number, strip_suffix_ignore_case};
use crate::measurements::Distance;
use crate::Error;

/// Parses a distance in kilometers like `3 KM` into meters.
///
/// Any other unit yields `None`.
///
/// # Errors
///
/// Returns an error if the value in front of `KM` isn't a number.
pub fn parse_distance(text: &str) -> Result<Option<Distance>, Error> {
    match strip_suffix_ignore_case(text.trim(), "KM") {
        Some(km) => Ok(Some(Distance::m(parse_number("distance", km)? * 1000.0))),
        None => Ok(None),
    }
}

/// Parses a range like a navaid coverage, given in `NM` or `KM`.
pub fn parse_range(text: &str) -> Result<Option<Distance>, Error> {
    match strip_suffix_ignore_case(text.trim(), "NM") {
        Some(nm) => Ok(Some(Distance::nm(parse_number("range", nm)?))),
        None => parse_distance(text),
    }
}

/// Parses runway dimensions like `3010 x 45` into length and width in meters.
pub fn parse_dimensions(text: &str) -> Result<(Distance, Distance), Error> {
    let text = text.trim();
    let (length, width) = text
        .split_once(|c: char| c == 'x' || c == 'X' || c == '×')
        .ok_or_else(|| Error::invalid("dimensions", text))?;

    let width = width.trim();
    let width = strip_suffix_ignore_case(width, "M").unwrap_or(width);

    Ok((
        Distance::m(parse_number("dimensions", length)?),
        Distance::m(parse_number("dimensions", width)?),
    ))
}

/// Parses a declared distance in meters. `NIL` means the distance isn't
/// declared.
pub fn parse_declared_distance(text: &str) -> Result<Option<Distance>, Error> {
    let text = text.trim();

    if text.is_empty() || text.eq_ignore_ascii_case("NIL") {
        return Ok(None);
    }

    let value = strip_suffix_ignore_case(text, "M").unwrap_or(text);
    Ok(Some(Distance::m(parse_number("declared distance", value)?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kilometers() {
        assert_eq!(parse_distance("3KM"), Ok(Some(Distance::m(3000.0))));
        assert_eq!(parse_distance(" 5.5 km "), Ok(Some(Distance::m(5500.0))));
    }

    #[test]
    fn leaves_other_units_unset() {
        assert_eq!(parse_distance("3 NM"), Ok(None));
        assert_eq!(parse_distance("3000"), Ok(None));
    }

    #[test]
    fn rejects_invalid_kilometers() {
        assert!(parse_distance("three KM").is_err());
    }

    #[test]
    fn parses_range() {
        assert_eq!(parse_range("25 NM"), Ok(Some(Distance::nm(25.0))));
        assert_eq!(parse_range("50 KM"), Ok(Some(Distance::m(50000.0))));
        assert_eq!(parse_range("unlimited"), Ok(None));
    }

    #[test]
    fn parses_dimensions() {
        assert_eq!(
            parse_dimensions("3010 x 45"),
            Ok((Distance::m(3010.0), Distance::m(45.0)))
        );
        assert_eq!(
            parse_dimensions("3707 X 45 M"),
            Ok((Distance::m(3707.0), Distance::m(45.0)))
        );
        assert!(parse_dimensions("3010").is_err());
    }

    #[test]
    fn parses_declared_distance() {
        assert_eq!(parse_declared_distance("3010"), Ok(Some(Distance::m(3010.0))));
        assert_eq!(parse_declared_distance("2800 M"), Ok(Some(Distance::m(2800.0))));
        assert_eq!(parse_declared_distance("NIL"), Ok(None));
        assert!(parse_declared_distance("n/a").is_err());
    }
}
