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

use super::strip_prefix_ignore_case;
use crate::measurements::{Elevation, Reference, Uom};
use crate::Error;

/// Parses an elevation such as a vertical limit.
///
/// The text is either `GND`, a flight level like `FL195` or a value followed
/// by an optional unit and reference like `2500 FT ALT`. Only `FT` is a known
/// unit and `ALT` or `AGL` are known references. Other tokens leave the unit
/// or reference unset.
///
/// # Errors
///
/// Returns an error if the value isn't a number.
pub fn parse_elevation(text: &str) -> Result<Elevation, Error> {
    let text = text.trim();
    let invalid = || Error::invalid("elevation", text);

    if text.eq_ignore_ascii_case("GND") {
        return Ok(Elevation::gnd());
    }

    if let Some(level) = strip_prefix_ignore_case(text, "FL") {
        let level = level.trim().parse::<f64>().map_err(|_| invalid())?;
        return Ok(Elevation::fl(level));
    }

    let split = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (value, rest) = text.split_at(split);

    let value = value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(invalid)?;

    let mut tokens = rest.split_whitespace();

    let unit = match tokens.next() {
        Some(t) if t.eq_ignore_ascii_case("FT") => Some(Uom::Feet),
        _ => None,
    };

    let reference = match tokens.next() {
        Some(t) if t.eq_ignore_ascii_case("ALT") => Some(Reference::Msl),
        Some(t) if t.eq_ignore_ascii_case("AGL") => Some(Reference::Gnd),
        _ => None,
    };

    Ok(Elevation {
        value,
        unit,
        reference,
    })
}
