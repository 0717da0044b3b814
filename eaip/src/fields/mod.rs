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

//! Parsers of the fixed grammars used in eAIP cells.
//!
//! Each parser takes the text of a cell or paragraph and returns the typed
//! value. Leading and trailing whitespace is ignored.

use crate::Error;

mod angle;
mod circle;
mod coordinate;
mod distance;
mod elevation;
mod frequency;

pub use angle::{parse_bearing, parse_declination, parse_magnetic_variation, parse_slope};
pub use circle::{parse_circle, CIRCLE_PREFIX};
pub use coordinate::{parse_latitude, parse_longitude, parse_point};
pub use distance::{parse_declared_distance, parse_dimensions, parse_distance, parse_range};
pub use elevation::parse_elevation;
pub use frequency::{parse_channel, parse_frequency};

/// Returns the byte index of `needle` in `haystack` ignoring ASCII case.
pub(crate) fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    // ASCII lowercasing keeps the byte offsets
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

/// Strips the `suffix` from `text` ignoring ASCII case.
pub(crate) fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;

    if text.is_char_boundary(split) && text[split..].eq_ignore_ascii_case(suffix) {
        Some(&text[..split])
    } else {
        None
    }
}

/// Strips the `prefix` from `text` ignoring ASCII case.
pub(crate) fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.get(..prefix.len())
        .filter(|start| start.eq_ignore_ascii_case(prefix))
        .map(|_| &text[prefix.len()..])
}

/// Parses a finite decimal number.
pub(crate) fn parse_number(field: &str, text: &str) -> Result<f64, Error> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| Error::invalid(field, text.trim()))
}
