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
use crate::measurements::Frequency;
use crate::Error;

/// Parses a frequency like `118.100 MHz`.
///
/// The units `GHz`, `MHz` and `kHz` are scaled to Hz. A number without unit
/// is taken as Hz.
pub fn parse_frequency(text: &str) -> Result<Frequency, Error> {
    let text = text.trim();

    if let Some(ghz) = strip_suffix_ignore_case(text, "GHz") {
        Ok(Frequency::from_ghz(parse_number("frequency", ghz)?))
    } else if let Some(mhz) = strip_suffix_ignore_case(text, "MHz") {
        Ok(Frequency::from_mhz(parse_number("frequency", mhz)?))
    } else if let Some(khz) = strip_suffix_ignore_case(text, "kHz") {
        Ok(Frequency::from_khz(parse_number("frequency", khz)?))
    } else {
        Ok(Frequency::from_hz(parse_number("frequency", text)?))
    }
}

/// Parses a DME channel like `CH 92X` into its designation `92X`.
pub fn parse_channel(text: &str) -> Result<String, Error> {
    let text = text.trim();
    let invalid = || Error::invalid("channel", text);

    let channel = text
        .get(..2)
        .filter(|prefix| prefix.eq_ignore_ascii_case("CH"))
        .map(|_| text[2..].trim())
        .ok_or_else(invalid)?;

    channel
        .strip_suffix(|c: char| c == 'X' || c == 'Y')
        .filter(|number| !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()))
        .map(|_| channel.to_string())
        .ok_or_else(invalid)
}
