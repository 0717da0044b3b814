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

use super::parse_number;
use crate::measurements::MagneticVariation;
use crate::Error;

/// Parses the magnetic variation with the year of measurement like
/// `4°E / 2020`. Western variation is negative.
pub fn parse_magnetic_variation(text: &str) -> Result<MagneticVariation, Error> {
    let text = text.trim();
    let (degrees, year) = text
        .split_once('/')
        .ok_or_else(|| Error::invalid("magnetic variation", text))?;

    let year = year
        .trim()
        .parse::<u16>()
        .map_err(|_| Error::invalid("magnetic variation", text))?;

    Ok(MagneticVariation {
        degrees: parse_signed_degrees("magnetic variation", degrees)?,
        year,
    })
}

/// Parses the station declination of a navaid like `5°E`. Western
/// declination is negative.
pub fn parse_declination(text: &str) -> Result<f64, Error> {
    parse_signed_degrees("declination", text)
}

/// Parses a true bearing like `127.69°` or `127.69° GEO`.
pub fn parse_bearing(text: &str) -> Result<f64, Error> {
    let text = text.trim();
    let degrees = text.split_once('°').map_or(text, |(deg, _)| deg);

    let bearing = parse_number("bearing", degrees)?;
    if (0.0..=360.0).contains(&bearing) {
        Ok(bearing)
    } else {
        Err(Error::invalid("bearing", text))
    }
}

/// Parses a runway slope in percent like `0.12%`.
pub fn parse_slope(text: &str) -> Result<f64, Error> {
    let text = text.trim();
    parse_number("slope", text.strip_suffix('%').unwrap_or(text))
}

/// Parses degrees with an optional trailing `E` or `W` and degree sign.
fn parse_signed_degrees(field: &str, text: &str) -> Result<f64, Error> {
    let text = text.trim();

    let (degrees, sign) = if let Some(deg) = text.strip_suffix('W') {
        (deg, -1.0)
    } else if let Some(deg) = text.strip_suffix('E') {
        (deg, 1.0)
    } else {
        (text, 1.0)
    };

    let degrees = degrees.trim();
    let degrees = degrees.strip_suffix('°').unwrap_or(degrees);

    Ok(sign * parse_number(field, degrees)?)
}
