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

use crate::{Coordinate, Error};

/// Parses a latitude of the form `DDMMSS[.ss]H` into decimal degrees.
///
/// The hemisphere `H` is either `N` or `S` with south being negative.
///
/// # Errors
///
/// Returns an error tagged by the `key` if the text is shorter than seven
/// characters, if a part isn't numeric or if the hemisphere is neither `N`
/// nor `S`.
pub fn parse_latitude(key: &str, text: &str) -> Result<f64, Error> {
    parse_dms(key, text, 2, ('N', 'S'))
}

/// Parses a longitude of the form `DDDMMSS[.ss]H` into decimal degrees.
///
/// The hemisphere `H` is either `E` or `W` with west being negative.
///
/// # Errors
///
/// Returns an error tagged by the `key` if the text is shorter than eight
/// characters, if a part isn't numeric or if the hemisphere is neither `E`
/// nor `W`.
pub fn parse_longitude(key: &str, text: &str) -> Result<f64, Error> {
    parse_dms(key, text, 3, ('E', 'W'))
}

/// Parses a point of latitude and longitude like `473000N 0190300E`.
///
/// Latitude and longitude are separated by whitespace or follow each other
/// directly as in `465700N0185100E`.
pub fn parse_point(key: &str, text: &str) -> Result<Coordinate, Error> {
    let text = text.trim();

    let (lat, lon) = match text.split_once(char::is_whitespace) {
        Some((lat, lon)) => (lat, lon.trim()),
        None => {
            let hem = text
                .find(|c: char| c == 'N' || c == 'S')
                .ok_or_else(|| Error::invalid(key, text))?;
            // hemisphere letters are single byte
            text.split_at(hem + 1)
        }
    };

    Ok(Coordinate {
        latitude: parse_latitude(key, lat)?,
        longitude: parse_longitude(key, lon)?,
    })
}

fn parse_dms(
    key: &str,
    text: &str,
    deg_len: usize,
    (positive, negative): (char, char),
) -> Result<f64, Error> {
    let text = text.trim();
    let invalid = || Error::invalid(key, text);

    let mut chars = text.chars();
    let hem = chars.next_back().ok_or_else(invalid)?;
    let digits = chars.as_str();

    // degrees, minutes and whole seconds are mandatory digits
    let whole_len = deg_len + 4;
    if digits.len() < whole_len
        || !digits.as_bytes()[..whole_len].iter().all(u8::is_ascii_digit)
        || (!digits[whole_len..].is_empty() && !digits[whole_len..].starts_with('.'))
    {
        return Err(invalid());
    }

    let deg = digits[..deg_len].parse::<f64>().map_err(|_| invalid())?;
    let min = digits[deg_len..deg_len + 2]
        .parse::<f64>()
        .map_err(|_| invalid())?;
    let sec = digits[deg_len + 2..]
        .parse::<f64>()
        .map_err(|_| invalid())?;

    let decimal = deg + min / 60.0 + sec / 3600.0;

    match hem {
        h if h == positive => Ok(decimal),
        h if h == negative => Ok(-decimal),
        _ => Err(invalid()),
    }
}
