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

use log::{debug, warn};

use super::splice_border_section;
use crate::fields::{find_ignore_case, parse_point};
use crate::{Boundary, Coordinate, Error, Warning};

/// Marks that the boundary follows the state border to the next point.
pub const BORDER_MARKER: &str = "along the state border";

/// A point of the ring as published.
struct RingPoint {
    coordinate: Coordinate,
    along_border: bool,
}

/// Parses a ring of points separated by `-`.
///
/// Points carrying the [`BORDER_MARKER`] are connected to the next point
/// along the `border`. A marker on the last point connects it back to the
/// first point. If no border is available, a warning is added and the
/// points are connected directly.
///
/// # Errors
///
/// Returns an error if a point can't be parsed or if the ring has less than
/// three points.
pub fn parse_ring(
    key: &str,
    text: &str,
    border: Option<&[Coordinate]>,
    warnings: &mut Vec<Warning>,
) -> Result<Boundary, Error> {
    let mut points: Vec<RingPoint> = Vec::new();

    for token in text.split('-').map(str::trim).filter(|t| !t.is_empty()) {
        let Some(marker) = find_ignore_case(token, BORDER_MARKER) else {
            points.push(RingPoint {
                coordinate: parse_point(key, token)?,
                along_border: false,
            });
            continue;
        };

        let point = token[..marker].trim();
        if point.is_empty() {
            // the marker refers to the preceding point
            match points.last_mut() {
                Some(last) => last.along_border = true,
                None => debug!("{key}: ignoring border marker without preceding point"),
            }
        } else {
            points.push(RingPoint {
                coordinate: parse_point(key, point)?,
                along_border: true,
            });
        }
    }

    let mut ring = Vec::with_capacity(points.len());

    for (i, point) in points.iter().enumerate() {
        ring.push(point.coordinate);

        if !point.along_border {
            continue;
        }

        match border {
            Some(border) => {
                let next = points.get(i + 1).unwrap_or(&points[0]);
                ring.extend(splice_border_section(&point.coordinate, &next.coordinate, border));
            }
            None => {
                warn!("{key}: border segment omitted since no border is available");
                warnings.push(Warning::BorderUnavailable {
                    key: key.to_string(),
                });
            }
        }
    }

    if ring.len() < 3 {
        return Err(Error::TooFewPoints {
            field: key.to_string(),
            count: ring.len(),
        });
    }

    Ok(Boundary::Ring(ring))
}
