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

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Destination, Geodesic};

use super::Coordinate;
use crate::measurements::Distance;

/// Lateral limits of an airspace.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Boundary {
    /// A closed ring of at least three points. The closing segment from the
    /// last back to the first point is implicit.
    Ring(Vec<Coordinate>),
    /// A circle around the center.
    Circle { center: Coordinate, radius: Distance },
    /// Several boundaries that together enclose one airspace.
    Compound(Vec<Boundary>),
}

impl Boundary {
    /// Returns the area enclosed by this boundary.
    ///
    /// Circles are interpolated with `circle_points` points along the
    /// geodesic destinations from their center.
    pub fn to_polygon(&self, circle_points: usize) -> geo::MultiPolygon<f64> {
        let mut polygons = Vec::new();
        self.collect_polygons(circle_points, &mut polygons);
        geo::MultiPolygon::new(polygons)
    }

    fn collect_polygons(&self, circle_points: usize, polygons: &mut Vec<geo::Polygon<f64>>) {
        match self {
            Self::Ring(points) => {
                let coords: Vec<geo::Coord<f64>> = points.iter().copied().map(Into::into).collect();
                // the polygon closes the exterior ring
                polygons.push(geo::Polygon::new(geo::LineString::from(coords), vec![]));
            }
            Self::Circle { center, radius } => {
                polygons.push(circle_polygon(*center, radius.to_meters(), circle_points));
            }
            Self::Compound(boundaries) => {
                boundaries
                    .iter()
                    .for_each(|b| b.collect_polygons(circle_points, polygons));
            }
        }
    }
}

fn circle_polygon(center: Coordinate, radius_m: f64, num_points: usize) -> geo::Polygon<f64> {
    let num_points = num_points.max(3);
    let center = geo::Point::from(center);
    let mut coords = Vec::with_capacity(num_points + 1);

    for i in 0..num_points {
        let bearing = (i as f64 * 2.0 * PI / num_points as f64).to_degrees();
        let point = Geodesic.destination(center, bearing, radius_m);
        coords.push(geo::Coord {
            x: point.x(),
            y: point.y(),
        });
    }

    if let Some(first) = coords.first() {
        coords.push(*first);
    }

    geo::Polygon::new(geo::LineString::from(coords), vec![])
}
