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

use crate::Coordinate;

/// Returns the section of the `border` from `start` to `end`.
///
/// Both points are snapped to the border vertex with the least planar
/// distance. If the start vertex `i` precedes the end vertex `j` the section
/// runs forward over the vertices `i..j`, otherwise it runs backward from `i`
/// down to `j + 1`. The end vertex is excluded since the caller continues
/// with the explicit end point.
pub fn splice_border_section(
    start: &Coordinate,
    end: &Coordinate,
    border: &[Coordinate],
) -> Vec<Coordinate> {
    let (Some(i), Some(j)) = (nearest_vertex(start, border), nearest_vertex(end, border)) else {
        return Vec::new();
    };

    if i <= j {
        border[i..j].to_vec()
    } else {
        border[j + 1..=i].iter().rev().copied().collect()
    }
}

/// Returns the index of the vertex nearest to the `point`. The first one
/// wins if several are equally near.
fn nearest_vertex(point: &Coordinate, border: &[Coordinate]) -> Option<usize> {
    let mut nearest: Option<(usize, f64)> = None;

    for (i, vertex) in border.iter().enumerate() {
        let dist = point.planar_dist(vertex);
        match nearest {
            Some((_, min)) if dist >= min => {}
            _ => nearest = Some((i, dist)),
        }
    }

    nearest.map(|(i, _)| i)
}
