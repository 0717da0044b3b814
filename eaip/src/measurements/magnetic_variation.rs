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

use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magnetic variation as measured in a given year.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagneticVariation {
    /// The variation in degrees with west being negative.
    pub degrees: f64,
    /// The year of the measurement.
    pub year: u16,
}

impl Display for MagneticVariation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let hem = if self.degrees < 0.0 { 'W' } else { 'E' };
        write!(f, "{}°{} ({})", self.degrees.abs(), hem, self.year)
    }
}
