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

use super::{constants, Uom};

/// Horizontal distance, e.g. a runway length or a circle radius.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    pub value: f64,
    pub unit: Uom,
}

impl Distance {
    /// Creates a distance in meters.
    pub fn m(value: f64) -> Self {
        Self {
            value,
            unit: Uom::Meters,
        }
    }

    /// Creates a distance in nautical miles.
    pub fn nm(value: f64) -> Self {
        Self {
            value,
            unit: Uom::NauticalMiles,
        }
    }

    /// Creates a distance in feet.
    pub fn ft(value: f64) -> Self {
        Self {
            value,
            unit: Uom::Feet,
        }
    }

    /// Returns the distance in meters.
    pub fn to_meters(&self) -> f64 {
        match self.unit {
            Uom::Meters => self.value,
            Uom::Feet => self.value * constants::FEET_IN_METER,
            Uom::FlightLevel => {
                self.value * constants::FEET_IN_FLIGHT_LEVEL * constants::FEET_IN_METER
            }
            Uom::NauticalMiles => self.value * constants::NAUTICAL_MILE_IN_METER,
        }
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
