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

use super::{Reference, Uom};

/// Vertical position such as an airspace limit or a field elevation.
///
/// The unit and the reference are unset if the published text uses a token
/// that isn't understood.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Elevation {
    pub value: f64,
    pub unit: Option<Uom>,
    pub reference: Option<Reference>,
}

impl Elevation {
    /// The ground or water surface.
    pub fn gnd() -> Self {
        Self {
            value: 0.0,
            unit: Some(Uom::Feet),
            reference: Some(Reference::Gnd),
        }
    }

    /// A flight level, which is always referenced to mean sea level.
    pub fn fl(value: f64) -> Self {
        Self {
            value,
            unit: Some(Uom::FlightLevel),
            reference: Some(Reference::Msl),
        }
    }

    /// Feet above mean sea level.
    pub fn msl(value: f64) -> Self {
        Self {
            value,
            unit: Some(Uom::Feet),
            reference: Some(Reference::Msl),
        }
    }

    /// Returns the elevation with `reference` if it has none.
    pub fn or_reference(self, reference: Reference) -> Self {
        Self {
            reference: self.reference.or(Some(reference)),
            ..self
        }
    }
}

impl Display for Elevation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match (self.unit, self.reference) {
            (_, Some(Reference::Gnd)) if self.value == 0.0 => write!(f, "GND"),
            (Some(Uom::FlightLevel), _) => write!(f, "FL{}", self.value),
            (unit, reference) => {
                write!(f, "{}", self.value)?;
                if let Some(unit) = unit {
                    write!(f, " {}", unit.symbol())?;
                }
                match reference {
                    Some(Reference::Msl) => write!(f, " ALT"),
                    Some(Reference::Gnd) => write!(f, " AGL"),
                    None => Ok(()),
                }
            }
        }
    }
}
