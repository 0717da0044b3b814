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

//! Measured values as published in the eAIP.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod constants;
mod distance;
mod elevation;
mod frequency;
mod magnetic_variation;

pub use distance::Distance;
pub use elevation::Elevation;
pub use frequency::Frequency;
pub use magnetic_variation::MagneticVariation;

/// Unit of measure of a distance or an elevation.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Uom {
    Feet,
    Meters,
    FlightLevel,
    NauticalMiles,
}

impl Uom {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Feet => "FT",
            Self::Meters => "M",
            Self::FlightLevel => "FL",
            Self::NauticalMiles => "NM",
        }
    }
}

/// Vertical reference of an elevation.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reference {
    /// Mean sea level.
    Msl,
    /// Ground or water surface.
    Gnd,
}
