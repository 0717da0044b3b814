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

use super::constants;

/// Radio frequency stored in Hz.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frequency {
    hz: f64,
}

impl Frequency {
    pub fn from_hz(hz: f64) -> Self {
        Self { hz }
    }

    pub fn from_khz(khz: f64) -> Self {
        Self {
            hz: khz * constants::HZ_IN_KHZ,
        }
    }

    pub fn from_mhz(mhz: f64) -> Self {
        Self {
            hz: mhz * constants::HZ_IN_MHZ,
        }
    }

    pub fn from_ghz(ghz: f64) -> Self {
        Self {
            hz: ghz * constants::HZ_IN_GHZ,
        }
    }

    pub fn hz(&self) -> f64 {
        self.hz
    }

    pub fn khz(&self) -> f64 {
        self.hz / constants::HZ_IN_KHZ
    }

    pub fn mhz(&self) -> f64 {
        self.hz / constants::HZ_IN_MHZ
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.hz >= constants::HZ_IN_MHZ {
            write!(f, "{:.3} MHz", self.mhz())
        } else if self.hz >= constants::HZ_IN_KHZ {
            write!(f, "{} kHz", self.khz())
        } else {
            write!(f, "{} Hz", self.hz)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_in_band_unit() {
        assert_eq!(Frequency::from_mhz(118.1).to_string(), "118.100 MHz");
        assert_eq!(Frequency::from_khz(335.0).to_string(), "335 kHz");
    }
}
