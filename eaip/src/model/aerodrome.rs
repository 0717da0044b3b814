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

use super::{Airspace, Navaid, Runway};
use crate::measurements::{Elevation, Frequency, MagneticVariation};
use crate::{Coordinate, Error};

/// Air traffic service provided on a frequency.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Service {
    /// Aerodrome flight information service
    Afis,
    /// Aerodrome control tower
    Tower,
    /// Approach control
    Approach,
    /// Ground control
    Ground,
    /// Automatic terminal information service
    Atis,
    /// Any other service as published.
    Other(String),
}

impl Service {
    /// Returns the service of a label like `TWR` or `ATIS`.
    pub fn from_label(label: &str) -> Self {
        label
            .split(|c: char| !c.is_ascii_alphanumeric())
            .find_map(|word| match word.to_ascii_uppercase().as_str() {
                "AFIS" => Some(Self::Afis),
                "TWR" => Some(Self::Tower),
                "APP" => Some(Self::Approach),
                "GND" => Some(Self::Ground),
                "ATIS" => Some(Self::Atis),
                _ => None,
            })
            .unwrap_or_else(|| Self::Other(label.trim().to_string()))
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Service::Afis => write!(f, "AFIS"),
            Service::Tower => write!(f, "TWR"),
            Service::Approach => write!(f, "APP"),
            Service::Ground => write!(f, "GND"),
            Service::Atis => write!(f, "ATIS"),
            Service::Other(label) => write!(f, "{label}"),
        }
    }
}

/// Frequency of a service at an aerodrome.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FacilityFrequency {
    pub service: Service,
    pub call_sign: Option<String>,
    pub frequency: Frequency,
}

/// Aerodrome with its runways, frequencies, navaids and airspaces.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aerodrome {
    pub icao: String,
    pub iata: Option<String>,
    pub name: String,
    /// The aerodrome reference point.
    pub arp: Coordinate,
    pub elevation: Elevation,
    pub magnetic_variation: Option<MagneticVariation>,
    pub frequencies: Vec<FacilityFrequency>,
    pub airspaces: Vec<Airspace>,
    pub runways: Vec<Runway>,
    pub navaids: Vec<Navaid>,
    pub remarks: Option<String>,
}

impl Display for Aerodrome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} ({})", self.icao, self.name, self.elevation)
    }
}

/// Builder of an [`Aerodrome`] while its AD 2 entry is parsed.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AerodromeBuilder {
    icao: Option<String>,
    iata: Option<String>,
    name: Option<String>,
    arp: Option<Coordinate>,
    elevation: Option<Elevation>,
    magnetic_variation: Option<MagneticVariation>,
    frequencies: Vec<FacilityFrequency>,
    airspaces: Vec<Airspace>,
    runways: Vec<Runway>,
    navaids: Vec<Navaid>,
    remarks: Option<String>,
}

impl AerodromeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the aerodrome.
    ///
    /// # Errors
    ///
    /// Returns an error if the ICAO code, the name, the reference point or
    /// the elevation is missing.
    pub fn build(&self) -> std::result::Result<Aerodrome, Error> {
        Ok(Aerodrome {
            icao: self.icao.clone().ok_or(Error::MissingField("ICAO code"))?,
            iata: self.iata.clone(),
            name: self.name.clone().ok_or(Error::MissingField("name"))?,
            arp: self.arp.ok_or(Error::MissingField("ARP"))?,
            elevation: self.elevation.ok_or(Error::MissingField("elevation"))?,
            magnetic_variation: self.magnetic_variation,
            frequencies: self.frequencies.clone(),
            airspaces: self.airspaces.clone(),
            runways: self.runways.clone(),
            navaids: self.navaids.clone(),
            remarks: self.remarks.clone(),
        })
    }

    pub fn icao(&mut self, icao: String) -> &mut Self {
        self.icao = Some(icao);
        self
    }

    pub fn iata(&mut self, iata: Option<String>) -> &mut Self {
        self.iata = iata;
        self
    }

    pub fn name(&mut self, name: String) -> &mut Self {
        self.name = Some(name);
        self
    }

    pub fn arp(&mut self, arp: Coordinate) -> &mut Self {
        self.arp = Some(arp);
        self
    }

    pub fn elevation(&mut self, elevation: Elevation) -> &mut Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn magnetic_variation(&mut self, variation: Option<MagneticVariation>) -> &mut Self {
        self.magnetic_variation = variation;
        self
    }

    pub fn remarks(&mut self, remarks: Option<String>) -> &mut Self {
        self.remarks = remarks;
        self
    }

    pub fn add_frequency(&mut self, frequency: FacilityFrequency) -> &mut Self {
        self.frequencies.push(frequency);
        self
    }

    pub fn add_airspace(&mut self, airspace: Airspace) -> &mut Self {
        self.airspaces.push(airspace);
        self
    }

    pub fn add_runway(&mut self, runway: Runway) -> &mut Self {
        self.runways.push(runway);
        self
    }

    pub fn add_navaid(&mut self, navaid: Navaid) -> &mut Self {
        self.navaids.push(navaid);
        self
    }
}
