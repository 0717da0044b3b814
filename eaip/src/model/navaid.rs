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

use crate::measurements::{Distance, Elevation, Frequency, MagneticVariation};
use crate::{Coordinate, Error};

/// Type of a radio navigation aid.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavaidType {
    Vor,
    VorDme,
    DvorDme,
    Dme,
    Ndb,
    Locator,
    Tacan,
    Vortac,
    /// Localizer of an ILS.
    Loc,
    /// Glide path of an ILS.
    Gp,
    IlsDme,
}

impl NavaidType {
    /// Returns the type of a published label like `VOR/DME`.
    ///
    /// # Errors
    ///
    /// Returns an error if the label isn't known.
    pub fn from_label(label: &str) -> std::result::Result<Self, Error> {
        let normalized: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == '-' { '/' } else { c.to_ascii_uppercase() })
            .collect();

        match normalized.as_str() {
            "VOR" => Ok(Self::Vor),
            "VOR/DME" => Ok(Self::VorDme),
            "DVOR/DME" => Ok(Self::DvorDme),
            "DME" => Ok(Self::Dme),
            "NDB" => Ok(Self::Ndb),
            "L" | "LCTR" | "LOCATOR" => Ok(Self::Locator),
            "TACAN" => Ok(Self::Tacan),
            "VORTAC" => Ok(Self::Vortac),
            "LOC" | "LLZ" => Ok(Self::Loc),
            "GP" => Ok(Self::Gp),
            "ILS/DME" => Ok(Self::IlsDme),
            _ => Err(Error::UnknownNavaidType(label.trim().to_string())),
        }
    }
}

impl Display for NavaidType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            NavaidType::Vor => write!(f, "VOR"),
            NavaidType::VorDme => write!(f, "VOR/DME"),
            NavaidType::DvorDme => write!(f, "DVOR/DME"),
            NavaidType::Dme => write!(f, "DME"),
            NavaidType::Ndb => write!(f, "NDB"),
            NavaidType::Locator => write!(f, "L"),
            NavaidType::Tacan => write!(f, "TACAN"),
            NavaidType::Vortac => write!(f, "VORTAC"),
            NavaidType::Loc => write!(f, "LOC"),
            NavaidType::Gp => write!(f, "GP"),
            NavaidType::IlsDme => write!(f, "ILS/DME"),
        }
    }
}

/// Radio navigation aid.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navaid {
    pub id: String,
    pub ident: String,
    pub name: String,
    pub navaid_type: NavaidType,
    pub position: Coordinate,
    pub frequency: Frequency,
    /// The DME channel like `92X`.
    pub channel: Option<String>,
    /// The station declination in degrees with west being negative.
    pub declination: Option<f64>,
    pub magnetic_variation: Option<MagneticVariation>,
    pub elevation: Option<Elevation>,
    pub coverage: Option<Distance>,
    pub remarks: Option<String>,
}

impl Display for Navaid {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.navaid_type, self.ident, self.name, self.frequency
        )
    }
}

/// Builder of a [`Navaid`] while its record is parsed.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct NavaidBuilder {
    id: Option<String>,
    ident: Option<String>,
    name: Option<String>,
    navaid_type: Option<NavaidType>,
    position: Option<Coordinate>,
    frequency: Option<Frequency>,
    channel: Option<String>,
    declination: Option<f64>,
    magnetic_variation: Option<MagneticVariation>,
    elevation: Option<Elevation>,
    coverage: Option<Distance>,
    remarks: Option<String>,
}

impl NavaidBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the navaid.
    ///
    /// The id defaults to the ident.
    ///
    /// # Errors
    ///
    /// Returns an error if the ident, name, type, position or frequency is
    /// missing.
    pub fn build(&self) -> std::result::Result<Navaid, Error> {
        let ident = self.ident.clone().ok_or(Error::MissingField("ident"))?;

        Ok(Navaid {
            id: self.id.clone().unwrap_or_else(|| ident.clone()),
            ident,
            name: self.name.clone().ok_or(Error::MissingField("name"))?,
            navaid_type: self.navaid_type.ok_or(Error::MissingField("type"))?,
            position: self.position.ok_or(Error::MissingField("position"))?,
            frequency: self.frequency.ok_or(Error::MissingField("frequency"))?,
            channel: self.channel.clone(),
            declination: self.declination,
            magnetic_variation: self.magnetic_variation,
            elevation: self.elevation,
            coverage: self.coverage,
            remarks: self.remarks.clone(),
        })
    }

    pub fn id(&mut self, id: String) -> &mut Self {
        self.id = Some(id);
        self
    }

    pub fn ident(&mut self, ident: String) -> &mut Self {
        self.ident = Some(ident);
        self
    }

    pub fn name(&mut self, name: String) -> &mut Self {
        self.name = Some(name);
        self
    }

    pub fn navaid_type(&mut self, navaid_type: NavaidType) -> &mut Self {
        self.navaid_type = Some(navaid_type);
        self
    }

    pub fn position(&mut self, position: Coordinate) -> &mut Self {
        self.position = Some(position);
        self
    }

    pub fn frequency(&mut self, frequency: Frequency) -> &mut Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn channel(&mut self, channel: Option<String>) -> &mut Self {
        self.channel = channel;
        self
    }

    pub fn declination(&mut self, declination: Option<f64>) -> &mut Self {
        self.declination = declination;
        self
    }

    pub fn magnetic_variation(&mut self, variation: Option<MagneticVariation>) -> &mut Self {
        self.magnetic_variation = variation;
        self
    }

    pub fn elevation(&mut self, elevation: Option<Elevation>) -> &mut Self {
        self.elevation = elevation;
        self
    }

    pub fn coverage(&mut self, coverage: Option<Distance>) -> &mut Self {
        self.coverage = coverage;
        self
    }

    pub fn remarks(&mut self, remarks: Option<String>) -> &mut Self {
        self.remarks = remarks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_type_label() {
        assert_eq!(NavaidType::from_label("VOR/DME"), Ok(NavaidType::VorDme));
        assert_eq!(NavaidType::from_label("DVOR / DME"), Ok(NavaidType::DvorDme));
        assert_eq!(NavaidType::from_label("ILS-DME"), Ok(NavaidType::IlsDme));
        assert_eq!(NavaidType::from_label("ndb"), Ok(NavaidType::Ndb));
        assert_eq!(
            NavaidType::from_label("MLS"),
            Err(Error::UnknownNavaidType("MLS".to_string()))
        );
    }

    #[test]
    fn defaults_id_to_ident() {
        let navaid = NavaidBuilder::new()
            .ident("BPL".to_string())
            .name("BUDAPEST".to_string())
            .navaid_type(NavaidType::DvorDme)
            .position(coord!(47.43, 19.26))
            .frequency(Frequency::from_mhz(115.9))
            .build()
            .expect("navaid should build");

        assert_eq!(navaid.id, "BPL");
        assert_eq!(navaid.to_string(), "DVOR/DME BPL (BUDAPEST) 115.900 MHz");
    }

    #[test]
    fn fails_without_frequency() {
        let result = NavaidBuilder::new()
            .ident("BPL".to_string())
            .name("BUDAPEST".to_string())
            .navaid_type(NavaidType::DvorDme)
            .position(coord!(47.43, 19.26))
            .build();

        assert_eq!(result, Err(Error::MissingField("frequency")));
    }
}
