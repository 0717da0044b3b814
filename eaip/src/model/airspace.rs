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

use crate::measurements::Elevation;
use crate::{Boundary, Error};

/// ICAO Airspace Classification (ICAO Annex 11, Chapter 2).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirspaceClass {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl AirspaceClass {
    /// Returns the class of a label like `C` or `Class C`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let letter = label
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("class"))
            .map_or(label, |_| label[5..].trim());

        match letter {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "E" => Some(Self::E),
            "F" => Some(Self::F),
            "G" => Some(Self::G),
            _ => None,
        }
    }
}

/// Airspace type, either a structural or a special-use designation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirspaceType {
    /// Control Area
    CTA,
    /// Control Zone
    CTR,
    /// Terminal Control Area
    TMA,
    /// Flight Information Region
    FIR,
    /// Aerodrome Traffic Zone
    ATZ,
    /// Prohibited area
    Prohibited,
    /// Restricted area
    Restricted,
    /// Danger area
    Danger,
    /// Temporary Reserved Area
    TRA,
    /// Temporary Segregated Area
    TSA,
    /// Any other type with its published code.
    Other(String),
}

impl AirspaceType {
    /// Returns the type of a published code like `TMA` or `P`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CTA" => Some(Self::CTA),
            "CTR" => Some(Self::CTR),
            "TMA" => Some(Self::TMA),
            "FIR" => Some(Self::FIR),
            "ATZ" => Some(Self::ATZ),
            "P" => Some(Self::Prohibited),
            "R" => Some(Self::Restricted),
            "D" => Some(Self::Danger),
            "TRA" => Some(Self::TRA),
            "TSA" => Some(Self::TSA),
            _ => None,
        }
    }

    /// Derives the type from a designator.
    ///
    /// The letters following the two letter nationality prefix are the
    /// code, e.g. `LHP1` is a prohibited area and `LHTRA23A` a TRA. A code
    /// given as separate word like in `LHBP CTR` takes precedence.
    pub fn from_designator(designator: &str) -> Self {
        let mut words = designator.split_whitespace();
        let first = words.next().unwrap_or_default();

        if let Some(t) = words.find_map(Self::from_code) {
            return t;
        }

        let code: String = first
            .chars()
            .skip(2)
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();

        Self::from_code(&code).unwrap_or(Self::Other(code))
    }

    /// Derives the type from a name like `BUDAPEST TMA 1`.
    pub fn from_name(name: &str) -> Self {
        name.split_whitespace()
            .find_map(Self::from_code)
            .unwrap_or_else(|| Self::Other(name.trim().to_string()))
    }
}

/// Airspace.
///
/// The airspace is enclosed laterally by the [`boundary`](Self::boundary)
/// and ranges vertically from the `lower` to the `upper` limit.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airspace {
    pub designator: Option<String>,
    pub name: String,
    pub class: Option<AirspaceClass>,
    pub airspace_type: AirspaceType,
    pub upper: Elevation,
    pub lower: Elevation,
    pub boundary: Boundary,
    pub remarks: Option<String>,
    pub active_time: Option<String>,
    pub operator: Option<String>,
    pub frequency: Option<String>,
}

/// Builder of an [`Airspace`] while its record is parsed.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AirspaceBuilder {
    designator: Option<String>,
    name: Option<String>,
    class: Option<AirspaceClass>,
    airspace_type: Option<AirspaceType>,
    upper: Option<Elevation>,
    lower: Option<Elevation>,
    boundary: Option<Boundary>,
    remarks: Option<String>,
    active_time: Option<String>,
    operator: Option<String>,
    frequency: Option<String>,
}

impl AirspaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the airspace.
    ///
    /// The type is derived from the designator or the name unless it is set
    /// explicitly.
    ///
    /// # Errors
    ///
    /// Returns an error if the name, the limits or the boundary are missing.
    pub fn build(&self) -> std::result::Result<Airspace, Error> {
        let name = self.name.clone().ok_or(Error::MissingField("name"))?;

        let airspace_type = match (&self.airspace_type, &self.designator) {
            (Some(t), _) => t.clone(),
            (None, Some(designator)) => AirspaceType::from_designator(designator),
            (None, None) => AirspaceType::from_name(&name),
        };

        Ok(Airspace {
            designator: self.designator.clone(),
            name,
            class: self.class,
            airspace_type,
            upper: self.upper.ok_or(Error::MissingField("upper limit"))?,
            lower: self.lower.ok_or(Error::MissingField("lower limit"))?,
            boundary: self.boundary.clone().ok_or(Error::MissingField("boundary"))?,
            remarks: self.remarks.clone(),
            active_time: self.active_time.clone(),
            operator: self.operator.clone(),
            frequency: self.frequency.clone(),
        })
    }

    pub fn designator(&mut self, designator: String) -> &mut Self {
        self.designator = Some(designator);
        self
    }

    pub fn name(&mut self, name: String) -> &mut Self {
        self.name = Some(name);
        self
    }

    pub fn class(&mut self, class: Option<AirspaceClass>) -> &mut Self {
        self.class = class;
        self
    }

    pub fn airspace_type(&mut self, airspace_type: AirspaceType) -> &mut Self {
        self.airspace_type = Some(airspace_type);
        self
    }

    pub fn upper(&mut self, upper: Elevation) -> &mut Self {
        self.upper = Some(upper);
        self
    }

    pub fn lower(&mut self, lower: Elevation) -> &mut Self {
        self.lower = Some(lower);
        self
    }

    pub fn boundary(&mut self, boundary: Boundary) -> &mut Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn remarks(&mut self, remarks: Option<String>) -> &mut Self {
        self.remarks = remarks;
        self
    }

    pub fn active_time(&mut self, active_time: Option<String>) -> &mut Self {
        self.active_time = active_time;
        self
    }

    pub fn operator(&mut self, operator: Option<String>) -> &mut Self {
        self.operator = operator;
        self
    }

    pub fn frequency(&mut self, frequency: Option<String>) -> &mut Self {
        self.frequency = frequency;
        self
    }
}

impl Display for AirspaceClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AirspaceClass::A => write!(f, "A"),
            AirspaceClass::B => write!(f, "B"),
            AirspaceClass::C => write!(f, "C"),
            AirspaceClass::D => write!(f, "D"),
            AirspaceClass::E => write!(f, "E"),
            AirspaceClass::F => write!(f, "F"),
            AirspaceClass::G => write!(f, "G"),
        }
    }
}

impl Display for AirspaceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AirspaceType::CTA => write!(f, "CTA"),
            AirspaceType::CTR => write!(f, "CTR"),
            AirspaceType::TMA => write!(f, "TMA"),
            AirspaceType::FIR => write!(f, "FIR"),
            AirspaceType::ATZ => write!(f, "ATZ"),
            AirspaceType::Prohibited => write!(f, "Prohibited"),
            AirspaceType::Restricted => write!(f, "Restricted"),
            AirspaceType::Danger => write!(f, "Danger"),
            AirspaceType::TRA => write!(f, "TRA"),
            AirspaceType::TSA => write!(f, "TSA"),
            AirspaceType::Other(code) => write!(f, "{code}"),
        }
    }
}

impl Display for Airspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.class {
            Some(class) => write!(
                f,
                "{}: {} (Class {}) | {}/{}",
                self.name, self.airspace_type, class, self.upper, self.lower
            ),
            None => write!(
                f,
                "{}: {} | {}/{}",
                self.name, self.airspace_type, self.upper, self.lower
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_type_from_designator() {
        assert_eq!(AirspaceType::from_designator("LHP1"), AirspaceType::Prohibited);
        assert_eq!(AirspaceType::from_designator("LHR12A"), AirspaceType::Restricted);
        assert_eq!(AirspaceType::from_designator("LHD45"), AirspaceType::Danger);
        assert_eq!(AirspaceType::from_designator("LHTRA23A"), AirspaceType::TRA);
        assert_eq!(AirspaceType::from_designator("LHBP CTR"), AirspaceType::CTR);
        assert_eq!(
            AirspaceType::from_designator("LHCC"),
            AirspaceType::Other("CC".to_string())
        );
    }

    #[test]
    fn derives_type_from_name() {
        assert_eq!(AirspaceType::from_name("BUDAPEST TMA 1"), AirspaceType::TMA);
        assert_eq!(
            AirspaceType::from_name("BALATON"),
            AirspaceType::Other("BALATON".to_string())
        );
    }

    #[test]
    fn parses_class_label() {
        assert_eq!(AirspaceClass::from_label("C"), Some(AirspaceClass::C));
        assert_eq!(AirspaceClass::from_label("Class D"), Some(AirspaceClass::D));
        assert_eq!(AirspaceClass::from_label("NIL"), None);
    }

    #[test]
    fn builds_airspace() {
        let boundary = Boundary::Ring(vec![
            coord!(47.0, 19.0),
            coord!(48.0, 19.0),
            coord!(48.0, 20.0),
        ]);

        let airspace = AirspaceBuilder::new()
            .designator("LHR1".to_string())
            .name("BUDAPEST".to_string())
            .upper(Elevation::fl(195.0))
            .lower(Elevation::gnd())
            .boundary(boundary)
            .build()
            .expect("airspace should build");

        assert_eq!(airspace.airspace_type, AirspaceType::Restricted);
        assert_eq!(airspace.to_string(), "BUDAPEST: Restricted | FL195/GND");
    }

    #[test]
    fn fails_without_boundary() {
        let result = AirspaceBuilder::new()
            .name("BUDAPEST".to_string())
            .upper(Elevation::fl(195.0))
            .lower(Elevation::gnd())
            .build();

        assert_eq!(result, Err(Error::MissingField("boundary")));
    }
}
