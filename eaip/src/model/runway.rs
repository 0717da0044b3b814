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

use crate::measurements::{Distance, Elevation};
use crate::{Coordinate, Error};

/// Runway surface composition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunwaySurface {
    Asphalt,
    Concrete,
    Grass,
    Gravel,
    /// Any other surface as published.
    Other(String),
}

impl RunwaySurface {
    /// Returns the surface of a label like `PCN 60/F/A/W/T ASPH`.
    ///
    /// The label may contain the pavement classification number, so the
    /// first word naming a known surface wins.
    pub fn from_label(label: &str) -> Self {
        label
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .find_map(|word| match word.to_ascii_uppercase().as_str() {
                "ASPH" | "ASPHALT" => Some(Self::Asphalt),
                "CONC" | "CONCRETE" => Some(Self::Concrete),
                "GRASS" => Some(Self::Grass),
                "GRVL" | "GRAVEL" => Some(Self::Gravel),
                _ => None,
            })
            .unwrap_or_else(|| Self::Other(label.trim().to_string()))
    }
}

impl Display for RunwaySurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RunwaySurface::Asphalt => write!(f, "Asphalt"),
            RunwaySurface::Concrete => write!(f, "Concrete"),
            RunwaySurface::Grass => write!(f, "Grass"),
            RunwaySurface::Gravel => write!(f, "Gravel"),
            RunwaySurface::Other(label) => write!(f, "{label}"),
        }
    }
}

/// Runway of an aerodrome with its declared distances.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    pub designator: String,
    /// The true bearing in degrees.
    pub bearing: f64,
    pub length: Distance,
    pub width: Distance,
    pub threshold: Coordinate,
    pub end: Coordinate,
    pub threshold_elevation: Elevation,
    pub surface: RunwaySurface,
    /// The slope in percent.
    pub slope: Option<f64>,
    /// Take-off run available.
    pub tora: Option<Distance>,
    /// Take-off distance available.
    pub toda: Option<Distance>,
    /// Accelerate-stop distance available.
    pub asda: Option<Distance>,
    /// Landing distance available.
    pub lda: Option<Distance>,
}

impl Display for Runway {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "RWY {} {}° {} x {} {}",
            self.designator, self.bearing, self.length, self.width, self.surface
        )
    }
}

/// Builder of a [`Runway`].
///
/// The runway is described in several tables of the aerodrome, so the
/// builder collects the values of all tables before it is built.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RunwayBuilder {
    designator: Option<String>,
    bearing: Option<f64>,
    length: Option<Distance>,
    width: Option<Distance>,
    threshold: Option<Coordinate>,
    end: Option<Coordinate>,
    threshold_elevation: Option<Elevation>,
    surface: Option<RunwaySurface>,
    slope: Option<f64>,
    tora: Option<Distance>,
    toda: Option<Distance>,
    asda: Option<Distance>,
    lda: Option<Distance>,
}

impl RunwayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the runway.
    ///
    /// # Errors
    ///
    /// Returns an error if any value but the slope or the declared distances
    /// is missing.
    pub fn build(&self) -> std::result::Result<Runway, Error> {
        Ok(Runway {
            designator: self
                .designator
                .clone()
                .ok_or(Error::MissingField("designator"))?,
            bearing: self.bearing.ok_or(Error::MissingField("bearing"))?,
            length: self.length.ok_or(Error::MissingField("length"))?,
            width: self.width.ok_or(Error::MissingField("width"))?,
            threshold: self.threshold.ok_or(Error::MissingField("threshold"))?,
            end: self.end.ok_or(Error::MissingField("runway end"))?,
            threshold_elevation: self
                .threshold_elevation
                .ok_or(Error::MissingField("threshold elevation"))?,
            surface: self.surface.clone().ok_or(Error::MissingField("surface"))?,
            slope: self.slope,
            tora: self.tora,
            toda: self.toda,
            asda: self.asda,
            lda: self.lda,
        })
    }

    /// Returns the designator if it is set already.
    pub fn designator_ref(&self) -> Option<&str> {
        self.designator.as_deref()
    }

    pub fn designator(&mut self, designator: String) -> &mut Self {
        self.designator = Some(designator);
        self
    }

    pub fn bearing(&mut self, bearing: f64) -> &mut Self {
        self.bearing = Some(bearing);
        self
    }

    pub fn dimensions(&mut self, length: Distance, width: Distance) -> &mut Self {
        self.length = Some(length);
        self.width = Some(width);
        self
    }

    pub fn threshold(&mut self, threshold: Coordinate) -> &mut Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn end(&mut self, end: Coordinate) -> &mut Self {
        self.end = Some(end);
        self
    }

    pub fn threshold_elevation(&mut self, elevation: Elevation) -> &mut Self {
        self.threshold_elevation = Some(elevation);
        self
    }

    pub fn surface(&mut self, surface: RunwaySurface) -> &mut Self {
        self.surface = Some(surface);
        self
    }

    pub fn slope(&mut self, slope: Option<f64>) -> &mut Self {
        self.slope = slope;
        self
    }

    /// Sets the declared distances TORA, TODA, ASDA and LDA.
    pub fn declared_distances(
        &mut self,
        tora: Option<Distance>,
        toda: Option<Distance>,
        asda: Option<Distance>,
        lda: Option<Distance>,
    ) -> &mut Self {
        self.tora = tora;
        self.toda = toda;
        self.asda = asda;
        self.lda = lda;
        self
    }
}
