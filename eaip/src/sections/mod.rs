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

//! Processors of the records of the eAIP sections.
//!
//! Each [`SectionKind`] maps one record, usually a table row, to the features
//! it describes. A record either yields its features or fails with a single
//! [`Error`], which never affects other records.

use log::warn;

use crate::model::{Aerodrome, Airspace, DesignatedPoint, Navaid};
use crate::{Coordinate, Error, Node, Warning};

mod aerodrome;
mod airspace;
mod designated_point;
mod navaid;

/// Shape of the records of an eAIP section.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SectionKind {
    /// Prohibited, restricted and danger areas or other airspaces of ENR 5
    /// with one boundary per row.
    Airspace,
    /// An AD 2 entry of an aerodrome.
    Aerodrome,
    /// Radio navigation aids of ENR 4.1.
    Navaids,
    /// Designated points of ENR 4.4.
    DesignatedPoints,
    /// Airspaces of ENR 5 whose boundary and limits are several blocks joined
    /// by ` and `.
    JoinedAirspace,
    /// A flight information region bounded by the state border.
    BorderAirspace,
    /// Controlled airspaces of ENR 2.1 with class, unit and frequencies.
    ControlledAirspace,
}

impl SectionKind {
    /// Parses one `record` into its features.
    ///
    /// # Errors
    ///
    /// Returns the first error that prevents the record from being parsed.
    pub fn parse<N: Node>(&self, record: &N, ctx: &mut Context) -> Result<Vec<Feature>, Error> {
        let feature = match self {
            Self::Airspace => Feature::Airspace(airspace::parse_airspace(record, ctx)?),
            Self::Aerodrome => Feature::Aerodrome(aerodrome::parse_aerodrome(record, ctx)?),
            Self::Navaids => Feature::Navaid(navaid::parse_navaid(record)?),
            Self::DesignatedPoints => {
                Feature::DesignatedPoint(designated_point::parse_designated_point(record)?)
            }
            Self::JoinedAirspace => {
                Feature::Airspace(airspace::parse_joined_airspace(record, ctx)?)
            }
            Self::BorderAirspace => {
                Feature::Airspace(airspace::parse_border_airspace(record, ctx)?)
            }
            Self::ControlledAirspace => {
                Feature::Airspace(airspace::parse_controlled_airspace(record, ctx)?)
            }
        };

        Ok(vec![feature])
    }

    /// Returns the natural key of the `record` like a designator, an ICAO
    /// code or a navaid id.
    pub fn natural_key<N: Node>(&self, record: &N) -> Option<String> {
        match self {
            Self::Airspace | Self::JoinedAirspace | Self::BorderAirspace => {
                text(record, "td[1]/p[1]").map(|label| airspace::label_key(&label))
            }
            Self::ControlledAirspace => text(record, "td[1]/p[1]"),
            Self::Aerodrome => attribute(record, "id"),
            Self::Navaids => attribute(record, "id").or_else(|| text(record, "td[2]")),
            Self::DesignatedPoints => text(record, "td[1]"),
        }
    }

    /// Returns the path of the records of this kind within a section.
    pub fn record_path(&self) -> &'static str {
        match self {
            Self::Aerodrome => "//AD-2",
            _ => "//tbody/tr",
        }
    }
}

/// A feature parsed from a record.
#[derive(Clone, PartialEq, Debug)]
pub enum Feature {
    Airspace(Airspace),
    Navaid(Navaid),
    Aerodrome(Aerodrome),
    DesignatedPoint(DesignatedPoint),
}

/// State shared by the records of one section.
#[derive(Debug, Default)]
pub struct Context<'a> {
    border: Option<&'a [Coordinate]>,
    warnings: Vec<Warning>,
}

impl<'a> Context<'a> {
    /// Creates a context with the state `border` used by boundaries.
    pub fn new(border: Option<&'a [Coordinate]>) -> Self {
        Self {
            border,
            warnings: Vec::new(),
        }
    }

    /// Adds a warning and logs it.
    pub fn warn(&mut self, warning: Warning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Returns the warnings of all records.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// Returns the text at the `path` unless it is blank or `NIL`.
fn text<N: Node>(node: &N, path: &str) -> Option<String> {
    node.text_at(path)
        .filter(|text| !text.is_empty() && !text.eq_ignore_ascii_case("NIL"))
}

/// Returns the text at the `path` or fails with a missing `field`.
fn required<N: Node>(node: &N, path: &str, field: &'static str) -> Result<String, Error> {
    text(node, path).ok_or(Error::MissingField(field))
}

/// Returns the text of the first paragraph of the `cell` or the whole cell
/// if it has no paragraphs.
fn first_paragraph<N: Node>(node: &N, cell: &str) -> Option<String> {
    text(node, &format!("{cell}/p[1]")).or_else(|| text(node, cell))
}

fn attribute<N: Node>(node: &N, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
