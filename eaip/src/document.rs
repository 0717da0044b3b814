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

use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{StructuralError, Warning};
use crate::model::{Aerodrome, Airspace, DesignatedPoint, Navaid};
use crate::sections::{Context, Feature, SectionKind};
use crate::{Coordinate, Error, Node};

/// Default number of points interpolated on a circle.
pub const DEFAULT_CIRCLE_POINTS: usize = 24;

/// Options of a [`Document`].
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseOptions {
    /// The state border as ordered polyline.
    pub border: Option<Vec<Coordinate>>,
    /// The number of points of a circle when converted to a polygon.
    pub circle_points: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            border: None,
            circle_points: DEFAULT_CIRCLE_POINTS,
        }
    }
}

impl ParseOptions {
    pub fn with_border(mut self, border: Vec<Coordinate>) -> Self {
        self.border = Some(border);
        self
    }
}

/// Features, errors and warnings of one or more parsed sections.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ParsedData {
    airspaces: Vec<Airspace>,
    navaids: Vec<Navaid>,
    aerodromes: Vec<Aerodrome>,
    designated_points: Vec<DesignatedPoint>,
    errors: Vec<StructuralError>,
    warnings: Vec<Warning>,
}

impl ParsedData {
    pub fn airspaces(&self) -> &[Airspace] {
        &self.airspaces
    }

    pub fn navaids(&self) -> &[Navaid] {
        &self.navaids
    }

    pub fn aerodromes(&self) -> &[Aerodrome] {
        &self.aerodromes
    }

    pub fn designated_points(&self) -> &[DesignatedPoint] {
        &self.designated_points
    }

    /// Returns the errors of the records that couldn't be parsed.
    pub fn errors(&self) -> &[StructuralError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Moves all features, errors and warnings of `other` into `self`.
    pub fn append(&mut self, mut other: ParsedData) {
        self.airspaces.append(&mut other.airspaces);
        self.navaids.append(&mut other.navaids);
        self.aerodromes.append(&mut other.aerodromes);
        self.designated_points.append(&mut other.designated_points);
        self.errors.append(&mut other.errors);
        self.warnings.append(&mut other.warnings);
    }

    fn add_feature(&mut self, feature: Feature) {
        match feature {
            Feature::Airspace(airspace) => self.airspaces.push(airspace),
            Feature::Navaid(navaid) => self.navaids.push(navaid),
            Feature::Aerodrome(aerodrome) => self.aerodromes.push(aerodrome),
            Feature::DesignatedPoint(point) => self.designated_points.push(point),
        }
    }
}

/// Parser of the sections of an eAIP document.
///
/// # Examples
///
/// ```
/// use eaip::{Document, ParseOptions, SectionKind};
///
/// # fn main() -> Result<(), eaip::Error> {
/// let enr_5_1 = r#"<table><tbody>
///   <tr>
///     <td><p>LHP1 / BUDAPEST</p><p>A circle radius 3 KM centered on 473000N 0190300E</p></td>
///     <td>FL195 / GND</td>
///   </tr>
/// </tbody></table>"#;
///
/// let document = Document::new(ParseOptions::default());
/// let data = document.parse_xml(SectionKind::Airspace, enr_5_1)?;
///
/// assert_eq!(data.airspaces()[0].name, "BUDAPEST");
/// assert!(data.errors().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Document {
    options: ParseOptions,
}

impl Document {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses the `records` of a section of the `kind`.
    ///
    /// Records are parsed in order and independent of each other. A record
    /// that can't be parsed is reported as [`StructuralError`] tagged with
    /// its natural key or `#<index>` if it has none.
    pub fn parse<N, I>(&self, kind: SectionKind, records: I) -> ParsedData
    where
        N: Node,
        I: IntoIterator<Item = N>,
    {
        let mut ctx = Context::new(self.options.border.as_deref());
        let mut data = ParsedData::default();

        for (i, record) in records.into_iter().enumerate() {
            match kind.parse(&record, &mut ctx) {
                Ok(features) => features.into_iter().for_each(|f| data.add_feature(f)),
                Err(error) => {
                    let key = kind.natural_key(&record).unwrap_or_else(|| format!("#{i}"));
                    warn!("skipping {key}: {error}");
                    data.errors.push(StructuralError { key, error });
                }
            }
        }

        data.warnings = ctx.into_warnings();

        debug!(
            "parsed {kind:?} section: {} airspaces, {} navaids, {} aerodromes, {} points, {} errors",
            data.airspaces.len(),
            data.navaids.len(),
            data.aerodromes.len(),
            data.designated_points.len(),
            data.errors.len()
        );

        data
    }

    /// Parses a section of the `kind` from eAIP XML.
    ///
    /// Records deleted by an amendment are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML can't be read. Errors of single records
    /// are returned within the [`ParsedData`].
    pub fn parse_xml(&self, kind: SectionKind, xml: &str) -> Result<ParsedData, Error> {
        let document = eaip_xml::parse(xml)?;
        let root = document.root_element();
        let path = kind.record_path();

        // the section may be the record itself
        let records = if path.trim_start_matches('/') == root.tag_name().name() {
            vec![root]
        } else {
            root.select(path)
        };

        Ok(self.parse(kind, live_records(records)))
    }

    /// Returns the area of the `airspace` with circles interpolated as
    /// configured.
    pub fn polygon(&self, airspace: &Airspace) -> geo::MultiPolygon<f64> {
        airspace.boundary.to_polygon(self.options.circle_points)
    }
}

/// Returns the records that aren't deleted.
///
/// A record is deleted if one of its classes starts with `Amdt` and contains
/// `Deleted` like `AmdtDeletedAIRAC`, or if it is marked `deleted="true"`.
pub fn live_records<N, I>(records: I) -> impl Iterator<Item = N>
where
    N: Node,
    I: IntoIterator<Item = N>,
{
    records.into_iter().filter(|record| !is_deleted(record))
}

fn is_deleted<N: Node>(record: &N) -> bool {
    let amended = record.attribute("class").is_some_and(|class| {
        class
            .split_whitespace()
            .any(|c| c.starts_with("Amdt") && c.contains("Deleted"))
    });

    amended || record.attribute("deleted") == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_deleted_records() {
        let document = eaip_xml::parse(
            r#"<tbody>
              <tr id="A"/>
              <tr id="B" class="AmdtDeletedAIRAC"/>
              <tr id="C" class="row AmdtInsertedAIRAC"/>
              <tr id="D" deleted="true"/>
              <tr id="E" deleted="false"/>
            </tbody>"#,
        )
        .expect("table should parse");

        let ids: Vec<&str> = live_records(document.root_element().select("tr"))
            .filter_map(|r| r.attribute("id"))
            .collect();

        assert_eq!(ids, vec!["A", "C", "E"]);
    }

    #[test]
    fn appends_parsed_data() {
        let mut data = ParsedData::default();
        data.errors.push(StructuralError {
            key: "#0".to_string(),
            error: Error::MissingBorder,
        });

        let mut other = ParsedData::default();
        other.warnings.push(Warning::BorderUnavailable {
            key: "LHCC".to_string(),
        });

        data.append(other);
        assert_eq!(data.errors().len(), 1);
        assert_eq!(data.warnings().len(), 1);
    }

    #[test]
    fn parses_record_as_root() {
        let document = Document::default();
        let data = document
            .parse_xml(
                SectionKind::Aerodrome,
                r#"<AD-2 id="LHDK">
                  <AD-2.1><p>LHDK - DEBRECEN</p></AD-2.1>
                  <AD-2.2><table><tbody>
                    <tr><td>1</td><td>ARP</td><td>472918N 0213654E</td></tr>
                    <tr><td>2</td><td>Elevation</td><td>359 FT</td></tr>
                  </tbody></table></AD-2.2>
                </AD-2>"#,
            )
            .expect("document should parse");

        assert_eq!(data.aerodromes().len(), 1);
        assert_eq!(data.aerodromes()[0].icao, "LHDK");
    }
}
