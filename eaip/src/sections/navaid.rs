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

use super::{first_paragraph, required, text};
use crate::fields::{
    parse_channel, parse_declination, parse_elevation, parse_frequency,
    parse_magnetic_variation, parse_point, parse_range,
};
use crate::model::{Navaid, NavaidBuilder, NavaidType};
use crate::{Error, Node};

/// Parses a navaid row of ENR 4.1.
///
/// The row id is the navaid id. The first cell holds name, type and the
/// declination or magnetic variation as paragraphs.
pub(super) fn parse_navaid<N: Node>(record: &N) -> Result<Navaid, Error> {
    let ident = required(record, "td[2]", "ident")?;
    let mut navaid = NavaidBuilder::new();

    if let Some(id) = super::attribute(record, "id") {
        navaid.id(id);
    }

    // the variation is given with the year of measurement
    if let Some(variation) = text(record, "td[1]/p[3]") {
        if variation.contains('/') {
            navaid.magnetic_variation(Some(parse_magnetic_variation(&variation)?));
        } else {
            navaid.declination(Some(parse_declination(&variation)?));
        }
    }

    navaid
        .name(required(record, "td[1]/p[1]", "name")?)
        .navaid_type(NavaidType::from_label(&required(
            record,
            "td[1]/p[2]",
            "type",
        )?)?)
        .coverage(
            text(record, "td[7]/p[1]")
                .map(|coverage| parse_range(&coverage))
                .transpose()?
                .flatten(),
        )
        .remarks(text(record, "td[7]/p[2]"));

    read_station(record, &ident, &mut navaid)?;
    navaid.ident(ident).build()
}

/// Parses a navaid row of AD 2.19.
///
/// The navaid is identified by the ICAO code of the aerodrome and its ident
/// and named after the aerodrome.
pub(super) fn parse_aerodrome_navaid<N: Node>(
    record: &N,
    icao: &str,
    name: &str,
) -> Result<Navaid, Error> {
    let ident = required(record, "td[2]", "ident")?;
    let mut navaid = NavaidBuilder::new();

    navaid
        .id(format!("{icao}-{ident}"))
        .name(name.to_string())
        .navaid_type(NavaidType::from_label(&required(record, "td[1]", "type")?)?)
        .remarks(text(record, "td[7]"));

    read_station(record, &ident, &mut navaid)?;
    navaid.ident(ident).build()
}

/// Reads frequency, channel, position and elevation, which share the same
/// cells in ENR 4.1 and AD 2.19.
fn read_station<N: Node>(record: &N, ident: &str, navaid: &mut NavaidBuilder) -> Result<(), Error> {
    let frequency = first_paragraph(record, "td[3]").ok_or(Error::MissingField("frequency"))?;
    let position = first_paragraph(record, "td[5]").ok_or(Error::MissingField("position"))?;

    navaid
        .frequency(parse_frequency(&frequency)?)
        .channel(
            text(record, "td[3]/p[2]")
                .map(|channel| parse_channel(&channel))
                .transpose()?,
        )
        .position(parse_point(ident, &position)?)
        .elevation(
            text(record, "td[6]")
                .map(|elevation| parse_elevation(&elevation))
                .transpose()?,
        );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::{Distance, Elevation, MagneticVariation};

    const BPL: &str = r#"<tr id="ENR-4.1-BPL">
        <td><p>BUDAPEST</p><p>DVOR/DME</p><p>5°E / 2020</p></td>
        <td>BPL</td>
        <td><p>115.900 MHz</p><p>CH 106X</p></td>
        <td>H24</td>
        <td>472616.8N 0191444.0E</td>
        <td>450 FT</td>
        <td><p>60 NM</p><p>Coverage restricted below FL100</p></td>
    </tr>"#;

    #[test]
    fn parses_enroute_navaid() {
        let row = eaip_xml::parse(BPL).expect("row should parse");
        let navaid = parse_navaid(&row.root_element()).expect("navaid should parse");

        assert_eq!(navaid.id, "ENR-4.1-BPL");
        assert_eq!(navaid.ident, "BPL");
        assert_eq!(navaid.name, "BUDAPEST");
        assert_eq!(navaid.navaid_type, NavaidType::DvorDme);
        assert!((navaid.frequency.mhz() - 115.9).abs() < 1e-9);
        assert_eq!(navaid.channel.as_deref(), Some("106X"));
        assert_eq!(
            navaid.magnetic_variation,
            Some(MagneticVariation {
                degrees: 5.0,
                year: 2020
            })
        );
        assert_eq!(navaid.declination, None);
        assert_eq!(navaid.elevation.map(|e| e.value), Some(450.0));
        assert_eq!(navaid.coverage, Some(Distance::nm(60.0)));
        assert_eq!(navaid.remarks.as_deref(), Some("Coverage restricted below FL100"));
        assert!((navaid.position.latitude - (47.0 + 26.0 / 60.0 + 16.8 / 3600.0)).abs() < 1e-9);
    }

    #[test]
    fn parses_declination() {
        let row = eaip_xml::parse(
            r#"<tr>
              <td><p>PAPA</p><p>NDB</p><p>3°E</p></td>
              <td>PPR</td>
              <td>385 kHz</td>
              <td>H24</td>
              <td>472134N 0172729E</td>
            </tr>"#,
        )
        .expect("row should parse");

        let navaid = parse_navaid(&row.root_element()).expect("navaid should parse");
        assert_eq!(navaid.id, "PPR");
        assert_eq!(navaid.declination, Some(3.0));
        assert_eq!(navaid.channel, None);
        assert_eq!(navaid.elevation, None);
    }

    #[test]
    fn fails_on_unknown_type() {
        let xml = BPL.replace("DVOR/DME", "MLS");
        let row = eaip_xml::parse(&xml).expect("row should parse");
        assert_eq!(
            parse_navaid(&row.root_element()),
            Err(Error::UnknownNavaidType("MLS".to_string()))
        );
    }

    #[test]
    fn parses_aerodrome_navaid() {
        let row = eaip_xml::parse(
            r#"<tr>
              <td>ILS/DME</td>
              <td>IFR</td>
              <td><p>110.100 MHz</p><p>CH 38X</p></td>
              <td>H24</td>
              <td>472553N 0191607E</td>
              <td>440 FT</td>
              <td>RWY 31R</td>
            </tr>"#,
        )
        .expect("row should parse");

        let navaid = parse_aerodrome_navaid(&row.root_element(), "LHBP", "BUDAPEST")
            .expect("navaid should parse");
        assert_eq!(navaid.id, "LHBP-IFR");
        assert_eq!(navaid.name, "BUDAPEST");
        assert_eq!(navaid.navaid_type, NavaidType::IlsDme);
        assert_eq!(navaid.remarks.as_deref(), Some("RWY 31R"));
        assert_eq!(
            navaid.elevation,
            Some(Elevation {
                value: 440.0,
                unit: Some(crate::measurements::Uom::Feet),
                reference: None,
            })
        );
    }
}
