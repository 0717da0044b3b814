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

use eaip::measurements::{Distance, Elevation};
use eaip::model::{AirspaceClass, AirspaceType, NavaidType};
use eaip::{coord, Boundary, Document, Error, ParseOptions, SectionKind, Warning};

const ENR_5_1: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<e:Sub-section xmlns:e="http://www.eurocontrol.int/xsd/aip" xmlns:x="http://www.w3.org/1999/xhtml" id="ENR-5.1">
  <x:table>
    <x:thead>
      <x:tr><x:th>Identification and lateral limits</x:th><x:th>Upper / lower limit</x:th><x:th>Remarks</x:th></x:tr>
    </x:thead>
    <x:tbody>
      <x:tr id="ENR-5.1-LHP1">
        <x:td>
          <x:p><x:strong>LHP1 / BUDAPEST</x:strong></x:p>
          <x:p>A circle radius3KM centered on 465700N0185100E</x:p>
        </x:td>
        <x:td>FL195 / GND</x:td>
        <x:td><x:p>Government buildings</x:p><x:p>H24</x:p></x:td>
      </x:tr>
      <x:tr id="ENR-5.1-LHP2">
        <x:td>
          <x:p><x:strong>LHP2 / PAKS</x:strong></x:p>
          <x:p>A circle radius 3 KM around 463800N 0185100E</x:p>
        </x:td>
        <x:td>FL195 / GND</x:td>
        <x:td><x:p>Nuclear power plant</x:p></x:td>
      </x:tr>
      <x:tr id="ENR-5.1-LHR1" class="AmdtDeletedAIRAC">
        <x:td>
          <x:p><x:strong>LHR1 / DELETED</x:strong></x:p>
          <x:p>broken</x:p>
        </x:td>
        <x:td>broken</x:td>
      </x:tr>
      <x:tr id="ENR-5.1-LHR10">
        <x:td>
          <x:p><x:strong>LHR10 / TISZA</x:strong></x:p>
          <x:p>480000N 0180000E along the state border - 473000N 0190000E - 470000N 0183000E</x:p>
        </x:td>
        <x:td>5000 FT ALT / GND</x:td>
        <x:td></x:td>
      </x:tr>
    </x:tbody>
  </x:table>
</e:Sub-section>"#;

const ENR_4_1: &str = r#"<Sub-section id="ENR-4.1">
  <table><tbody>
    <tr id="BPL">
      <td><p>BUDAPEST</p><p>DVOR/DME</p><p>5°E / 2020</p></td>
      <td>BPL</td>
      <td><p>115.900 MHz</p><p>CH 106X</p></td>
      <td>H24</td>
      <td>472616.8N 0191444.0E</td>
      <td>450 FT</td>
      <td><p>60 NM</p></td>
    </tr>
    <tr id="XXX">
      <td><p>NOWHERE</p><p>MLS</p></td>
      <td>XXX</td>
      <td>100.000 MHz</td>
      <td>H24</td>
      <td>470000N 0190000E</td>
    </tr>
    <tr>
      <td><p>PAPA</p><p>NDB</p></td>
      <td>PPR</td>
      <td>385 kHz</td>
      <td>H24</td>
    </tr>
  </tbody></table>
</Sub-section>"#;

const ENR_4_4: &str = r#"<Sub-section id="ENR-4.4">
  <table><tbody>
    <tr><td>ABETI</td><td>473524N 0170517E</td></tr>
    <tr><td>BALOX</td><td>465700N0185100E</td></tr>
  </tbody></table>
</Sub-section>"#;

fn border() -> Vec<eaip::Coordinate> {
    vec![
        coord!(48.0, 17.0),
        coord!(48.0, 18.0),
        coord!(48.1, 18.5),
        coord!(47.5, 19.0),
        coord!(47.5, 20.0),
    ]
}

#[test]
fn parses_circle_airspace_end_to_end() {
    let data = Document::default()
        .parse_xml(SectionKind::Airspace, ENR_5_1)
        .expect("document should parse");

    let lhp1 = &data.airspaces()[0];
    assert_eq!(lhp1.designator.as_deref(), Some("LHP1"));
    assert_eq!(lhp1.name, "BUDAPEST");
    assert_eq!(lhp1.airspace_type, AirspaceType::Prohibited);
    assert_eq!(lhp1.upper, Elevation::fl(195.0));
    assert_eq!(lhp1.lower, Elevation::gnd());

    match &lhp1.boundary {
        Boundary::Circle { center, radius } => {
            assert_eq!(*radius, Distance::m(3000.0));
            assert!((center.latitude - 46.95).abs() < 1e-9);
            assert!((center.longitude - 18.85).abs() < 1e-9);
        }
        other => panic!("should be a circle but is {other:?}"),
    }
}

#[test]
fn reports_failing_record_and_continues() {
    let data = Document::default()
        .parse_xml(SectionKind::Airspace, ENR_5_1)
        .expect("document should parse");

    // the deleted LHR1 is skipped entirely
    let designators: Vec<_> = data
        .airspaces()
        .iter()
        .filter_map(|a| a.designator.as_deref())
        .collect();
    assert_eq!(designators, vec!["LHP1", "LHR10"]);

    assert_eq!(data.errors().len(), 1);
    assert_eq!(data.errors()[0].key, "LHP2");
    assert!(matches!(
        data.errors()[0].error,
        Error::MissingAnchor { anchor: "centered on", .. }
    ));
}

#[test]
fn splices_supplied_border() {
    let border = border();
    let document = Document::new(ParseOptions::default().with_border(border.clone()));
    let data = document
        .parse_xml(SectionKind::Airspace, ENR_5_1)
        .expect("document should parse");

    let lhr10 = &data.airspaces()[1];
    assert_eq!(
        lhr10.boundary,
        Boundary::Ring(vec![
            coord!(48.0, 18.0),
            border[1],
            border[2],
            coord!(47.5, 19.0),
            coord!(47.0, 18.5),
        ])
    );
    assert!(data.warnings().is_empty());
}

#[test]
fn warns_without_border() {
    let data = Document::default()
        .parse_xml(SectionKind::Airspace, ENR_5_1)
        .expect("document should parse");

    let lhr10 = &data.airspaces()[1];
    assert!(matches!(&lhr10.boundary, Boundary::Ring(points) if points.len() == 3));
    assert_eq!(
        data.warnings(),
        &[Warning::BorderUnavailable {
            key: "LHR10".to_string()
        }]
    );
}

#[test]
fn parses_navaids() {
    let data = Document::default()
        .parse_xml(SectionKind::Navaids, ENR_4_1)
        .expect("document should parse");

    assert_eq!(data.navaids().len(), 1);
    assert_eq!(data.navaids()[0].navaid_type, NavaidType::DvorDme);
    assert_eq!(data.navaids()[0].coverage, Some(Distance::nm(60.0)));

    let keys: Vec<_> = data.errors().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["XXX", "PPR"]);
    assert_eq!(
        data.errors()[0].error,
        Error::UnknownNavaidType("MLS".to_string())
    );
    assert_eq!(data.errors()[1].error, Error::MissingField("position"));
}

#[test]
fn merges_sections() {
    let document = Document::default();

    let mut data = document
        .parse_xml(SectionKind::Airspace, ENR_5_1)
        .expect("document should parse");
    data.append(
        document
            .parse_xml(SectionKind::DesignatedPoints, ENR_4_4)
            .expect("document should parse"),
    );

    assert_eq!(data.airspaces().len(), 2);
    assert_eq!(data.designated_points().len(), 2);
    assert_eq!(data.designated_points()[1].ident, "BALOX");
    assert_eq!(data.errors().len(), 1);
}

#[test]
fn falls_back_to_index_key() {
    let table = eaip_xml::parse("<tbody><tr><td></td></tr></tbody>").expect("table should parse");
    let rows = eaip_xml::find_all(table.root_element(), "tr");
    let data = Document::default().parse(SectionKind::DesignatedPoints, rows);

    assert_eq!(data.errors()[0].key, "#0");
    assert_eq!(data.errors()[0].error, Error::MissingField("ident"));
}

#[test]
fn converts_airspace_to_polygon() {
    let document = Document::new(ParseOptions {
        circle_points: 12,
        ..Default::default()
    });
    let data = document
        .parse_xml(SectionKind::Airspace, ENR_5_1)
        .expect("document should parse");

    let polygon = document.polygon(&data.airspaces()[0]);
    assert_eq!(polygon.0.len(), 1);
    assert_eq!(polygon.0[0].exterior().0.len(), 13);
}

const AD_2: &str = r#"<AD-data>
  <AD-2 id="LHDK">
    <AD-2.1><p>LHDK - DEBRECEN</p></AD-2.1>
    <AD-2.2><table><tbody>
      <tr><td>1</td><td>ARP</td><td>472918N 0213654E</td></tr>
      <tr><td>2</td><td>Elevation</td><td>359 FT</td></tr>
    </tbody></table></AD-2.2>
    <AD-2.12><table><tbody>
      <tr><td>RWY 05<span class="AmdtInsertedAIRAC">R</span></td><td>47.52°</td><td>2500 x 45</td><td>CONC</td><td>472840N 0213530E</td><td>472940N 0213750E</td><td>351 FT</td></tr>
    </tbody></table></AD-2.12>
    <AD-2.13><table><tbody>
      <tr><td>RWY 05R</td><td>2500</td><td>2500</td><td>2500</td><td>2500</td></tr>
    </tbody></table></AD-2.13>
  </AD-2>
  <AD-2 id="LHSM">
    <AD-2.1><p>LHSM - SARMELLEK</p></AD-2.1>
    <AD-2.2><table><tbody>
      <tr><td>1</td><td>ARP</td><td>464111N 0171016E</td></tr>
    </tbody></table></AD-2.2>
  </AD-2>
</AD-data>"#;

#[test]
fn tags_aerodrome_errors_with_icao_code() {
    let data = Document::default()
        .parse_xml(SectionKind::Aerodrome, AD_2)
        .expect("document should parse");

    assert_eq!(data.aerodromes().len(), 1);
    assert_eq!(data.aerodromes()[0].icao, "LHDK");
    assert_eq!(data.aerodromes()[0].runways[0].designator, "05R");
    assert_eq!(
        data.aerodromes()[0].runways[0].lda,
        Some(Distance::m(2500.0))
    );

    assert_eq!(data.errors().len(), 1);
    assert_eq!(data.errors()[0].key, "LHSM");
    assert_eq!(data.errors()[0].error, Error::MissingField("elevation"));
}

const ENR_5_JOINED: &str = r#"<Sub-section id="ENR-5.3">
  <table><tbody>
    <tr>
      <td>
        <p>LHD5 / KUNMADARAS</p>
        <p>A circle radius 2 KM centered on 471800N 0205000E and 471000N 0200000E - 472000N 0200000E - 472000N 0201000E</p>
      </td>
      <td>FL95 / GND and 5000 FT ALT / GND</td>
    </tr>
    <tr>
      <td>
        <p>LHD6 / SZOLNOK</p>
        <p>A circle radius 2 KM centered on 471000N 0201000E</p>
      </td>
      <td>FL95</td>
    </tr>
  </tbody></table>
</Sub-section>"#;

#[test]
fn collects_joined_airspace_warnings() {
    let data = Document::default()
        .parse_xml(SectionKind::JoinedAirspace, ENR_5_JOINED)
        .expect("document should parse");

    assert_eq!(data.airspaces().len(), 1);
    assert!(matches!(
        &data.airspaces()[0].boundary,
        Boundary::Compound(blocks) if blocks.len() == 2
    ));
    assert_eq!(
        data.warnings(),
        &[Warning::DivergingLimits {
            key: "LHD5".to_string(),
            used: "FL95 / GND".to_string(),
            ignored: "5000 FT ALT / GND".to_string(),
        }]
    );

    assert_eq!(data.errors().len(), 1);
    assert_eq!(data.errors()[0].key, "LHD6");
    assert!(matches!(
        data.errors()[0].error,
        Error::MissingAnchor { anchor: "/", .. }
    ));
}

const ENR_2_1_FIR: &str = r#"<Sub-section id="ENR-2.1">
  <table><tbody>
    <tr><td><p>LHCC / BUDAPEST FIR</p></td><td>FL660 / GND</td><td>BUDAPEST ACC</td></tr>
    <tr><td><p>LHCX / BUDAPEST UIR</p></td><td>UNL / FL660</td></tr>
  </tbody></table>
</Sub-section>"#;

#[test]
fn bounds_fir_by_border() {
    let border = border();
    let data = Document::new(ParseOptions::default().with_border(border.clone()))
        .parse_xml(SectionKind::BorderAirspace, ENR_2_1_FIR)
        .expect("document should parse");

    assert_eq!(data.airspaces().len(), 1);
    assert_eq!(data.airspaces()[0].airspace_type, AirspaceType::FIR);
    assert_eq!(data.airspaces()[0].boundary, Boundary::Ring(border));

    assert_eq!(data.errors().len(), 1);
    assert_eq!(data.errors()[0].key, "LHCX");
    assert_eq!(
        data.errors()[0].error,
        Error::InvalidValue {
            field: "elevation".to_string(),
            value: "UNL".to_string(),
        }
    );
}

#[test]
fn fails_fir_without_border() {
    let data = Document::default()
        .parse_xml(SectionKind::BorderAirspace, ENR_2_1_FIR)
        .expect("document should parse");

    assert!(data.airspaces().is_empty());
    let keys: Vec<_> = data.errors().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["LHCC", "LHCX"]);
    assert_eq!(data.errors()[0].error, Error::MissingBorder);
}

const ENR_2_1_TMA: &str = r#"<Sub-section id="ENR-2.1">
  <table><tbody>
    <tr>
      <td>
        <p>BUDAPEST TMA 1</p>
        <p>473000N 0190000E - 474000N 0190000E - 474000N 0191000E</p>
        <p>FL195 / 3500 FT ALT</p>
      </td>
      <td>C</td>
      <td>BUDAPEST APPROACH</td>
      <td>129.700MHz, BUDAPEST DIRECTOR 120.100 MHz</td>
      <td>NIL</td>
    </tr>
    <tr>
      <td>
        <p>BUDAPEST TMA 2</p>
        <p>473000N 0190000E - 474000N 0190000E</p>
        <p>FL195 / 4500 FT ALT</p>
      </td>
      <td>C</td>
    </tr>
  </tbody></table>
</Sub-section>"#;

#[test]
fn parses_controlled_airspaces() {
    let data = Document::default()
        .parse_xml(SectionKind::ControlledAirspace, ENR_2_1_TMA)
        .expect("document should parse");

    assert_eq!(data.airspaces().len(), 1);
    let tma = &data.airspaces()[0];
    assert_eq!(tma.name, "BUDAPEST TMA 1");
    assert_eq!(tma.class, Some(AirspaceClass::C));
    assert_eq!(
        tma.frequency.as_deref(),
        Some("129.700 MHz, BUDAPEST DIRECTOR 120.100 MHz")
    );

    assert_eq!(data.errors().len(), 1);
    assert_eq!(data.errors()[0].key, "BUDAPEST TMA 2");
    assert!(matches!(
        data.errors()[0].error,
        Error::TooFewPoints { count: 2, .. }
    ));
}
