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

use log::debug;

use super::airspace::airspace_builder;
use super::navaid::parse_aerodrome_navaid;
use super::{attribute, first_paragraph, required, text, Context};
use crate::fields::{
    parse_bearing, parse_declared_distance, parse_dimensions, parse_elevation, parse_frequency,
    parse_magnetic_variation, parse_point, parse_slope,
};
use crate::measurements::Reference;
use crate::model::{
    Aerodrome, AerodromeBuilder, AirspaceClass, FacilityFrequency, RunwayBuilder, RunwaySurface,
    Service,
};
use crate::{Error, Node};

/// Parses an AD 2 entry with its subsections.
///
/// The entry carries the ICAO code as `id` and the IATA code as `iata`
/// attribute. Subsections AD 2.12 to AD 2.19 are optional.
pub(super) fn parse_aerodrome<N: Node>(record: &N, ctx: &mut Context) -> Result<Aerodrome, Error> {
    let icao = attribute(record, "id").ok_or(Error::MissingField("ICAO code"))?;
    let name = parse_name(record)?;

    let mut aerodrome = AerodromeBuilder::new();
    aerodrome
        .icao(icao.clone())
        .iata(attribute(record, "iata"))
        .name(name.clone());

    read_general(record, &mut aerodrome)?;

    for runway in read_runways(record)? {
        aerodrome.add_runway(runway.build()?);
    }

    for row in rows(record, "AD-2.17") {
        let mut airspace = airspace_builder(&row, ctx)?;
        airspace.class(text(&row, "td[4]").and_then(|class| AirspaceClass::from_label(&class)));
        aerodrome.add_airspace(airspace.build()?);
    }

    for row in rows(record, "AD-2.18") {
        read_frequencies(&row, &mut aerodrome)?;
    }

    for row in rows(record, "AD-2.19") {
        aerodrome.add_navaid(parse_aerodrome_navaid(&row, &icao, &name)?);
    }

    aerodrome.build()
}

/// Returns the table rows of the `subsection`.
fn rows<N: Node>(record: &N, subsection: &str) -> Vec<N> {
    record
        .select(subsection)
        .into_iter()
        .flat_map(|section| section.select("//tbody/tr"))
        .collect()
}

/// Reads the name from AD 2.1, which is given as `ICAO - NAME`.
fn parse_name<N: Node>(record: &N) -> Result<String, Error> {
    let title = required(record, "AD-2.1/p", "name")?;

    match title.split_once('-') {
        Some((_, name)) => Ok(name.trim().to_string()),
        None => Ok(title),
    }
}

/// Reads the reference point, elevation, magnetic variation and remarks from
/// the fixed rows of AD 2.2.
fn read_general<N: Node>(record: &N, aerodrome: &mut AerodromeBuilder) -> Result<(), Error> {
    let rows = rows(record, "AD-2.2");
    let value = |i: usize| rows.get(i).and_then(|row| first_paragraph(row, "td[3]"));

    let arp = value(0).ok_or(Error::MissingField("ARP"))?;
    let elevation = value(1).ok_or(Error::MissingField("elevation"))?;

    aerodrome
        .arp(parse_point("ARP", &arp)?)
        .elevation(parse_elevation(&elevation)?.or_reference(Reference::Msl))
        .magnetic_variation(
            value(2)
                .map(|variation| parse_magnetic_variation(&variation))
                .transpose()?,
        )
        .remarks(rows.get(3).and_then(|row| text(row, "td[3]")));

    Ok(())
}

/// Reads the runways of AD 2.12 and their declared distances of AD 2.13.
///
/// The first table of AD 2.12 describes the runways and the second their
/// slopes with the same order of rows.
fn read_runways<N: Node>(record: &N) -> Result<Vec<RunwayBuilder>, Error> {
    let tables: Vec<N> = record
        .select("AD-2.12")
        .into_iter()
        .flat_map(|section| section.select("//table"))
        .collect();

    let rows = tables
        .first()
        .map(|table| table.select("//tbody/tr"))
        .unwrap_or_default();
    let slopes = tables.get(1).map(|table| table.select("//tbody/tr"));

    if let Some(slopes) = &slopes {
        if slopes.len() != rows.len() {
            return Err(Error::RowCountMismatch {
                expected: rows.len(),
                actual: slopes.len(),
            });
        }
    }

    let mut runways = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let designator = runway_designator(&required(row, "td[1]", "designator")?);
        let (length, width) = parse_dimensions(&required(row, "td[3]", "dimensions")?)?;
        let threshold = first_paragraph(row, "td[5]").ok_or(Error::MissingField("threshold"))?;
        let end = first_paragraph(row, "td[6]").ok_or(Error::MissingField("runway end"))?;
        let elevation = required(row, "td[7]", "threshold elevation")?;

        let mut runway = RunwayBuilder::new();
        runway
            .bearing(parse_bearing(&required(row, "td[2]", "bearing")?)?)
            .dimensions(length, width)
            .surface(RunwaySurface::from_label(&required(row, "td[4]", "surface")?))
            .threshold(parse_point(&designator, &threshold)?)
            .end(parse_point(&designator, &end)?)
            .threshold_elevation(parse_elevation(&elevation)?.or_reference(Reference::Msl))
            .designator(designator);

        if let Some(slopes) = &slopes {
            runway.slope(
                text(&slopes[i], "td[2]")
                    .map(|slope| parse_slope(&slope))
                    .transpose()?,
            );
        }

        runways.push(runway);
    }

    read_declared_distances(record, &mut runways)?;
    debug!("read {} runways", runways.len());

    Ok(runways)
}

/// Reads the declared distances of AD 2.13 into the matching runways.
fn read_declared_distances<N: Node>(
    record: &N,
    runways: &mut [RunwayBuilder],
) -> Result<(), Error> {
    for row in rows(record, "AD-2.13") {
        let designator = runway_designator(&required(&row, "td[1]", "designator")?);

        let runway = runways
            .iter_mut()
            .find(|runway| runway.designator_ref() == Some(designator.as_str()))
            .ok_or_else(|| Error::UnknownRunway(designator.clone()))?;

        let distance = |cell: &str| -> Result<_, Error> {
            Ok(row
                .text_at(cell)
                .map(|d| parse_declared_distance(&d))
                .transpose()?
                .flatten())
        };

        runway.declared_distances(
            distance("td[2]")?,
            distance("td[3]")?,
            distance("td[4]")?,
            distance("td[5]")?,
        );
    }

    Ok(())
}

/// Strips the `RWY` prefix of a designator.
fn runway_designator(text: &str) -> String {
    let text = text.trim();
    text.strip_prefix("RWY")
        .map_or(text, str::trim)
        .to_string()
}

/// Reads an AD 2.18 row with one frequency per paragraph.
fn read_frequencies<N: Node>(row: &N, aerodrome: &mut AerodromeBuilder) -> Result<(), Error> {
    let service = Service::from_label(&required(row, "td[1]", "service")?);
    let call_sign = text(row, "td[2]");

    let mut frequencies: Vec<String> = row
        .select("td[3]/p")
        .into_iter()
        .map(|p| p.text())
        .filter(|f| !f.is_empty())
        .collect();

    if frequencies.is_empty() {
        frequencies.extend(text(row, "td[3]"));
    }

    if frequencies.is_empty() {
        return Err(Error::MissingField("frequency"));
    }

    for frequency in frequencies {
        aerodrome.add_frequency(FacilityFrequency {
            service: service.clone(),
            call_sign: call_sign.clone(),
            frequency: parse_frequency(&frequency)?,
        });
    }

    Ok(())
}
