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

use super::{required, text, Context};
use crate::boundary::parse_boundary;
use crate::fields::{parse_elevation, strip_prefix_ignore_case, strip_suffix_ignore_case};
use crate::measurements::Elevation;
use crate::model::{Airspace, AirspaceBuilder, AirspaceClass, AirspaceType};
use crate::{Boundary, Error, Node, Warning};

/// Conjunction of the blocks of a joined airspace.
const JOINED_BY: &str = " and ";

/// Splits a label `DESIGNATOR / NAME` at the first `/`.
///
/// A label without `/` is used as designator and name.
fn parse_label(label: &str) -> (String, String) {
    match label.split_once('/') {
        Some((designator, name)) => (designator.trim().to_string(), name.trim().to_string()),
        None => (label.trim().to_string(), label.trim().to_string()),
    }
}

/// Returns the key of an airspace record from its label.
pub(super) fn label_key(label: &str) -> String {
    parse_label(label).0
}

/// Parses vertical limits given as `UPPER / LOWER`.
///
/// If the cell has no `/`, upper and lower limit are read from its first and
/// second paragraph.
fn parse_limits<N: Node>(record: &N, cell: &str) -> Result<(Elevation, Elevation), Error> {
    let limits = required(record, cell, "vertical limits")?;

    if let Some((upper, lower)) = limits.split_once('/') {
        return Ok((parse_elevation(upper)?, parse_elevation(lower)?));
    }

    match (
        text(record, &format!("{cell}/p[1]")),
        text(record, &format!("{cell}/p[2]")),
    ) {
        (Some(upper), Some(lower)) => Ok((parse_elevation(&upper)?, parse_elevation(&lower)?)),
        _ => Err(Error::MissingAnchor {
            field: "vertical limits".to_string(),
            anchor: "/",
        }),
    }
}

fn split_limits(limits: &str) -> Result<(Elevation, Elevation), Error> {
    let (upper, lower) = limits.split_once('/').ok_or_else(|| Error::MissingAnchor {
        field: "vertical limits".to_string(),
        anchor: "/",
    })?;

    Ok((parse_elevation(upper)?, parse_elevation(lower)?))
}

/// Reads a generic ENR 5 airspace row into a builder.
///
/// The first cell holds the label and the boundary, the second the vertical
/// limits and the third the remarks and active time.
pub(super) fn airspace_builder<N: Node>(
    record: &N,
    ctx: &mut Context,
) -> Result<AirspaceBuilder, Error> {
    let (designator, name) = parse_label(&required(record, "td[1]/p[1]", "designator")?);

    let boundary = parse_boundary(
        &designator,
        &required(record, "td[1]/p[2]", "boundary")?,
        ctx.border,
        &mut ctx.warnings,
    )?;
    let (upper, lower) = parse_limits(record, "td[2]")?;

    let mut airspace = AirspaceBuilder::new();
    airspace
        .designator(designator)
        .name(name)
        .upper(upper)
        .lower(lower)
        .boundary(boundary)
        .remarks(text(record, "td[3]/p[1]"))
        .active_time(text(record, "td[3]/p[2]"));

    Ok(airspace)
}

pub(super) fn parse_airspace<N: Node>(record: &N, ctx: &mut Context) -> Result<Airspace, Error> {
    airspace_builder(record, ctx)?.build()
}

/// Parses an airspace whose boundary and limits may consist of several
/// blocks joined by ` and `.
///
/// The limits of the first block are used for the whole airspace.
pub(super) fn parse_joined_airspace<N: Node>(
    record: &N,
    ctx: &mut Context,
) -> Result<Airspace, Error> {
    let (designator, name) = parse_label(&required(record, "td[1]/p[1]", "designator")?);

    let blocks = required(record, "td[1]/p[2]", "boundary")?
        .split(JOINED_BY)
        .map(|block| parse_boundary(&designator, block, ctx.border, &mut ctx.warnings))
        .collect::<Result<Vec<_>, _>>()?;

    let limits = required(record, "td[2]", "vertical limits")?;
    let mut limits = limits.split(JOINED_BY);
    let used = limits.next().unwrap_or_default();
    let (upper, lower) = split_limits(used)?;

    for other in limits {
        if split_limits(other)? != (upper, lower) {
            ctx.warn(Warning::DivergingLimits {
                key: designator.clone(),
                used: used.trim().to_string(),
                ignored: other.trim().to_string(),
            });
        }
    }

    AirspaceBuilder::new()
        .designator(designator)
        .name(name)
        .upper(upper)
        .lower(lower)
        .boundary(Boundary::Compound(blocks))
        .remarks(text(record, "td[3]/p[1]"))
        .active_time(text(record, "td[3]/p[2]"))
        .build()
}

/// Parses a flight information region that is bounded by the state border.
pub(super) fn parse_border_airspace<N: Node>(
    record: &N,
    ctx: &mut Context,
) -> Result<Airspace, Error> {
    let (designator, name) = parse_label(&required(record, "td[1]/p[1]", "designator")?);
    let border = ctx.border.ok_or(Error::MissingBorder)?;

    if border.len() < 3 {
        return Err(Error::TooFewPoints {
            field: designator,
            count: border.len(),
        });
    }

    let (upper, lower) = parse_limits(record, "td[2]")?;

    AirspaceBuilder::new()
        .designator(designator)
        .name(name)
        .airspace_type(AirspaceType::FIR)
        .upper(upper)
        .lower(lower)
        .boundary(Boundary::Ring(border.to_vec()))
        .remarks(text(record, "td[3]"))
        .build()
}

/// Parses a controlled airspace of ENR 2.1.
///
/// The first cell holds the name, the boundary and the vertical limits as
/// paragraphs, followed by cells of the class, the providing unit, the
/// frequencies and the remarks.
pub(super) fn parse_controlled_airspace<N: Node>(
    record: &N,
    ctx: &mut Context,
) -> Result<Airspace, Error> {
    let name = required(record, "td[1]/p[1]", "name")?;

    let boundary = parse_boundary(
        &name,
        &required(record, "td[1]/p[2]", "boundary")?,
        ctx.border,
        &mut ctx.warnings,
    )?;
    let (upper, lower) = split_limits(&required(record, "td[1]/p[3]", "vertical limits")?)?;

    AirspaceBuilder::new()
        .airspace_type(AirspaceType::from_name(&name))
        .name(name)
        .class(text(record, "td[2]").and_then(|class| AirspaceClass::from_label(&class)))
        .upper(upper)
        .lower(lower)
        .boundary(boundary)
        .operator(text(record, "td[3]"))
        .frequency(text(record, "td[4]").and_then(|f| normalize_frequencies(&f)))
        .remarks(text(record, "td[5]"))
        .build()
}

/// Normalizes the spacing of a comma separated list of frequencies.
///
/// Every entry is kept with its call signs and qualifiers. Only the units
/// are separated from their values like `125.350 MHz`, `CH 47X` or
/// `UHF 264.400`.
fn normalize_frequencies(text: &str) -> Option<String> {
    let entries: Vec<String> = text
        .split(|c: char| c == ',' || c == ';')
        .map(|entry| {
            entry
                .split_whitespace()
                .flat_map(split_unit)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|entry| !entry.is_empty())
        .collect();

    (!entries.is_empty()).then(|| entries.join(", "))
}

/// Splits a word into its value and unit like `125.350MHz` or `CH47X`.
fn split_unit(word: &str) -> Vec<String> {
    if word.eq_ignore_ascii_case("MHz") {
        return vec!["MHz".to_string()];
    }

    let value = strip_suffix_ignore_case(word, "MHz")
        .filter(|value| value.ends_with(|c: char| c.is_ascii_digit()));
    if let Some(value) = value {
        return vec![value.to_string(), "MHz".to_string()];
    }

    for unit in ["CH", "UHF"] {
        let value = strip_prefix_ignore_case(word, unit)
            .filter(|value| value.starts_with(|c: char| c.is_ascii_digit()));
        if let Some(value) = value {
            return vec![unit.to_string(), value.to_string()];
        }
    }

    vec![word.to_string()]
}
