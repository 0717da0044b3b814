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

use std::error;
use std::fmt;

/// Error that aborts the parsing of a single record.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A required cell or attribute is missing or blank.
    MissingField(&'static str),
    /// A value doesn't match its grammar.
    InvalidValue { field: String, value: String },
    /// A phrase the grammar is anchored on couldn't be found.
    MissingAnchor {
        field: String,
        anchor: &'static str,
    },
    /// A ring has fewer than three points.
    TooFewPoints { field: String, count: usize },
    /// Declared distances reference a runway that isn't listed.
    UnknownRunway(String),
    /// Two tables that are paired by row have a different number of rows.
    RowCountMismatch { expected: usize, actual: usize },
    /// The navaid type label isn't known.
    UnknownNavaidType(String),
    /// The boundary is the border but no border was supplied.
    MissingBorder,
    /// The document tree couldn't be read.
    Tree(String),
}

impl Error {
    pub(crate) fn invalid(field: &str, value: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: \"{value}\"")
            }
            Self::MissingAnchor { field, anchor } => {
                write!(f, "{field} should contain \"{anchor}\"")
            }
            Self::TooFewPoints { field, count } => {
                write!(f, "{field} should have at least 3 points but has {count}")
            }
            Self::UnknownRunway(designator) => write!(f, "unknown runway {designator}"),
            Self::RowCountMismatch { expected, actual } => {
                write!(f, "table should have {expected} rows but has {actual}")
            }
            Self::UnknownNavaidType(label) => write!(f, "unknown navaid type \"{label}\""),
            Self::MissingBorder => write!(f, "boundary follows the border but none is available"),
            Self::Tree(e) => write!(f, "document error: {e}"),
        }
    }
}

impl error::Error for Error {}

impl From<eaip_xml::Error> for Error {
    fn from(e: eaip_xml::Error) -> Self {
        Self::Tree(e.to_string())
    }
}

/// An [`Error`] tagged with the natural key of the record that failed.
///
/// The key is the designator, ICAO code or navaid id of the record and falls
/// back to `#<index>` if the record has none.
#[derive(Clone, PartialEq, Debug)]
pub struct StructuralError {
    pub key: String,
    pub error: Error,
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.error)
    }
}

impl error::Error for StructuralError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Advisory finding that doesn't stop a record from being parsed.
#[derive(Clone, PartialEq, Debug)]
pub enum Warning {
    /// A boundary follows the border but no border polyline was supplied.
    /// The border segment is omitted from the ring.
    BorderUnavailable { key: String },
    /// The blocks of a joined airspace have different vertical limits. The
    /// limits of the first block are used.
    DivergingLimits {
        key: String,
        used: String,
        ignored: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BorderUnavailable { key } => {
                write!(f, "{key}: border segment omitted since no border is available")
            }
            Self::DivergingLimits { key, used, ignored } => {
                write!(f, "{key}: using limits \"{used}\" and ignoring \"{ignored}\"")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_tagged_error() {
        let e = StructuralError {
            key: "LHP1".to_string(),
            error: Error::MissingAnchor {
                field: "boundary".to_string(),
                anchor: "centered on",
            },
        };

        assert_eq!(
            e.to_string(),
            "LHP1: boundary should contain \"centered on\""
        );
    }
}
