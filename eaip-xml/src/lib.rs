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

//! eAIP XML document queries.
//!
//! The eAIP is published as XHTML-like tables wrapped in section elements.
//! This crate reads such a document with [roxmltree] and answers the queries
//! a section parser needs: select the elements at a relative path and read
//! their text.
//!
//! Element names are matched by their local name, so `e:Sub-section` and
//! `x:tr` are matched as `Sub-section` and `tr`.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), eaip_xml::Error> {
//! let document = eaip_xml::parse(
//!     r#"<x:table xmlns:x="http://www.w3.org/1999/xhtml">
//!          <x:tr><x:td>LHP1 / BUDAPEST</x:td><x:td>FL195 / GND</x:td></x:tr>
//!        </x:table>"#,
//! )?;
//!
//! let rows = eaip_xml::find_all(document.root_element(), "tr");
//! assert_eq!(rows.len(), 1);
//! assert_eq!(eaip_xml::text_at(rows[0], "td[2]").as_deref(), Some("FL195 / GND"));
//! # Ok(())
//! # }
//! ```
//!
//! [roxmltree]: https://docs.rs/roxmltree

mod error;
mod path;
mod text;

pub use error::Error;
pub use path::{find, find_all};
pub use roxmltree;
pub use roxmltree::{Document, Node};
pub use text::{text, text_at};

/// Parses an XML document.
///
/// Document type declarations are allowed since eAIP files often carry one.
///
/// # Errors
///
/// Returns an error if the XML is malformed.
pub fn parse(xml: &str) -> Result<Document<'_>, Error> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };

    Ok(Document::parse_with_options(xml, options)?)
}
