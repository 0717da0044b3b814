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

//! eAIP parsing engine.
//!
//! This crate turns the tables of an electronic Aeronautical Information
//! Publication (eAIP) into airspaces, navaids, aerodromes with their runways
//! and designated points. The published values follow fixed grammars that
//! are parsed by the functions in [`fields`]. Lateral limits are resolved
//! into a [`Boundary`] by the [`boundary`] module, which also substitutes the
//! state border for boundaries running `along the state border`.
//!
//! A [`Document`] parses the records of one section as described by its
//! [`SectionKind`]. Records that don't match their grammar are reported as
//! [`StructuralError`] while the remaining records are parsed anyway.
//!
//! # Examples
//!
//! ```
//! use eaip::{Boundary, Document, ParseOptions, SectionKind};
//!
//! # fn main() -> Result<(), eaip::Error> {
//! let enr_5_1 = r#"<e:Sub-section xmlns:e="http://www.eurocontrol.int/xsd/aip" xmlns:x="http://www.w3.org/1999/xhtml">
//!   <x:table><x:tbody>
//!     <x:tr>
//!       <x:td><x:p>LHP1 / BUDAPEST</x:p><x:p>A circle radius 3 KM centered on 473000N 0190300E</x:p></x:td>
//!       <x:td>FL195 / GND</x:td>
//!     </x:tr>
//!     <x:tr>
//!       <x:td><x:p>LHP2 / PAKS</x:p><x:p>A circle radius 3 KM around 463800N 0185100E</x:p></x:td>
//!       <x:td>FL195 / GND</x:td>
//!     </x:tr>
//!   </x:tbody></x:table>
//! </e:Sub-section>"#;
//!
//! let document = Document::new(ParseOptions::default());
//! let data = document.parse_xml(SectionKind::Airspace, enr_5_1)?;
//!
//! // the first airspace is a circle
//! let lhp1 = &data.airspaces()[0];
//! assert!(matches!(lhp1.boundary, Boundary::Circle { .. }));
//!
//! // while the second one misses the center
//! assert_eq!(data.errors()[0].key, "LHP2");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod boundary;
mod document;
mod error;
pub mod fields;
mod geom;
pub mod measurements;
pub mod model;
mod node;
mod sections;

pub use document::{live_records, Document, ParseOptions, ParsedData, DEFAULT_CIRCLE_POINTS};
pub use error::{Error, StructuralError, Warning};
pub use geom::{Boundary, Coordinate};
pub use node::Node;
pub use sections::{Context, Feature, SectionKind};
