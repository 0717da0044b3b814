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

use super::required;
use crate::fields::parse_point;
use crate::model::DesignatedPoint;
use crate::{Error, Node};

/// Parses a designated point row of ENR 4.4.
pub(super) fn parse_designated_point<N: Node>(record: &N) -> Result<DesignatedPoint, Error> {
    let ident = required(record, "td[1]", "ident")?;
    let position = parse_point(&ident, &required(record, "td[2]", "position")?)?;

    Ok(DesignatedPoint { ident, position })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_designated_point() {
        let row = eaip_xml::parse("<tr><td>ABETI</td><td>473524N 0170517E</td></tr>")
            .expect("row should parse");

        let point = parse_designated_point(&row.root_element()).expect("point should parse");
        assert_eq!(point.ident, "ABETI");
        assert!((point.position.latitude - (47.0 + 35.0 / 60.0 + 24.0 / 3600.0)).abs() < 1e-9);
    }

    #[test]
    fn fails_without_position() {
        let row = eaip_xml::parse("<tr><td>ABETI</td></tr>").expect("row should parse");
        assert_eq!(
            parse_designated_point(&row.root_element()),
            Err(Error::MissingField("position"))
        );
    }
}
