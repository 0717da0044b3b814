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

use roxmltree::Node;

use crate::find;

/// Elements whose content is separated from the surrounding text.
const BLOCKS: [&str; 9] = ["p", "br", "td", "th", "tr", "li", "div", "table", "tbody"];

/// Returns the text content of the `node` and all its descendants.
///
/// Text nodes are concatenated as published, so inline markup within a word
/// like `RWY 05<span>L</span>` reads as `RWY 05L`. Block elements like
/// paragraphs or cells are separated by whitespace. Runs of whitespace then
/// collapse into a single space.
pub fn text(node: Node) -> String {
    let mut raw = String::new();
    collect_text(node, &mut raw);

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the [text] of the first element matching the `path`.
pub fn text_at(node: Node, path: &str) -> Option<String> {
    find(node, path).map(text)
}

fn collect_text(node: Node, raw: &mut String) {
    for child in node.children() {
        if child.is_text() {
            raw.push_str(child.text().unwrap_or_default());
        } else if child.is_element() {
            let block = BLOCKS.contains(&child.tag_name().name());

            if block {
                raw.push(' ');
            }
            collect_text(child, raw);
            if block {
                raw.push(' ');
            }
        }
    }
}
