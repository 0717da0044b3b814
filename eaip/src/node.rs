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

use eaip_xml::roxmltree;

/// Read access to a node of a pre-parsed eAIP document.
///
/// Paths are relative to the node and made of `/` separated local element
/// names. Each name may be followed by a one-based position like `td[3]`,
/// `*` matches any element and a leading `//` searches all descendants for
/// the first step.
pub trait Node: Sized {
    /// Returns the text content with whitespace normalized.
    fn text(&self) -> String;

    /// Returns the text of the first node at the `path`.
    fn text_at(&self, path: &str) -> Option<String>;

    /// Returns all nodes at the `path` in document order.
    fn select(&self, path: &str) -> Vec<Self>;

    /// Returns the value of the attribute with the `name`.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl Node for roxmltree::Node<'_, '_> {
    fn text(&self) -> String {
        eaip_xml::text(*self)
    }

    fn text_at(&self, path: &str) -> Option<String> {
        eaip_xml::text_at(*self, path)
    }

    fn select(&self, path: &str) -> Vec<Self> {
        eaip_xml::find_all(*self, path)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, name)
    }
}
