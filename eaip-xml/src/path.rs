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

/// One step of a [`Path`], e.g. `td[3]`.
#[derive(Debug)]
struct Step<'p> {
    name: &'p str,
    position: Option<usize>,
}

impl<'p> Step<'p> {
    fn parse(s: &'p str) -> Option<Self> {
        match s.strip_suffix(']').and_then(|s| s.split_once('[')) {
            Some((name, position)) => {
                let position = position.trim().parse::<usize>().ok().filter(|&p| p > 0)?;
                Some(Self {
                    name,
                    position: Some(position),
                })
            }
            None => Some(Self {
                name: s,
                position: None,
            }),
        }
    }

    fn matches(&self, node: &Node) -> bool {
        node.is_element() && (self.name == "*" || self.name == node.tag_name().name())
    }

    fn apply<'a, 'input>(&self, context: Node<'a, 'input>, deep: bool) -> Vec<Node<'a, 'input>> {
        let mut matching: Box<dyn Iterator<Item = Node<'a, 'input>>> = if deep {
            // the first descendant is the context itself
            Box::new(context.descendants().skip(1).filter(|n| self.matches(n)))
        } else {
            Box::new(context.children().filter(|n| self.matches(n)))
        };

        match self.position {
            Some(position) => matching.nth(position - 1).into_iter().collect(),
            None => matching.collect(),
        }
    }
}

/// A parsed relative path.
#[derive(Debug)]
struct Path<'p> {
    descendant: bool,
    steps: Vec<Step<'p>>,
}

impl<'p> Path<'p> {
    fn parse(s: &'p str) -> Option<Self> {
        let s = s.trim();
        let (descendant, s) = match s.strip_prefix("//") {
            Some(s) => (true, s),
            None => (false, s),
        };

        let steps = s
            .split('/')
            .filter(|step| !step.is_empty())
            .map(Step::parse)
            .collect::<Option<Vec<_>>>()?;

        Some(Self { descendant, steps })
    }

    fn select<'a, 'input>(&self, root: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
        let mut current = vec![root];

        for (i, step) in self.steps.iter().enumerate() {
            let deep = self.descendant && i == 0;
            current = current
                .into_iter()
                .flat_map(|node| step.apply(node, deep))
                .collect();
        }

        current
    }
}

/// Returns all elements matching the relative `path` in document order.
///
/// A path is a `/` separated list of steps. Each step is a local element name
/// or `*` for any element, optionally followed by a one-based position like
/// `td[3]`. The position counts the matching children of each parent. A
/// leading `//` matches the first step against all descendants instead of the
/// children only.
///
/// An empty path selects the node itself and an invalid path selects nothing.
pub fn find_all<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Vec<Node<'a, 'input>> {
    Path::parse(path)
        .map(|path| path.select(node))
        .unwrap_or_default()
}

/// Returns the first element matching the relative `path`.
pub fn find<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    find_all(node, path).into_iter().next()
}
