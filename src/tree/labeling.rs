/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::SpanningTree;

impl SpanningTree {
    /// Labels the tree edges with their clearance order and returns `mu`, the
    /// number of searchers required by the decomposition.
    ///
    /// Nodes are processed from the leaves up: a node is processed once all
    /// its children are. A leaf has order one; an internal node whose children
    /// have maximum order `L` has order `L` if exactly one child attains it,
    /// and `L + 1` otherwise. The order of a node `v` is stored on the arc
    /// from its parent to `v`, and its opposite on the arc from `v` to its
    /// parent, so that searchers follow positive labels down the tree. The
    /// order of the start node is `mu`.
    ///
    /// Labels depend only on the topology of the tree, so calling this method
    /// again yields the same labels.
    pub fn label(&mut self) -> usize {
        let num_nodes = self.num_nodes();
        let mut order = vec![0_usize; num_nodes];
        let mut unresolved = self.children.iter().map(Vec::len).collect::<Vec<_>>();

        let mut stack = (0..num_nodes)
            .filter(|&node| node != self.root && self.children[node].is_empty())
            .collect::<Vec<_>>();

        while let Some(node) = stack.pop() {
            let children = &self.children[node];
            order[node] = match children.iter().map(|&child| order[child]).max() {
                None => 1,
                Some(max) => {
                    let ties = children
                        .iter()
                        .filter(|&&child| order[child] == max)
                        .count();
                    if ties == 1 {
                        max
                    } else {
                        max + 1
                    }
                }
            };

            let parent = self.parent[node].expect("only the root has no parent");
            unresolved[parent] -= 1;
            if unresolved[parent] == 0 && parent != self.root {
                stack.push(parent);
            }
        }

        for node in 0..num_nodes {
            if let Some(parent) = self.parent[node] {
                let order = order[node] as i64;
                self.labels[parent].insert(node, order);
                self.labels[node].insert(parent, -order);
            }
        }

        let mu = order[self.start];
        self.mu = Some(mu);
        log::debug!("Labeled {} tree edges, mu = {}", num_nodes - 1, mu);
        mu
    }
}
