/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Protocol, SearchState};
use crate::error::{ensure_invariant, Result};
use crate::tree::SpanningTree;
use std::collections::BTreeSet;

/// The guard extension of the search.
///
/// A searcher leaving alone an endpoint of a non-tree edge that still has
/// unvisited neighbors in the graph would expose the node to contamination
/// through the non-tree edge. In this case the node is recorded as a request,
/// and at the end of the round, if the node is still exposed, a guard is
/// stationed on it.
///
/// Guards are partitioned in two classes depending on the number of unvisited
/// neighbors of the node they guard: class 0 contains idle guards at the root,
/// and class 1 contains guards with a single unvisited neighbor. Guards on
/// nodes with two or more unvisited neighbors are unclassified. When a node is
/// visited the guards on its neighbors are reclassified, and a guard whose
/// node has no unvisited neighbors left goes back to the root.
#[derive(Clone, Debug)]
pub struct Guards {
    root: usize,
    /// Whether each node is an endpoint of a non-tree edge.
    endpoints: Vec<bool>,
    /// The location of each guard.
    locations: Vec<usize>,
    /// The number of guards on each node.
    occupancy: Vec<usize>,
    classes: [BTreeSet<usize>; 2],
    /// Nodes that asked for a guard during the current round.
    requests: BTreeSet<usize>,
    num_calls: usize,
}

impl Guards {
    /// Creates the protocol for a search on `tree`, with no guards.
    pub fn new(tree: &SpanningTree) -> Self {
        Self {
            root: tree.root(),
            endpoints: tree.non_tree_endpoints(),
            locations: vec![],
            occupancy: vec![0; tree.num_nodes()],
            classes: [BTreeSet::new(), BTreeSet::new()],
            requests: BTreeSet::new(),
            num_calls: 0,
        }
    }

    /// Returns the number of guards allocated so far.
    pub fn num_guards(&self) -> usize {
        self.locations.len()
    }

    /// Returns the number of times a guard has been stationed on a node.
    pub fn num_calls(&self) -> usize {
        self.num_calls
    }

    /// Returns the location of each guard.
    pub fn locations(&self) -> &[usize] {
        &self.locations
    }

    /// Returns the number of guards on a node.
    pub fn occupancy(&self, node: usize) -> usize {
        self.occupancy[node]
    }

    /// Returns the number of guards on every node.
    pub fn occupancies(&self) -> &[usize] {
        &self.occupancy
    }

    /// Returns the guards in the given class (0 or 1).
    pub fn class(&self, class: usize) -> &BTreeSet<usize> {
        &self.classes[class]
    }

    /// Stations a guard on `node`.
    ///
    /// An idle guard is preferred; otherwise a class-1 guard on a neighbor of
    /// `node`; otherwise a new guard is allocated at the root.
    pub fn call_guard(&mut self, state: &SearchState<'_>, node: usize) -> Result<()> {
        ensure_invariant!(
            node != self.root,
            "A guard was called at the root {}",
            node
        );

        let guard = match self.classes[0].pop_first() {
            Some(guard) => Some(guard),
            None => state.tree().graph().neighbors(node).find_map(|n| {
                self.classes[1]
                    .iter()
                    .copied()
                    .find(|&guard| self.locations[guard] == n)
            }),
        };
        let guard = match guard {
            Some(guard) => guard,
            None => self.allocate()?,
        };

        self.station(state, guard, node)?;
        self.num_calls += 1;
        log::debug!(
            "Guard {} stationed at node {} ({} guards)",
            guard,
            node,
            self.num_guards()
        );
        Ok(())
    }

    fn allocate(&mut self) -> Result<usize> {
        ensure_invariant!(
            self.occupancy[self.root] == 0,
            "Allocating a guard while {} guards are idle at the root",
            self.occupancy[self.root]
        );
        self.locations.push(self.root);
        self.occupancy[self.root] += 1;
        Ok(self.locations.len() - 1)
    }

    fn release(&mut self, guard: usize) {
        let from = self.locations[guard];
        self.occupancy[from] -= 1;
        self.locations[guard] = self.root;
        self.occupancy[self.root] += 1;
    }

    fn station(&mut self, state: &SearchState<'_>, guard: usize, node: usize) -> Result<()> {
        self.release(guard);
        self.classes[0].remove(&guard);
        self.classes[1].remove(&guard);

        let degree = state.unvisited_degree_graph(node);
        ensure_invariant!(
            degree > 0,
            "Guard {} stationed at node {}, which has no unvisited neighbors",
            guard,
            node
        );
        if degree == 1 {
            self.classes[1].insert(guard);
        }

        self.occupancy[self.root] -= 1;
        self.locations[guard] = node;
        self.occupancy[node] += 1;
        Ok(())
    }
}

impl Protocol for Guards {
    fn can_move(&mut self, state: &SearchState<'_>, node: usize, base: bool) -> Result<bool> {
        ensure_invariant!(
            node == self.root || state.unvisited_degree_graph(node) > 0 || self.occupancy[node] == 0,
            "Node {} has no unvisited neighbors but {} guards",
            node,
            self.occupancy[node]
        );

        if base
            && self.endpoints[node]
            && state.unvisited_degree_graph(node) > 0
            && self.occupancy[node] == 0
            && state.occupancy(node) == 1
        {
            self.requests.insert(node);
        }
        Ok(base)
    }

    fn on_visit(&mut self, state: &SearchState<'_>, node: usize) -> Result<()> {
        for neighbor in state.tree().graph().neighbors(node) {
            let degree = state.unvisited_degree_graph(neighbor);
            if neighbor == self.root || degree >= 2 || self.occupancy[neighbor] == 0 {
                continue;
            }
            let guards = (0..self.locations.len())
                .filter(|&guard| self.locations[guard] == neighbor)
                .collect::<Vec<_>>();
            for guard in guards {
                self.classes[1 - degree].remove(&guard);
                self.classes[degree].insert(guard);
                if degree == 0 {
                    self.release(guard);
                    log::debug!("Guard {} released from node {}", guard, neighbor);
                }
            }
        }
        Ok(())
    }

    fn on_round_end(&mut self, state: &SearchState<'_>) -> Result<()> {
        for node in std::mem::take(&mut self.requests) {
            if state.unvisited_degree_graph(node) > 0
                && self.occupancy[node] == 0
                && state.occupancy(node) == 0
            {
                self.call_guard(state, node)?;
            }
        }
        Ok(())
    }

    fn guards(&self) -> Option<&Guards> {
        Some(self)
    }
}
