/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::SearchGraph;
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng, SeedableRng};
use std::collections::BTreeSet;

/// Provides random connected undirected graphs with a given average
/// branching factor.
///
/// The graph is generated in two phases: first, a random skeleton tree is
/// grown by attaching each new node to a node chosen uniformly among those
/// already attached; then, distinct extra edges are chosen uniformly among the
/// remaining pairs until the graph has `k * n / 2` edges (or all pairs are
/// used). Thus, the graph is always connected, and its average degree is
/// approximately `k`.
///
/// Generation is deterministic given the seed of the [pseudorandom number
/// generator](SmallRng).
#[derive(Debug, Clone)]
pub struct RandomConnected {
    n: usize,
    k: usize,
    seed: u64,
}

impl RandomConnected {
    /// Creates a new random connected graph, given the number of nodes, the
    /// branching factor and a seed.
    pub fn new(n: usize, k: usize, seed: u64) -> Self {
        assert!(n > 0, "The graph must have at least one node");
        Self { n, k, seed }
    }

    /// Creates a new random connected graph whose number of nodes and branching
    /// factor are drawn from the seed: `n` is in `10..20` and `k` in `2..5`.
    pub fn with_random_size(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let k = rng.random_range(2..5);
        let n = rng.random_range(10..20);
        log::debug!("Random branching factor {}, random number of nodes {}", k, n);
        Self::new(n, k, rng.random())
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Returns the branching factor.
    pub fn branching(&self) -> usize {
        self.k
    }

    /// Returns the edges of the graph as `(min, max)` pairs.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut attached = vec![0];
        let mut to_attach = (1..self.n).collect::<Vec<_>>();
        let mut edges = BTreeSet::new();

        while !to_attach.is_empty() {
            let &u = attached
                .choose(&mut rng)
                .expect("at least one node is attached");
            let v = to_attach.swap_remove(rng.random_range(0..to_attach.len()));
            attached.push(v);
            edges.insert((u.min(v), u.max(v)));
        }

        let skeleton = edges.len();
        let candidates = (0..self.n)
            .flat_map(|u| (u + 1..self.n).map(move |v| (u, v)))
            .filter(|pair| !edges.contains(pair))
            .collect::<Vec<_>>();
        let extra = (self.k * self.n / 2)
            .saturating_sub(skeleton)
            .min(candidates.len());
        edges.extend(candidates.choose_multiple(&mut rng, extra).copied());

        edges.into_iter().collect()
    }

    /// Returns the graph as a [`SearchGraph`] (without a root).
    pub fn graph(&self) -> SearchGraph {
        let mut g = SearchGraph::empty(self.n, false);
        for (u, v) in self.edges() {
            g.add_edge(u, v);
        }
        g
    }
}
