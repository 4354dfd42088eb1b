/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![allow(dead_code)]

use anyhow::Result;
use gsst::prelude::*;

/// Returns the tree formed by the given edges, entered from node 0.
///
/// The graph has no edges other than the given ones, so the tree has no
/// non-tree edges.
pub fn tree(edges: &[(usize, usize)]) -> Result<SpanningTree> {
    let mut graph = SearchGraph::from_edges(edges.iter().copied(), false);
    graph.attach_root(0)?;
    let edges = graph.edges().collect::<Vec<_>>();
    Ok(SpanningTree::from_tree_edges(&graph, edges)?)
}

/// Path `0 - 1 - ... - n-1`, entered from 0; the root is `n`.
pub fn path(n: usize) -> Result<SpanningTree> {
    tree(&(1..n).map(|i| (i - 1, i)).collect::<Vec<_>>())
}

/// Star with center 0 and leaves `1..=leaves`; the root is `leaves + 1`.
pub fn star(leaves: usize) -> Result<SpanningTree> {
    tree(&(1..=leaves).map(|i| (0, i)).collect::<Vec<_>>())
}

/// Two branches below the start node 0, `0 - 1 - 2` and `0 - 3 - 4 - 5 - 6`,
/// whose leaves 2 and 6 are joined by a non-tree edge; the root is 7.
pub fn leaf_chord() -> Result<SpanningTree> {
    let tree_edges = [(0, 1), (1, 2), (0, 3), (3, 4), (4, 5), (5, 6)];
    let mut graph = SearchGraph::from_edges(tree_edges.iter().copied(), false);
    graph.add_edge(2, 6);
    let root = graph.attach_root(0)?;
    Ok(SpanningTree::from_tree_edges(
        &graph,
        tree_edges.iter().copied().chain([(root, 0)]),
    )?)
}

/// A random connected graph from [`RandomConnected::with_random_size`],
/// entered from node 0.
pub fn random_graph(seed: u64) -> Result<SearchGraph> {
    let mut graph = RandomConnected::with_random_size(seed).graph();
    graph.attach_root(0)?;
    Ok(graph)
}
