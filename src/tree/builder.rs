/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::SpanningTree;
use crate::error::{ensure_input, ensure_invariant, Result};
use crate::graphs::SearchGraph;
use rand::{seq::IndexedRandom, Rng};
use std::collections::{BTreeSet, VecDeque};

/// Checks that the graph can be decomposed and returns its root and start
/// node.
fn check_rooted(graph: &SearchGraph) -> Result<(usize, usize)> {
    let Some(root) = graph.root() else {
        return Err(crate::Error::MalformedInput(
            "The graph has no root attached".into(),
        ));
    };
    ensure_input!(
        graph.degree(root) == 1,
        "The root {} must have exactly one neighbor, but it has {}",
        root,
        graph.degree(root)
    );
    let start = graph.start().expect("the root has one neighbor");
    let unreachable = graph.unreachable_from(root);
    ensure_input!(
        unreachable.is_empty(),
        "The graph is not connected: {} nodes cannot be reached from the root, e.g., {:?}",
        unreachable.len(),
        &unreachable[..unreachable.len().min(10)]
    );
    Ok((root, start))
}

/// Builds a spanning tree with a randomized depth-first walk from the root.
///
/// At each step the walk moves from the current node to one of its unvisited
/// successors, chosen uniformly at random, recording the traversed edge as a
/// tree edge; if there are no unvisited successors, it backtracks to the parent
/// of the current node. The walk stops when the tree spans the graph, and all
/// remaining edges become non-tree edges.
///
/// The result depends only on the graph and on the state of `rng`.
///
/// # Errors
///
/// Returns [`MalformedInput`](crate::Error::MalformedInput) if the graph has no
/// root, if the root has more than one neighbor, or if some node is not
/// reachable from the root.
pub fn random_depth_first(graph: &SearchGraph, rng: &mut impl Rng) -> Result<SpanningTree> {
    let (root, start) = check_rooted(graph)?;
    let num_nodes = graph.num_nodes();

    let mut visited = vec![false; num_nodes];
    let mut parent = vec![None; num_nodes];
    let mut num_tree_edges = 0;
    let mut unvisited = Vec::with_capacity(16);
    let mut curr = root;

    while num_tree_edges != num_nodes - 1 {
        visited[curr] = true;
        unvisited.clear();
        unvisited.extend(graph.successors(curr).filter(|&succ| !visited[succ]));

        match unvisited.choose(rng) {
            Some(&next) => {
                parent[next] = Some(curr);
                num_tree_edges += 1;
                curr = next;
            }
            None => {
                // Backtrack
                ensure_invariant!(
                    curr != root,
                    "Depth-first walk backtracked past the root with {} tree edges out of {}",
                    num_tree_edges,
                    num_nodes - 1
                );
                curr = parent[curr].expect("only the root has no parent");
            }
        }
    }

    let tree = SpanningTree::from_parents(graph, root, start, parent);
    log::debug!(
        "Built a spanning tree with {} tree edges and {} non-tree edges",
        num_tree_edges,
        tree.non_tree_edges().len()
    );
    Ok(tree)
}

impl SpanningTree {
    /// Builds a spanning tree from an explicit list of tree edges.
    ///
    /// The edges can be given in any order and orientation; all other edges
    /// of the graph become non-tree edges.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInput`](crate::Error::MalformedInput) if the graph
    /// cannot be decomposed (see [`random_depth_first`]), if an edge is not in
    /// the graph or is repeated, or if the edges do not form a spanning tree.
    pub fn from_tree_edges(
        graph: &SearchGraph,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self> {
        let (root, start) = check_rooted(graph)?;
        let num_nodes = graph.num_nodes();

        let mut seen = BTreeSet::new();
        let mut adj = vec![vec![]; num_nodes];
        for (u, v) in edges {
            ensure_input!(
                u < num_nodes && v < num_nodes && graph.are_adjacent(u, v),
                "({}, {}) is not an edge of the graph",
                u,
                v
            );
            ensure_input!(
                seen.insert((u.min(v), u.max(v))),
                "Tree edge ({}, {}) is repeated",
                u,
                v
            );
            adj[u].push(v);
            adj[v].push(u);
        }
        ensure_input!(
            seen.len() == num_nodes - 1,
            "A spanning tree on {} nodes has {} edges, but {} were given",
            num_nodes,
            num_nodes - 1,
            seen.len()
        );

        let mut parent = vec![None; num_nodes];
        let mut reached = vec![false; num_nodes];
        let mut queue = VecDeque::from([root]);
        reached[root] = true;
        while let Some(node) = queue.pop_front() {
            for &next in &adj[node] {
                if !reached[next] {
                    reached[next] = true;
                    parent[next] = Some(node);
                    queue.push_back(next);
                }
            }
        }
        ensure_input!(
            reached.iter().all(|&r| r),
            "The given edges do not form a spanning tree"
        );

        Ok(SpanningTree::from_parents(graph, root, start, parent))
    }
}
