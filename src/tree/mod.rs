/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Decomposition of a graph into a rooted spanning tree and non-tree edges.
//!
//! A [`SpanningTree`] can be built by a [randomized depth-first
//! walk](random_depth_first) or [from an explicit list of tree
//! edges](SpanningTree::from_tree_edges). Once [labeled](SpanningTree::label),
//! every tree edge carries a clearance order in each direction, and the label
//! of the edge from the root to the start node is the number of searchers
//! `mu` needed by the decomposition.
//!
//! # Examples
//!
//! ```
//! use gsst::graphs::SearchGraph;
//! use gsst::tree::random_depth_first;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! // A triangle hanging from node 0
//! let mut graph = SearchGraph::from_edges([(0, 1), (1, 2), (2, 0)], false);
//! let root = graph.attach_root(0)?;
//!
//! let mut tree = random_depth_first(&graph, &mut SmallRng::seed_from_u64(0))?;
//! assert_eq!(tree.non_tree_edges().len(), 1);
//!
//! let mu = tree.label();
//! assert_eq!(mu, 1);
//! assert_eq!(tree.label_of(root, 0), Some(1));
//! assert_eq!(tree.label_of(0, root), Some(-1));
//! # Ok::<(), gsst::Error>(())
//! ```

mod builder;
pub use builder::*;

mod labeling;

use crate::graphs::SearchGraph;
use std::collections::{BTreeMap, BTreeSet};

/// A rooted spanning tree of a [`SearchGraph`], together with the edges of the
/// graph it does not use.
///
/// The tree owns a copy of its source graph. Its topology is fixed at
/// construction; only labels change, when [`label`](SpanningTree::label) is
/// called.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    graph: SearchGraph,
    root: usize,
    start: usize,
    /// The parent of each node; the root has none.
    parent: Vec<Option<usize>>,
    /// The children of each node, in increasing order.
    children: Vec<Vec<usize>>,
    /// For each node, its tree neighbors with the label of the arc towards
    /// them (zero until the tree is labeled).
    labels: Vec<BTreeMap<usize, i64>>,
    /// Graph edges not in the tree, as `(min, max)` pairs.
    non_tree_edges: BTreeSet<(usize, usize)>,
    mu: Option<usize>,
}

impl SpanningTree {
    /// Builds the tree from a validated graph and the parent of each node.
    fn from_parents(
        graph: &SearchGraph,
        root: usize,
        start: usize,
        parent: Vec<Option<usize>>,
    ) -> Self {
        let n = graph.num_nodes();
        let mut children = vec![vec![]; n];
        let mut labels = vec![BTreeMap::new(); n];
        for (node, &p) in parent.iter().enumerate() {
            if let Some(p) = p {
                children[p].push(node);
                labels[p].insert(node, 0);
                labels[node].insert(p, 0);
            }
        }
        let non_tree_edges = graph
            .edges()
            .filter(|&(u, v)| parent[u] != Some(v) && parent[v] != Some(u))
            .collect();

        Self {
            graph: graph.clone(),
            root,
            start,
            parent,
            children,
            labels,
            non_tree_edges,
            mu: None,
        }
    }

    /// Returns the source graph.
    pub fn graph(&self) -> &SearchGraph {
        &self.graph
    }

    /// Returns the number of nodes, including the root.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.parent.len()
    }

    /// Returns the root.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the start node, the only child of the root.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the parent of a node, or `None` for the root.
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parent[node]
    }

    /// Returns the children of a node in increasing order.
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    /// Returns the tree neighbors of a node in increasing order.
    pub fn tree_neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.labels[node].keys().copied()
    }

    /// Returns the degree of a node in the tree.
    pub fn tree_degree(&self, node: usize) -> usize {
        self.labels[node].len()
    }

    /// Returns the tree arcs leaving a node, with their labels, in increasing
    /// order of target.
    pub fn arcs(&self, node: usize) -> &BTreeMap<usize, i64> {
        &self.labels[node]
    }

    /// Returns the label of the tree arc from `u` to `v`, or `None` if `u` and
    /// `v` are not adjacent in the tree.
    pub fn label_of(&self, u: usize, v: usize) -> Option<i64> {
        self.labels[u].get(&v).copied()
    }

    /// Returns the tree edges as `(parent, child)` pairs, in increasing order
    /// of child.
    pub fn tree_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(node, &p)| p.map(|p| (p, node)))
    }

    /// Returns the graph edges that are not in the tree, as `(min, max)`
    /// pairs.
    pub fn non_tree_edges(&self) -> &BTreeSet<(usize, usize)> {
        &self.non_tree_edges
    }

    /// Returns, for each node, whether it is an endpoint of a non-tree edge.
    pub fn non_tree_endpoints(&self) -> Vec<bool> {
        let mut endpoints = vec![false; self.num_nodes()];
        for &(u, v) in &self.non_tree_edges {
            endpoints[u] = true;
            endpoints[v] = true;
        }
        endpoints
    }

    /// Returns whether [`label`](SpanningTree::label) has been called.
    pub fn is_labeled(&self) -> bool {
        self.mu.is_some()
    }

    /// Returns the number of searchers required by this decomposition, if the
    /// tree has been labeled.
    pub fn mu(&self) -> Option<usize> {
        self.mu
    }

    pub(crate) fn labels(&self) -> &[BTreeMap<usize, i64>] {
        &self.labels
    }
}
