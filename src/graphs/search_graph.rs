/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{ensure_input, Result};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::io::BufRead;

/// A mutable graph to be searched, with an optional root attachment.
///
/// Nodes are identified by integers in `0..num_nodes()`. Edges are stored in
/// [`BTreeMap`]s, so successors and neighbors are always enumerated in
/// increasing order, and they carry an optional integer label.
///
/// In a directed graph arcs keep their direction for the purpose of
/// [successors](SearchGraph::successors), but [neighbors](SearchGraph::neighbors)
/// and [degrees](SearchGraph::degree) are computed on the symmetric closure:
/// contamination travels along an arc in both directions.
///
/// The *root* is a distinguished extra node added by
/// [`attach_root`](SearchGraph::attach_root): it has exactly one neighbor, the
/// *start* node, from which the search enters the graph.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchGraph {
    directed: bool,
    /// For each node, its successors with the arc label.
    succ: Vec<BTreeMap<usize, Option<i64>>>,
    /// For each node, its neighbors in the symmetric closure.
    adj: Vec<BTreeSet<usize>>,
    num_edges: usize,
    root: Option<usize>,
}

impl SearchGraph {
    /// Creates a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            succ: vec![],
            adj: vec![],
            num_edges: 0,
            root: None,
        }
    }

    /// Creates a new graph with `n` isolated nodes.
    pub fn empty(n: usize, directed: bool) -> Self {
        let mut g = Self::new(directed);
        if n > 0 {
            g.add_node(n - 1);
        }
        g
    }

    /// Creates a graph from a list of unlabeled edges, adding nodes as needed.
    ///
    /// # Panics
    ///
    /// This method will panic if an edge is a self-loop.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>, directed: bool) -> Self {
        Self::from_labeled_edges(edges.into_iter().map(|(u, v)| (u, v, None)), directed)
    }

    /// Creates a graph from a list of edges with optional labels, adding nodes
    /// as needed.
    ///
    /// # Panics
    ///
    /// This method will panic if an edge is a self-loop.
    pub fn from_labeled_edges(
        edges: impl IntoIterator<Item = (usize, usize, Option<i64>)>,
        directed: bool,
    ) -> Self {
        let mut g = Self::new(directed);
        for (u, v, label) in edges {
            g.add_node(u.max(v));
            g.add_labeled_edge(u, v, label);
        }
        g
    }

    /// Reads a graph from an arc list.
    ///
    /// Each non-empty line not starting with `#` contains a source, a target
    /// and optionally an integer label, separated by whitespace. Node
    /// identifiers must be dense: a list of `m` arcs cannot mention a node
    /// larger than `2m - 1`.
    pub fn from_arc_list(reader: impl BufRead, directed: bool) -> Result<Self> {
        let mut edges = vec![];
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                crate::Error::MalformedInput(format!("Could not read line {}: {}", line_num + 1, e))
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields = line.split_whitespace().collect::<Vec<_>>();
            ensure_input!(
                fields.len() == 2 || fields.len() == 3,
                "Line {} should contain a source, a target and an optional label: {:?}",
                line_num + 1,
                line
            );
            let parse = |s: &str| {
                s.parse::<usize>().map_err(|_| {
                    crate::Error::MalformedInput(format!(
                        "Line {}: {:?} is not a node identifier",
                        line_num + 1,
                        s
                    ))
                })
            };
            let (u, v) = (parse(fields[0])?, parse(fields[1])?);
            ensure_input!(u != v, "Line {}: self-loop on node {}", line_num + 1, u);
            let label = match fields.get(2) {
                Some(s) => Some(s.parse::<i64>().map_err(|_| {
                    crate::Error::MalformedInput(format!(
                        "Line {}: {:?} is not an integer label",
                        line_num + 1,
                        s
                    ))
                })?),
                None => None,
            };
            edges.push((u, v, label));
        }
        if let Some(max) = edges.iter().map(|&(u, v, _)| u.max(v)).max() {
            ensure_input!(
                max < 2 * edges.len(),
                "Node identifiers must be dense, but node {} appears in a list of {} arcs",
                max,
                edges.len()
            );
        }
        Ok(Self::from_labeled_edges(edges, directed))
    }

    /// Adds an isolated node to the graph and returns true if it is a new node.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| BTreeMap::new()));
        self.adj.extend((len..=node).map(|_| BTreeSet::new()));
        len <= node
    }

    /// Adds an unlabeled edge and returns whether it is a new one.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes does not exist or if
    /// the edge is a self-loop.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        self.add_labeled_edge(u, v, None)
    }

    /// Adds an edge with an optional label and returns whether it is a new
    /// one. If the edge exists, its label is replaced.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes does not exist or if
    /// the edge is a self-loop.
    pub fn add_labeled_edge(&mut self, u: usize, v: usize, label: Option<i64>) -> bool {
        let max = u.max(v);
        if max >= self.succ.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.succ.len(),
            );
        }
        assert_ne!(u, v, "Self-loops are not allowed (node {u})");
        let new = self.succ[u].insert(v, label).is_none();
        if !self.directed {
            self.succ[v].insert(u, label);
        }
        self.adj[u].insert(v);
        self.adj[v].insert(u);
        self.num_edges += new as usize;
        new
    }

    /// Adds the root node, connected to `start` only, and returns it.
    ///
    /// The root gets the first free identifier, that is, the number of nodes
    /// before the call.
    pub fn attach_root(&mut self, start: usize) -> Result<usize> {
        ensure_input!(self.root.is_none(), "The graph already has a root");
        ensure_input!(
            start < self.num_nodes(),
            "Start node {} does not exist (the graph has {} nodes)",
            start,
            self.num_nodes()
        );
        let root = self.num_nodes();
        self.add_node(root);
        self.add_edge(root, start);
        self.root = Some(root);
        log::debug!("Attached root {} to start node {}", root, start);
        Ok(root)
    }

    /// Returns whether the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of nodes, including the root.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of edges (arcs, if the graph is directed).
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the root, if it has been attached.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Returns the start node, that is, the only neighbor of the root.
    pub fn start(&self) -> Option<usize> {
        self.root
            .and_then(|root| self.adj[root].iter().next().copied())
    }

    /// Returns the successors of a node in increasing order.
    pub fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.succ[node].keys().copied()
    }

    /// Returns the neighbors of a node in the symmetric closure, in increasing
    /// order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[node].iter().copied()
    }

    /// Returns whether `u` and `v` are adjacent in the symmetric closure.
    pub fn are_adjacent(&self, u: usize, v: usize) -> bool {
        self.adj[u].contains(&v)
    }

    /// Returns the degree of a node in the symmetric closure.
    pub fn degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }

    /// Returns the label of the edge from `u` to `v`, or `None` if the edge
    /// does not exist.
    pub fn label(&self, u: usize, v: usize) -> Option<Option<i64>> {
        self.succ[u].get(&v).copied()
    }

    /// Returns an iterator over the edges of the symmetric closure, as
    /// `(min, max)` pairs in lexicographical order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, adj)| adj.range(u + 1..).map(move |&v| (u, v)))
    }

    /// Returns the nodes that cannot be reached from `from` following
    /// successors.
    pub fn unreachable_from(&self, from: usize) -> Vec<usize> {
        self.unreached(from, |node| self.succ[node].keys().copied().collect())
    }

    /// Returns whether the symmetric closure of the graph is a tree.
    pub fn is_tree(&self) -> bool {
        let n = self.num_nodes();
        n > 0
            && self.edges().count() == n - 1
            && self
                .unreached(0, |node| self.adj[node].iter().copied().collect())
                .is_empty()
    }

    fn unreached(&self, from: usize, next: impl Fn(usize) -> Vec<usize>) -> Vec<usize> {
        let mut seen = vec![false; self.num_nodes()];
        let mut queue = VecDeque::from([from]);
        seen[from] = true;
        while let Some(node) = queue.pop_front() {
            for succ in next(node) {
                if !seen[succ] {
                    seen[succ] = true;
                    queue.push_back(succ);
                }
            }
        }
        (0..self.num_nodes()).filter(|&node| !seen[node]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected() {
        let mut g = SearchGraph::from_edges([(0, 1), (1, 2), (2, 0)], false);
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 3);
        assert!(!g.add_edge(1, 0));
        assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 2)]);
        assert!(!g.is_tree());
    }

    #[test]
    fn test_directed_closure() {
        let g = SearchGraph::from_edges([(0, 1), (2, 1)], true);
        assert_eq!(g.successors(1).count(), 0);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(g.degree(1), 2);
        assert!(g.is_tree());
        assert_eq!(g.unreachable_from(0), vec![2]);
    }

    #[test]
    fn test_attach_root() -> Result<()> {
        let mut g = SearchGraph::from_edges([(0, 1), (1, 2)], false);
        let root = g.attach_root(1)?;
        assert_eq!(root, 3);
        assert_eq!(g.root(), Some(3));
        assert_eq!(g.start(), Some(1));
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0, 2, 3]);
        assert!(g.attach_root(0).is_err());
        Ok(())
    }

    #[test]
    fn test_labels() {
        let g = SearchGraph::from_labeled_edges([(0, 1, Some(7)), (1, 2, None)], false);
        assert_eq!(g.label(1, 0), Some(Some(7)));
        assert_eq!(g.label(2, 1), Some(None));
        assert_eq!(g.label(0, 2), None);
    }

    #[test]
    fn test_arc_list() -> Result<()> {
        let text = "# a triangle\n0 1\n1\t2 5\n\n2 0\n";
        let g = SearchGraph::from_arc_list(text.as_bytes(), false)?;
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.label(2, 1), Some(Some(5)));
        assert!(SearchGraph::from_arc_list("0 0\n".as_bytes(), false).is_err());
        assert!(SearchGraph::from_arc_list("0 x\n".as_bytes(), false).is_err());
        assert!(SearchGraph::from_arc_list("0 1 2 3\n".as_bytes(), false).is_err());
        Ok(())
    }

    #[test]
    fn test_arc_list_sparse_ids() -> Result<()> {
        for text in ["0 18446744073709551615\n", "0 5000000000\n", "0 1\n1 4\n"] {
            assert!(matches!(
                SearchGraph::from_arc_list(text.as_bytes(), false),
                Err(crate::Error::MalformedInput(_))
            ));
        }
        // Isolated nodes are fine as long as identifiers stay dense
        let g = SearchGraph::from_arc_list("0 1\n1 3\n".as_bytes(), false)?;
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.degree(2), 0);
        Ok(())
    }
}
