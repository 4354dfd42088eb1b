/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{ensure_invariant, Result};
use crate::tree::SpanningTree;
use std::collections::BTreeSet;

/// Visitation and searcher bookkeeping shared by all search variants.
///
/// The state tracks which nodes have been visited and, for each node, how
/// many of its neighbors are still unvisited, both in the graph (symmetric
/// closure) and in the tree. It also owns the searcher pool: the location of
/// each searcher and the number of searchers on each node.
///
/// Initially only the root is visited, and there are no searchers.
#[derive(Clone, Debug)]
pub struct SearchState<'a> {
    tree: &'a SpanningTree,
    visited: Vec<bool>,
    to_visit: BTreeSet<usize>,
    unvisited_degree_graph: Vec<usize>,
    unvisited_degree_tree: Vec<usize>,
    searchers: Vec<usize>,
    occupancy: Vec<usize>,
}

impl<'a> SearchState<'a> {
    /// Creates the initial state for a search on `tree`.
    pub fn new(tree: &'a SpanningTree) -> Self {
        let num_nodes = tree.num_nodes();
        let root = tree.root();
        let mut visited = vec![false; num_nodes];
        visited[root] = true;

        let graph = tree.graph();
        let unvisited_degree_graph = (0..num_nodes)
            .map(|node| graph.neighbors(node).filter(|&n| !visited[n]).count())
            .collect();
        let unvisited_degree_tree = (0..num_nodes)
            .map(|node| tree.tree_neighbors(node).filter(|&n| !visited[n]).count())
            .collect();

        Self {
            tree,
            to_visit: (0..num_nodes).filter(|&node| node != root).collect(),
            visited,
            unvisited_degree_graph,
            unvisited_degree_tree,
            searchers: vec![],
            occupancy: vec![0; num_nodes],
        }
    }

    /// Returns the tree being searched.
    pub fn tree(&self) -> &'a SpanningTree {
        self.tree
    }

    /// Returns the number of nodes, including the root.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.visited.len()
    }

    /// Returns whether a node has been visited.
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited[node]
    }

    /// Returns the visited flag of every node.
    pub fn visited(&self) -> &[bool] {
        &self.visited
    }

    /// Returns the nodes still to visit, in increasing order.
    pub fn to_visit(&self) -> &BTreeSet<usize> {
        &self.to_visit
    }

    /// Returns whether all nodes have been visited.
    pub fn is_cleared(&self) -> bool {
        self.to_visit.is_empty()
    }

    /// Returns the number of unvisited neighbors of a node in the graph.
    #[inline(always)]
    pub fn unvisited_degree_graph(&self, node: usize) -> usize {
        self.unvisited_degree_graph[node]
    }

    /// Returns the number of unvisited neighbors of a node in the tree.
    #[inline(always)]
    pub fn unvisited_degree_tree(&self, node: usize) -> usize {
        self.unvisited_degree_tree[node]
    }

    /// Returns the location of each searcher.
    pub fn searchers(&self) -> &[usize] {
        &self.searchers
    }

    /// Returns the number of searchers.
    pub fn num_searchers(&self) -> usize {
        self.searchers.len()
    }

    /// Returns the number of searchers on a node.
    #[inline(always)]
    pub fn occupancy(&self, node: usize) -> usize {
        self.occupancy[node]
    }

    /// Returns the number of searchers on every node.
    pub fn occupancies(&self) -> &[usize] {
        &self.occupancy
    }

    /// Adds a searcher at the root and returns its index.
    pub fn spawn_searcher(&mut self) -> usize {
        let root = self.tree.root();
        self.searchers.push(root);
        self.occupancy[root] += 1;
        self.searchers.len() - 1
    }

    /// Returns whether a searcher may leave `node`.
    ///
    /// A searcher may always leave a node shared with other searchers; a
    /// lone searcher may leave only if at most one tree neighbor of its node
    /// is unvisited.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`](crate::Error::InvariantViolation) if no
    /// searcher is on `node`.
    pub fn can_move(&self, node: usize) -> Result<bool> {
        ensure_invariant!(
            self.occupancy[node] > 0,
            "No searcher at node {} (searchers at {:?})",
            node,
            self.searchers
        );
        Ok(self.may_leave(node))
    }

    /// Like [`can_move`](SearchState::can_move), but returns false when the
    /// node is empty.
    pub fn may_leave(&self, node: usize) -> bool {
        match self.occupancy[node] {
            0 => false,
            1 => self.unvisited_degree_tree[node] <= 1,
            _ => true,
        }
    }

    /// Moves a searcher to `node` and returns whether `node` was visited for
    /// the first time.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`](crate::Error::InvariantViolation) if the
    /// occupancy of the current location of the searcher is zero.
    pub fn move_searcher(&mut self, searcher: usize, node: usize) -> Result<bool> {
        let from = self.searchers[searcher];
        ensure_invariant!(
            self.occupancy[from] > 0,
            "Searcher {} is at node {}, whose occupancy is zero",
            searcher,
            from
        );
        self.occupancy[from] -= 1;
        self.occupancy[node] += 1;
        self.searchers[searcher] = node;
        Ok(self.visit(node))
    }

    /// Marks a node as visited, updating the unvisited degrees of its
    /// neighbors, and returns whether it was visited for the first time.
    fn visit(&mut self, node: usize) -> bool {
        if self.visited[node] {
            return false;
        }
        self.visited[node] = true;
        self.to_visit.remove(&node);
        for neighbor in self.tree.graph().neighbors(node) {
            self.unvisited_degree_graph[neighbor] -= 1;
        }
        for neighbor in self.tree.tree_neighbors(node) {
            self.unvisited_degree_tree[neighbor] -= 1;
        }
        log::trace!("Visited node {}", node);
        true
    }

    /// Returns the visited nodes other than the root that have unvisited
    /// neighbors in the graph and no searcher on them, unless `guarded`
    /// says they are guarded.
    pub(crate) fn exposed_nodes(&self, guarded: impl Fn(usize) -> bool) -> Vec<usize> {
        let root = self.tree.root();
        (0..self.num_nodes())
            .filter(|&node| {
                node != root
                    && self.visited[node]
                    && self.unvisited_degree_graph[node] > 0
                    && self.occupancy[node] == 0
                    && !guarded(node)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::SearchGraph;

    fn tree() -> SpanningTree {
        // 0 - 1 - 2 with a chord (0, 2), hanging from root 3
        let mut g = SearchGraph::from_edges([(0, 1), (1, 2), (0, 2)], false);
        g.attach_root(0).unwrap();
        SpanningTree::from_tree_edges(&g, [(3, 0), (0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn test_initial_counters() {
        let t = tree();
        let s = SearchState::new(&t);
        assert!(s.is_visited(3));
        assert_eq!(s.to_visit().iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        // The root is already visited
        assert_eq!(s.unvisited_degree_graph(0), 2);
        assert_eq!(s.unvisited_degree_tree(0), 1);
        assert_eq!(s.unvisited_degree_graph(3), 1);
        assert_eq!(s.unvisited_degree_tree(2), 1);
    }

    #[test]
    fn test_moves() -> Result<()> {
        let t = tree();
        let mut s = SearchState::new(&t);
        assert!(s.can_move(3).is_err());
        assert!(!s.may_leave(3));
        let a = s.spawn_searcher();
        assert!(s.can_move(3)?);
        assert!(s.move_searcher(a, 0)?);
        assert!(!s.move_searcher(a, 3)?);
        assert!(s.move_searcher(a, 0).is_ok());
        assert_eq!(s.unvisited_degree_graph(2), 1);
        assert_eq!(s.unvisited_degree_tree(1), 1);
        assert!(s.move_searcher(a, 1)?);
        assert_eq!(s.occupancies().iter().sum::<usize>(), s.num_searchers());
        assert_eq!(s.unvisited_degree_graph(0), 1);
        assert_eq!(s.exposed_nodes(|_| false), vec![0]);
        assert!(s.exposed_nodes(|node| node == 0).is_empty());
        Ok(())
    }
}
