/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use gsst::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::collections::BTreeSet;

#[test]
fn test_random_graphs() -> Result<()> {
    for seed in 0..50 {
        let graph = common::random_graph(seed)?;
        let tree = random_depth_first(&graph, &mut SmallRng::seed_from_u64(seed))?;
        let n = graph.num_nodes();
        let root = graph.root().unwrap();

        assert_eq!(tree.root(), root);
        assert_eq!(tree.start(), 0);
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.parent(0), Some(root));
        assert_eq!(tree.children(root), &[0]);

        let tree_edges = tree
            .tree_edges()
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect::<BTreeSet<_>>();
        assert_eq!(tree_edges.len(), n - 1);
        assert!(tree_edges.is_disjoint(tree.non_tree_edges()));

        // Tree and non-tree edges partition the edges of the graph
        let all = tree_edges
            .union(tree.non_tree_edges())
            .copied()
            .collect::<BTreeSet<_>>();
        assert_eq!(all, graph.edges().collect::<BTreeSet<_>>());

        // Every node reaches the root following parents
        for node in 0..n {
            let mut curr = node;
            let mut steps = 0;
            while let Some(parent) = tree.parent(curr) {
                assert!(graph.are_adjacent(curr, parent));
                curr = parent;
                steps += 1;
                assert!(steps < n);
            }
            assert_eq!(curr, root);
        }
    }
    Ok(())
}

#[test]
fn test_deterministic() -> Result<()> {
    let graph = common::random_graph(7)?;
    let a = random_depth_first(&graph, &mut SmallRng::seed_from_u64(3))?;
    let b = random_depth_first(&graph, &mut SmallRng::seed_from_u64(3))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_tree_graph() -> Result<()> {
    // If the graph is a tree, there is a single spanning tree
    let graph = RandomConnected::new(20, 1, 0);
    let mut graph = graph.graph();
    assert!(graph.is_tree());
    graph.attach_root(0)?;
    for seed in 0..10 {
        let tree = random_depth_first(&graph, &mut SmallRng::seed_from_u64(seed))?;
        assert!(tree.non_tree_edges().is_empty());
    }
    Ok(())
}

#[test]
fn test_directed() -> Result<()> {
    // 2 can only be reached through 0 -> 2
    let mut graph = SearchGraph::from_edges([(0, 1), (2, 1), (0, 2)], true);
    let root = graph.attach_root(0)?;
    for seed in 0..10 {
        let tree = random_depth_first(&graph, &mut SmallRng::seed_from_u64(seed))?;
        assert_eq!(tree.parent(0), Some(root));
        assert_eq!(tree.parent(2), Some(0));
        assert_eq!(tree.non_tree_edges().len(), 1);
    }

    // 2 cannot be reached at all
    let mut graph = SearchGraph::from_edges([(0, 1), (2, 1)], true);
    graph.attach_root(0)?;
    assert!(matches!(
        random_depth_first(&graph, &mut SmallRng::seed_from_u64(0)),
        Err(Error::MalformedInput(_))
    ));
    Ok(())
}

#[test]
fn test_explicit_tree() -> Result<()> {
    let tree = common::leaf_chord()?;
    assert_eq!(tree.root(), 7);
    assert_eq!(
        tree.non_tree_edges().iter().copied().collect::<Vec<_>>(),
        vec![(2, 6)]
    );
    assert_eq!(tree.children(0), &[1, 3]);
    let endpoints = tree.non_tree_endpoints();
    assert_eq!(
        (0..8).filter(|&node| endpoints[node]).collect::<Vec<_>>(),
        vec![2, 6]
    );
    Ok(())
}
