/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use dsi_progress_logger::no_logging;
use gsst::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_path() -> Result<()> {
    let tree = common::path(4)?;
    let config = SearchConfig {
        ceiling_factor: 1000,
        seed: 0,
    };
    let mut search = RandomizedSearch::new(&tree, config);
    let mut searchers = 1;
    let report = search.run_with(no_logging![], |snapshot| {
        // The pool only grows, one searcher at a time
        let num_searchers = snapshot.num_searchers();
        assert!(num_searchers == searchers || num_searchers == searchers + 1);
        searchers = num_searchers;
        assert_eq!(snapshot.num_guards(), 0);
    })?;
    assert_eq!(report.outcome, Outcome::Cleared);
    assert_eq!(report.searchers, searchers);
    assert_eq!(report.guards, None);
    assert!(report.rounds >= 4);
    Ok(())
}

#[test]
fn test_labels_untouched() -> Result<()> {
    let mut tree = common::star(3)?;
    tree.label();
    let config = SearchConfig {
        ceiling_factor: 1000,
        seed: 1,
    };
    let mut search = RandomizedSearch::new(&tree, config);
    let initial = search.snapshot().labels;
    let report = search.run(no_logging![])?;
    assert_eq!(search.snapshot().labels, initial);
    // At least mu searchers are needed
    assert!(report.searchers >= tree.mu().unwrap());
    Ok(())
}

#[test]
fn test_contacted() -> Result<()> {
    let tree = common::star(4)?;
    let mut search = RandomizedSearch::new(&tree, SearchConfig::default());
    for _ in 0..20 {
        search.step()?;
        // Only nodes reached by a searcher are contacted
        for &node in search.contacted() {
            assert!(search.state().is_visited(node));
        }
    }
    Ok(())
}

#[test]
fn test_random_graphs() -> Result<()> {
    for seed in 0..10 {
        let graph = common::random_graph(seed)?;
        let tree = random_depth_first(&graph, &mut SmallRng::seed_from_u64(seed))?;
        let config = SearchConfig {
            ceiling_factor: 1000,
            seed,
        };
        let report = RandomizedSearch::new(&tree, config).run(no_logging![])?;
        assert_eq!(report.outcome, Outcome::Cleared);
        assert!(report.searchers >= 1);
    }
    Ok(())
}

#[test]
fn test_with_rng() -> Result<()> {
    let tree = common::path(5)?;
    let config = SearchConfig {
        ceiling_factor: 1000,
        ..Default::default()
    };
    let a = RandomizedSearch::with_rng(&tree, config, SmallRng::seed_from_u64(9))
        .run(no_logging![])?;
    let b = RandomizedSearch::with_rng(&tree, config, SmallRng::seed_from_u64(9))
        .run(no_logging![])?;
    assert_eq!(a, b);
    Ok(())
}
