/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![cfg(feature = "cli")]

use anyhow::Result;
use gsst::cli::cli_main;
use gsst::graphs::random::RandomConnected;
use gsst::graphs::SearchGraph;
use gsst::search::Snapshot;
use std::io::BufReader;

#[test]
fn test_random_and_run() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;
    let arcs = dir.path().join("graph.arcs");
    let arcs_str = arcs.to_str().unwrap();

    cli_main([
        "gsst", "random", arcs_str, "--nodes", "12", "--branching", "3", "--seed", "1",
    ])?;
    let graph = SearchGraph::from_arc_list(BufReader::new(std::fs::File::open(&arcs)?), false)?;
    assert_eq!(graph.num_nodes(), 12);
    assert_eq!(graph.num_edges(), 18);

    for variant in ["plain", "guarded", "randomized"] {
        let history = dir.path().join(format!("{}.jsonl", variant));
        cli_main([
            "gsst",
            "run",
            arcs_str,
            "--start",
            "0",
            "--variant",
            variant,
            "--ceiling-factor",
            "1000",
            "--history",
            history.to_str().unwrap(),
        ])?;

        let snapshots = std::fs::read_to_string(&history)?
            .lines()
            .map(serde_json::from_str::<Snapshot>)
            .collect::<Result<Vec<_>, _>>()?;
        assert!(snapshots.len() >= 2);
        assert_eq!(snapshots[0].round, 0);
        assert_eq!(snapshots[0].num_visited(), 1);
        let last = snapshots.last().unwrap();
        assert_eq!(last.round, snapshots.len() - 1);
        assert!(last.visited.iter().all(|&v| v));
        assert_eq!(last.visited.len(), 13);
    }
    Ok(())
}

#[test]
fn test_random_drawn_size() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let arcs = dir.path().join("drawn.arcs");
    cli_main(["gsst", "random", arcs.to_str().unwrap(), "--seed", "5"])?;
    let graph = SearchGraph::from_arc_list(BufReader::new(std::fs::File::open(&arcs)?), false)?;
    // Without size flags the drawn generator is used as is
    let drawn = RandomConnected::with_random_size(5);
    assert_eq!(graph.num_nodes(), drawn.num_nodes());
    assert_eq!(graph.edges().collect::<Vec<_>>(), drawn.edges());
    Ok(())
}

#[test]
fn test_label() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let arcs = dir.path().join("triangle.arcs");
    std::fs::write(&arcs, "0\t1\n1\t2\n2\t0\n")?;
    cli_main(["gsst", "label", arcs.to_str().unwrap(), "--start", "1"])?;
    Ok(())
}

#[test]
fn test_malformed() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let arcs = dir.path().join("disconnected.arcs");
    std::fs::write(&arcs, "0 1\n2 3\n")?;
    assert!(cli_main(["gsst", "run", arcs.to_str().unwrap(), "--start", "0"]).is_err());
    // Unknown start node
    assert!(cli_main(["gsst", "label", arcs.to_str().unwrap(), "--start", "9"]).is_err());
    Ok(())
}
