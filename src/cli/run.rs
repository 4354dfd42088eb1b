/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{create_parent_dir, load_graph, GlobalArgs};
use crate::search::{RandomizedSearch, Search, SearchConfig, Snapshot};
use crate::tree::random_depth_first;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dsi_progress_logger::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Searchers follow the labels of the spanning tree.
    #[default]
    Plain,
    /// Like plain, but guards are stationed on endpoints of non-tree edges.
    Guarded,
    /// Searchers ignore labels and are added on demand.
    Randomized,
}

#[derive(Parser, Debug)]
#[command(name = "run", about = "Labels a random spanning tree of a graph and searches the graph.", long_about = None)]
pub struct CliArgs {
    /// The arc list of the graph.
    pub src: PathBuf,

    #[arg(short, long)]
    /// The node from which the search enters the graph.
    pub start: usize,

    #[arg(long)]
    /// Whether the arcs are directed.
    pub directed: bool,

    #[arg(long, value_enum, default_value_t = Variant::Plain)]
    /// The search variant.
    pub variant: Variant,

    #[arg(long, default_value_t = 0)]
    /// The seed of the spanning tree and of the randomized search.
    pub seed: u64,

    #[arg(long, default_value_t = SearchConfig::default().ceiling_factor)]
    /// The search is stopped after this many rounds per node.
    pub ceiling_factor: usize,

    #[arg(long)]
    /// Stores a JSON snapshot per round (plus the initial one) in this file,
    /// one per line.
    pub history: Option<PathBuf>,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = load_graph(&args.src, args.directed, args.start)?;
    let mut tree = random_depth_first(&graph, &mut SmallRng::seed_from_u64(args.seed))
        .context("Could not build a spanning tree")?;
    let mu = tree.label();
    log::info!(
        "Spanning tree with {} non-tree edges, mu = {}",
        tree.non_tree_edges().len(),
        mu
    );

    let config = SearchConfig {
        ceiling_factor: args.ceiling_factor,
        seed: args.seed,
    };
    let mut pl = ProgressLogger::default();
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let record = args.history.is_some();
    let mut history = vec![];
    let result = match args.variant {
        Variant::Plain => {
            let mut search = Search::new(&tree, config)?;
            if record {
                history.push(search.snapshot());
            }
            search.run_with(&mut pl, |s| {
                if record {
                    history.push(s.clone())
                }
            })
        }
        Variant::Guarded => {
            let mut search = Search::guarded(&tree, config)?;
            if record {
                history.push(search.snapshot());
            }
            let result = search.run_with(&mut pl, |s| {
                if record {
                    history.push(s.clone())
                }
            });
            log::info!(
                "{} guards were allocated and called {} times",
                search.protocol().num_guards(),
                search.protocol().num_calls()
            );
            result
        }
        Variant::Randomized => {
            let mut search = RandomizedSearch::new(&tree, config);
            if record {
                history.push(search.snapshot());
            }
            search.run_with(&mut pl, |s| {
                if record {
                    history.push(s.clone())
                }
            })
        }
    };

    if let Some(path) = &args.history {
        store_history(path, &history)?;
    }
    let report = result.context("The search failed")?;
    println!("{}", report);
    Ok(())
}

/// Stores snapshots as JSON lines.
pub fn store_history(path: impl AsRef<Path>, history: &[Snapshot]) -> Result<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("Could not create history file {}", path.display()))?;
    let mut file = BufWriter::new(file);
    for snapshot in history {
        serde_json::to_writer(&mut file, snapshot)
            .with_context(|| format!("Could not write snapshot to {}", path.display()))?;
        writeln!(file)?;
    }
    file.flush()?;
    log::info!("Stored {} snapshots in {}", history.len(), path.display());
    Ok(())
}
