/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{create_parent_dir, GlobalArgs};
use crate::graphs::random::RandomConnected;
use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "random", about = "Writes a random connected graph as an arc list.", long_about = None)]
pub struct CliArgs {
    /// The destination arc list.
    pub dst: PathBuf,

    #[arg(short, long)]
    /// The number of nodes (random in [10..20) if missing).
    pub nodes: Option<usize>,

    #[arg(short, long)]
    /// The average degree (random in [2..5) if missing).
    pub branching: Option<usize>,

    #[arg(long, default_value_t = 0)]
    /// The seed of the generator.
    pub seed: u64,
}

pub fn main(_global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let drawn = RandomConnected::with_random_size(args.seed);
    let random = match (args.nodes, args.branching) {
        (None, None) => drawn,
        (nodes, branching) => {
            let nodes = nodes.unwrap_or(drawn.num_nodes());
            ensure!(nodes > 0, "The graph must have at least one node");
            RandomConnected::new(nodes, branching.unwrap_or(drawn.branching()), args.seed)
        }
    };
    let (nodes, branching) = (random.num_nodes(), random.branching());

    create_parent_dir(&args.dst)?;
    let file = std::fs::File::create(&args.dst)
        .with_context(|| format!("Could not create {}", args.dst.display()))?;
    let mut file = BufWriter::new(file);
    writeln!(
        file,
        "# Random connected graph: {} nodes, branching factor {}, seed {}",
        nodes, branching, args.seed
    )?;
    let edges = random.edges();
    for (u, v) in &edges {
        writeln!(file, "{}\t{}", u, v)
            .with_context(|| format!("Could not write to {}", args.dst.display()))?;
    }
    file.flush()?;

    log::info!(
        "Wrote {} edges on {} nodes to {}",
        edges.len(),
        nodes,
        args.dst.display()
    );
    Ok(())
}
