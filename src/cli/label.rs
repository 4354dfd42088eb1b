/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{load_graph, GlobalArgs};
use crate::tree::{random_depth_first, SpanningTree};
use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "label", about = "Prints a labeled random spanning tree of a graph.", long_about = None)]
pub struct CliArgs {
    /// The arc list of the graph.
    pub src: PathBuf,

    #[arg(short, long)]
    /// The node from which the search enters the graph.
    pub start: usize,

    #[arg(long)]
    /// Whether the arcs are directed.
    pub directed: bool,

    #[arg(long, default_value_t = 0)]
    /// The seed of the spanning tree.
    pub seed: u64,
}

pub fn main(_global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = load_graph(&args.src, args.directed, args.start)?;
    let mut tree = random_depth_first(&graph, &mut SmallRng::seed_from_u64(args.seed))
        .context("Could not build a spanning tree")?;
    tree.label();
    write_tree(std::io::stdout().lock(), &tree)?;
    Ok(())
}

/// Writes a labeled tree: tree arcs as `parent child label` lines, then
/// non-tree edges as `u v` lines.
pub fn write_tree(writer: impl Write, tree: &SpanningTree) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "# root {}, start {}", tree.root(), tree.start())?;
    writeln!(writer, "# mu {}", tree.mu().unwrap_or(0))?;
    writeln!(writer, "# tree edges")?;
    for (parent, child) in tree.tree_edges() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            parent,
            child,
            tree.label_of(parent, child).unwrap_or(0)
        )?;
    }
    writeln!(writer, "# non-tree edges")?;
    for (u, v) in tree.non_tree_edges() {
        writeln!(writer, "{}\t{}", u, v)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::SearchGraph;

    #[test]
    fn test_write_tree() -> Result<()> {
        let mut g = SearchGraph::from_edges([(0, 1), (1, 2), (2, 0)], false);
        g.attach_root(0)?;
        let mut tree = SpanningTree::from_tree_edges(&g, [(3, 0), (0, 1), (0, 2)])?;
        tree.label();
        let mut out = vec![];
        write_tree(&mut out, &tree)?;
        assert_eq!(
            String::from_utf8(out)?,
            "# root 3, start 0\n# mu 2\n# tree edges\n3\t0\t2\n0\t1\t1\n0\t2\t1\n# non-tree edges\n1\t2\n"
        );
        Ok(())
    }
}
