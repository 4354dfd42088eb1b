/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Outcome, Report, SearchConfig, SearchState, Snapshot};
use crate::error::Result;
use crate::tree::SpanningTree;
use dsi_progress_logger::ProgressLog;
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng, SeedableRng};
use std::collections::BTreeSet;

/// A search that ignores labels and adds searchers on demand.
///
/// The search starts with a single searcher at the root and keeps track of
/// the *contacted* nodes, initially just the root. At each round a tree arc
/// leaving a contacted node is chosen uniformly at random: if a searcher on
/// its source [may leave](SearchState::may_leave), the first such searcher
/// crosses the arc and its target becomes contacted; otherwise, a new
/// searcher is added at the root.
///
/// The number of searchers used is an upper bound on the number needed for
/// the tree, and it is usually larger than `mu`.
#[derive(Debug)]
pub struct RandomizedSearch<'a, R: Rng = SmallRng> {
    state: SearchState<'a>,
    contacted: BTreeSet<usize>,
    rng: R,
    config: SearchConfig,
    round: usize,
    outcome: Outcome,
}

impl<'a> RandomizedSearch<'a, SmallRng> {
    /// Creates a randomized search whose generator is seeded with
    /// [`SearchConfig::seed`].
    pub fn new(tree: &'a SpanningTree, config: SearchConfig) -> Self {
        Self::with_rng(tree, config, SmallRng::seed_from_u64(config.seed))
    }
}

impl<'a, R: Rng> RandomizedSearch<'a, R> {
    /// Creates a randomized search using the given generator.
    ///
    /// The tree does not need to be labeled.
    pub fn with_rng(tree: &'a SpanningTree, config: SearchConfig, rng: R) -> Self {
        let mut state = SearchState::new(tree);
        state.spawn_searcher();
        Self {
            state,
            contacted: BTreeSet::from([tree.root()]),
            rng,
            config,
            round: 0,
            outcome: Outcome::Running,
        }
    }

    /// Returns the visitation state.
    pub fn state(&self) -> &SearchState<'a> {
        &self.state
    }

    /// Returns the contacted nodes.
    pub fn contacted(&self) -> &BTreeSet<usize> {
        &self.contacted
    }

    /// Returns the number of rounds completed.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Returns whether all nodes have been visited.
    pub fn is_cleared(&self) -> bool {
        self.state.is_cleared()
    }

    /// Runs one round.
    pub fn step(&mut self) -> Result<()> {
        let tree = self.state.tree();
        let arcs = self
            .contacted
            .iter()
            .flat_map(|&u| tree.tree_neighbors(u).map(move |v| (u, v)))
            .collect::<Vec<_>>();

        if let Some(&(u, v)) = arcs.choose(&mut self.rng) {
            let searcher = self
                .state
                .searchers()
                .iter()
                .position(|&location| location == u);
            match searcher {
                Some(searcher) if self.state.may_leave(u) => {
                    self.state.move_searcher(searcher, v)?;
                    self.contacted.insert(v);
                }
                _ => {
                    self.state.spawn_searcher();
                    log::trace!("Spawned searcher {}", self.state.num_searchers() - 1);
                }
            }
        }
        self.round += 1;
        Ok(())
    }

    /// Runs the search until all nodes are visited, and returns a report.
    ///
    /// # Errors
    ///
    /// Returns [`NonConvergence`](crate::Error::NonConvergence) if nodes are
    /// still unvisited after the maximum number of rounds.
    pub fn run(&mut self, pl: &mut impl ProgressLog) -> Result<Report> {
        self.run_with(pl, |_| {})
    }

    /// Like [`run`](RandomizedSearch::run), but passes a [`Snapshot`] of the
    /// state to `observer` at the end of each round.
    pub fn run_with(
        &mut self,
        pl: &mut impl ProgressLog,
        mut observer: impl FnMut(&Snapshot),
    ) -> Result<Report> {
        let ceiling = self.config.ceiling(self.state.num_nodes());
        pl.item_name("round");
        pl.expected_updates(None);
        pl.start(format!(
            "Searching {} nodes with randomized searchers...",
            self.state.num_nodes()
        ));

        while !self.state.is_cleared() {
            if self.round >= ceiling {
                self.outcome = Outcome::Aborted;
                pl.done();
                return Err(crate::Error::NonConvergence {
                    round: self.round,
                    searchers: self.state.num_searchers(),
                    unvisited: self.state.to_visit().iter().copied().collect(),
                });
            }
            if let Err(e) = self.step() {
                self.outcome = Outcome::Aborted;
                pl.done();
                return Err(e);
            }
            observer(&self.snapshot());
            pl.light_update();
        }

        self.outcome = Outcome::Cleared;
        pl.done();
        let report = self.report();
        log::info!("{}", report);
        Ok(report)
    }

    /// Returns a snapshot of the current state; guards are all zeros and
    /// labels are those of the tree.
    pub fn snapshot(&self) -> Snapshot {
        let tree = self.state.tree();
        Snapshot {
            round: self.round,
            visited: self.state.visited().to_vec(),
            searchers: self.state.occupancies().to_vec(),
            guards: vec![0; self.state.num_nodes()],
            labels: Snapshot::labels_from(tree.labels()),
            non_tree_edges: tree.non_tree_edges().iter().copied().collect(),
        }
    }

    /// Returns a report on the search so far.
    pub fn report(&self) -> Report {
        Report {
            rounds: self.round,
            searchers: self.state.num_searchers(),
            guards: None,
            outcome: self.outcome,
        }
    }
}
