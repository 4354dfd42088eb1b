/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Guards, Outcome, Report, SearchState, Snapshot};
use crate::error::{ensure_input, Result};
use crate::tree::SpanningTree;
use dsi_progress_logger::ProgressLog;
use std::collections::BTreeMap;

/// Parameters of a search run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// A search on `n` nodes is stopped with a
    /// [`NonConvergence`](crate::Error::NonConvergence) error after
    /// `ceiling_factor * n` rounds.
    pub ceiling_factor: usize,
    /// The seed of randomized searches.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ceiling_factor: 5,
            seed: 0,
        }
    }
}

impl SearchConfig {
    /// Returns the maximum number of rounds for a search on `num_nodes`
    /// nodes.
    pub fn ceiling(&self, num_nodes: usize) -> usize {
        self.ceiling_factor.saturating_mul(num_nodes)
    }
}

/// Hooks refining the behavior of a [`Search`].
///
/// The plain search uses the no-op protocol `()`; [`Guards`] implements the
/// guard extension.
pub trait Protocol {
    /// Refines the decision of [`SearchState::can_move`] for a searcher on
    /// `node`; `base` is the decision of the state. The default
    /// implementation returns `base`.
    fn can_move(&mut self, _state: &SearchState<'_>, _node: usize, base: bool) -> Result<bool> {
        Ok(base)
    }

    /// Called when `node` is visited for the first time, after the unvisited
    /// degrees of its neighbors have been updated.
    fn on_visit(&mut self, _state: &SearchState<'_>, _node: usize) -> Result<()> {
        Ok(())
    }

    /// Called after all searchers have moved in a round.
    fn on_round_end(&mut self, _state: &SearchState<'_>) -> Result<()> {
        Ok(())
    }

    /// Returns the guards of this protocol, if any.
    fn guards(&self) -> Option<&Guards> {
        None
    }
}

impl Protocol for () {}

/// A search driven by the labels of a spanning tree.
///
/// The search starts with `mu` searchers at the root. At each round
/// searchers are considered in index order, and each move is applied before
/// the next searcher is considered. A searcher that [may
/// move](SearchState::can_move) follows the tree arc with the smallest
/// positive label, decrementing it, or, if there is none, the first tree arc
/// with a negative label, incrementing it.
///
/// The search owns a copy of the labels of the tree, so the tree can be
/// searched again.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use gsst::graphs::SearchGraph;
/// use gsst::search::{Outcome, Search, SearchConfig};
/// use gsst::tree::SpanningTree;
///
/// // A path 0 - 1 - 2 entered from 0
/// let mut graph = SearchGraph::from_edges([(0, 1), (1, 2)], false);
/// graph.attach_root(0)?;
/// let mut tree = SpanningTree::from_tree_edges(&graph, graph.edges().collect::<Vec<_>>())?;
/// assert_eq!(tree.label(), 1);
///
/// let mut search = Search::new(&tree, SearchConfig::default())?;
/// let report = search.run(no_logging![])?;
/// assert_eq!(report.outcome, Outcome::Cleared);
/// assert_eq!(report.rounds, 3);
/// assert_eq!(report.searchers, 1);
/// # Ok::<(), gsst::Error>(())
/// ```
#[derive(Debug)]
pub struct Search<'a, P: Protocol = ()> {
    state: SearchState<'a>,
    labels: Vec<BTreeMap<usize, i64>>,
    protocol: P,
    config: SearchConfig,
    round: usize,
    outcome: Outcome,
}

impl<'a> Search<'a, ()> {
    /// Creates a plain search on a labeled tree.
    pub fn new(tree: &'a SpanningTree, config: SearchConfig) -> Result<Self> {
        Self::with_protocol(tree, config, ())
    }
}

impl<'a> Search<'a, Guards> {
    /// Creates a search on a labeled tree that places guards on the
    /// endpoints of non-tree edges.
    pub fn guarded(tree: &'a SpanningTree, config: SearchConfig) -> Result<Self> {
        Self::with_protocol(tree, config, Guards::new(tree))
    }
}

impl<'a, P: Protocol> Search<'a, P> {
    /// Creates a search on a labeled tree using the given protocol.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInput`](crate::Error::MalformedInput) if the tree has
    /// not been labeled.
    pub fn with_protocol(tree: &'a SpanningTree, config: SearchConfig, protocol: P) -> Result<Self> {
        let Some(mu) = tree.mu() else {
            return Err(crate::Error::MalformedInput(
                "The spanning tree must be labeled before searching".into(),
            ));
        };
        ensure_input!(mu > 0, "The number of searchers must be positive");

        let mut state = SearchState::new(tree);
        for _ in 0..mu {
            state.spawn_searcher();
        }

        Ok(Self {
            state,
            labels: tree.labels().to_vec(),
            protocol,
            config,
            round: 0,
            outcome: Outcome::Running,
        })
    }

    /// Returns the visitation state.
    pub fn state(&self) -> &SearchState<'a> {
        &self.state
    }

    /// Returns the protocol.
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Returns the number of rounds completed.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Returns the current label of the tree arc from `u` to `v`.
    pub fn label(&self, u: usize, v: usize) -> Option<i64> {
        self.labels[u].get(&v).copied()
    }

    /// Returns whether all nodes have been visited.
    pub fn is_cleared(&self) -> bool {
        self.state.is_cleared()
    }

    /// Runs one round.
    pub fn step(&mut self) -> Result<()> {
        for searcher in 0..self.state.num_searchers() {
            let node = self.state.searchers()[searcher];
            let base = self.state.can_move(node)?;
            if !self.protocol.can_move(&self.state, node, base)? {
                continue;
            }

            let arcs = &self.labels[node];
            let next = arcs
                .iter()
                .filter(|&(_, &label)| label > 0)
                .min_by_key(|&(_, &label)| label)
                .map(|(&next, _)| (next, -1))
                .or_else(|| {
                    arcs.iter()
                        .find(|&(_, &label)| label < 0)
                        .map(|(&next, _)| (next, 1))
                });
            let Some((next, delta)) = next else {
                continue;
            };

            if let Some(label) = self.labels[node].get_mut(&next) {
                *label += delta;
            }
            if self.state.move_searcher(searcher, next)? {
                self.protocol.on_visit(&self.state, next)?;
            }
        }
        self.protocol.on_round_end(&self.state)?;
        self.round += 1;
        Ok(())
    }

    /// Runs the search until all nodes are visited, and returns a report.
    ///
    /// # Errors
    ///
    /// Returns [`NonConvergence`](crate::Error::NonConvergence) if nodes are
    /// still unvisited after the maximum number of rounds (see
    /// [`SearchConfig`]), and
    /// [`InvariantViolation`](crate::Error::InvariantViolation) if the
    /// bookkeeping becomes inconsistent.
    pub fn run(&mut self, pl: &mut impl ProgressLog) -> Result<Report> {
        self.run_with(pl, |_| {})
    }

    /// Like [`run`](Search::run), but passes a [`Snapshot`] of the state to
    /// `observer` at the end of each round.
    pub fn run_with(
        &mut self,
        pl: &mut impl ProgressLog,
        mut observer: impl FnMut(&Snapshot),
    ) -> Result<Report> {
        let ceiling = self.config.ceiling(self.state.num_nodes());
        pl.item_name("round");
        pl.expected_updates(None);
        pl.start(format!(
            "Searching {} nodes with {} searchers...",
            self.state.num_nodes(),
            self.state.num_searchers()
        ));

        while !self.state.is_cleared() {
            if self.round >= ceiling {
                self.outcome = Outcome::Aborted;
                pl.done();
                log::error!(
                    "Stopped after {} rounds with {} nodes to visit",
                    self.round,
                    self.state.to_visit().len()
                );
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

    /// Returns a snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        let num_nodes = self.state.num_nodes();
        Snapshot {
            round: self.round,
            visited: self.state.visited().to_vec(),
            searchers: self.state.occupancies().to_vec(),
            guards: self
                .protocol
                .guards()
                .map(|guards| guards.occupancies().to_vec())
                .unwrap_or_else(|| vec![0; num_nodes]),
            labels: Snapshot::labels_from(&self.labels),
            non_tree_edges: self
                .state
                .tree()
                .non_tree_edges()
                .iter()
                .copied()
                .collect(),
        }
    }

    /// Returns a report on the search so far.
    pub fn report(&self) -> Report {
        Report {
            rounds: self.round,
            searchers: self.state.num_searchers(),
            guards: self.protocol.guards().map(Guards::num_guards),
            outcome: self.outcome,
        }
    }

    /// Returns the visited nodes, other than the root, that have unvisited
    /// neighbors in the graph but neither a searcher nor a guard on them.
    pub fn exposed_nodes(&self) -> Vec<usize> {
        let guards = self.protocol.guards();
        self.state
            .exposed_nodes(|node| guards.is_some_and(|guards| guards.occupancy(node) > 0))
    }
}
