/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::BTreeMap;

/// An owned copy of the state of a search at the end of a round.
///
/// Snapshots are independent of the search that produced them: they can be
/// stored, serialized (with the `serde` feature) and inspected after the
/// search has moved on.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// The number of rounds completed.
    pub round: usize,
    /// Whether each node has been visited.
    pub visited: Vec<bool>,
    /// The number of searchers on each node.
    pub searchers: Vec<usize>,
    /// The number of guards on each node (all zeros if the search has no
    /// guards).
    pub guards: Vec<usize>,
    /// The current label of each tree arc, as `(source, target, label)`
    /// triples in lexicographical order.
    pub labels: Vec<(usize, usize, i64)>,
    /// The non-tree edges, as `(min, max)` pairs.
    pub non_tree_edges: Vec<(usize, usize)>,
}

impl Snapshot {
    pub(crate) fn labels_from(labels: &[BTreeMap<usize, i64>]) -> Vec<(usize, usize, i64)> {
        labels
            .iter()
            .enumerate()
            .flat_map(|(u, arcs)| arcs.iter().map(move |(&v, &label)| (u, v, label)))
            .collect()
    }

    /// Returns the total number of searchers.
    pub fn num_searchers(&self) -> usize {
        self.searchers.iter().sum()
    }

    /// Returns the total number of guards.
    pub fn num_guards(&self) -> usize {
        self.guards.iter().sum()
    }

    /// Returns the number of visited nodes, including the root.
    pub fn num_visited(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}

/// How a search ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// All nodes have been visited.
    Cleared,
    /// The search was stopped by an error.
    Aborted,
    /// The search has not ended yet.
    Running,
}

/// A summary of a search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// The number of rounds completed.
    pub rounds: usize,
    /// The number of searchers used.
    pub searchers: usize,
    /// The number of guards allocated, if the search uses guards.
    pub guards: Option<usize>,
    /// How the search ended.
    pub outcome: Outcome,
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:?} after {} rounds with {} searchers",
            self.outcome, self.rounds, self.searchers
        )?;
        if let Some(guards) = self.guards {
            write!(f, " and {} guards", guards)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let mut report = Report {
            rounds: 5,
            searchers: 2,
            guards: None,
            outcome: Outcome::Cleared,
        };
        assert_eq!(report.to_string(), "Cleared after 5 rounds with 2 searchers");
        report.guards = Some(1);
        assert_eq!(
            report.to_string(),
            "Cleared after 5 rounds with 2 searchers and 1 guards"
        );
    }

    #[test]
    fn test_labels_from() {
        let mut labels = vec![BTreeMap::new(); 3];
        labels[2].insert(0, 1);
        labels[0].insert(2, -1);
        assert_eq!(
            Snapshot::labels_from(&labels),
            vec![(0, 2, -1), (2, 0, 1)]
        );
    }
}
