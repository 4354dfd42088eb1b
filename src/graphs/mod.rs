/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graphs to be searched.
//!
//! [`SearchGraph`] is the mutable graph on which decompositions are built;
//! [`random`] provides seeded random connected inputs.

pub mod random;
pub mod search_graph;

pub use search_graph::SearchGraph;

pub mod prelude {
    pub use super::random::RandomConnected;
    pub use super::search_graph::SearchGraph;
}
