/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Round-based simulation of searchers (and guards) clearing a graph.
//!
//! All variants share a [`SearchState`], which tracks visited nodes, the
//! number of unvisited neighbors of each node and the location of searchers:
//!
//! - [`Search`] moves `mu` searchers along the labels of a
//!   [labeled](crate::tree::SpanningTree::label) spanning tree; its behavior
//!   can be refined by a [`Protocol`];
//! - [`Guards`] is the protocol stationing guards on endpoints of non-tree
//!   edges, used by [`Search::guarded`];
//! - [`RandomizedSearch`] ignores labels and adds searchers on demand.
//!
//! Each round can be observed through an owned [`Snapshot`], and a finished
//! search is summarized by a [`Report`].

mod base;
pub use base::*;

mod guards;
pub use guards::*;

mod randomized;
pub use randomized::*;

mod snapshot;
pub use snapshot::*;

mod state;
pub use state::*;
