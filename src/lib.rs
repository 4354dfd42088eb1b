/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod error;
pub mod graphs;
pub mod search;
pub mod tree;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::graphs::prelude::*;
    pub use crate::search::{
        Guards, Outcome, Protocol, RandomizedSearch, Report, Search, SearchConfig, SearchState,
        Snapshot,
    };
    pub use crate::tree::{random_depth_first, SpanningTree};
}
