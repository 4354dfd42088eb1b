/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Errors returned by graph construction, decomposition and search.
//!
//! All errors are fatal: the search is a validation engine, so a failed run
//! is reported and never retried.

use thiserror::Error;

/// The error type of this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The internal state is inconsistent; this is a logic defect.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    /// The round ceiling was reached with vertices still to visit.
    #[error(
        "The search did not converge: round {round}, {searchers} searchers, unvisited vertices {unvisited:?}"
    )]
    NonConvergence {
        /// The round at which the search was stopped.
        round: usize,
        /// The number of searchers at that moment.
        searchers: usize,
        /// The vertices still to visit.
        unvisited: Vec<usize>,
    },
    /// The input graph or tree cannot be decomposed.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

/// Shorthand for results using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Returns early with an [`Error::InvariantViolation`] if the condition does
/// not hold.
macro_rules! ensure_invariant {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::Error::InvariantViolation(format!($($arg)+)));
        }
    };
}

/// Returns early with an [`Error::MalformedInput`] if the condition does not
/// hold.
macro_rules! ensure_input {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::Error::MalformedInput(format!($($arg)+)));
        }
    };
}

pub(crate) use ensure_input;
pub(crate) use ensure_invariant;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::NonConvergence {
            round: 10,
            searchers: 2,
            unvisited: vec![3, 4],
        };
        assert_eq!(
            err.to_string(),
            "The search did not converge: round 10, 2 searchers, unvisited vertices [3, 4]"
        );
        assert_eq!(
            Error::MalformedInput("no root".into()).to_string(),
            "Malformed input: no root"
        );
    }

    fn check(x: usize) -> Result<usize> {
        ensure_invariant!(x > 0, "x must be positive, got {}", x);
        Ok(x)
    }

    #[test]
    fn test_ensure_invariant() {
        assert_eq!(check(1), Ok(1));
        assert_eq!(
            check(0),
            Err(Error::InvariantViolation("x must be positive, got 0".into()))
        );
    }
}
