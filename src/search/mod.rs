//! Search drivers: recursive chronological backtracking over materialized clause
//! lists, and an iterative driver with an explicit decision stack over the watched-literal
//! representation.
pub mod iterative;
pub mod recursive;

use crate::assignment::Assignment;

/// Outcome of one iterative search attempt. `Restart` never escapes the restart controller
/// (`crate::restart`) — a dedicated enum variant, never a string sentinel.
pub enum SearchOutcome {
    Sat(Assignment),
    Unsat,
    Restart,
}
