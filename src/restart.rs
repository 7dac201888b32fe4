//! Geometric restart control.
//!
//! Each attempt reconstructs the watched formula and starts from an empty assignment, but the
//! VSIDS scorer (if any) carries its activities across attempts.
use tracing::info;

use crate::assignment::Assignment;
use crate::lit::{Lit, Var};
use crate::search::iterative::solve_iterative;
use crate::search::SearchOutcome;
use crate::vsids::Vsids;

/// Tunable constants of the restart schedule.
#[derive(Clone, Copy, Debug)]
pub struct RestartConfig {
    pub initial_conflict_limit: usize,
    pub growth_factor: f64,
    pub max_attempts: usize,
}

impl Default for RestartConfig {
    fn default() -> Self {
        RestartConfig {
            initial_conflict_limit: 100,
            growth_factor: 1.5,
            max_attempts: 1000,
        }
    }
}

pub fn solve_with_restarts(
    vars: &[Var],
    clauses: &[Vec<Lit>],
    num_vars: usize,
    mut scorer: Option<&mut Vsids>,
    config: RestartConfig,
) -> SearchOutcome {
    let mut conflict_limit = config.initial_conflict_limit as f64;

    for attempt in 0..config.max_attempts {
        let assignment = Assignment::with_num_vars(num_vars);
        let outcome = solve_iterative(vars, clauses.to_vec(), assignment, scorer.as_deref_mut(), conflict_limit as usize);

        match outcome {
            SearchOutcome::Restart => {
                info!(attempt, conflict_limit, "restarting with a larger conflict budget");
                conflict_limit *= config.growth_factor;
            }
            other => return other,
        }
    }

    let assignment = Assignment::with_num_vars(num_vars);
    solve_iterative(vars, clauses.to_vec(), assignment, scorer, 0)
}
