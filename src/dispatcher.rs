//! Selects an algorithm variant from a configuration tag set.
//!
//! `Variant` is modeled as a `bitflags!` type rather than an enum because algorithm selection is a
//! membership test over independent flags (`unit`, `pure`, ...), with exactly eight combinations
//! recognized and everything else rejected.
use bitflags::bitflags;
use tracing::debug;

use crate::assignment::Assignment;
use crate::error::SolveError;
use crate::lit::{Lit, Var};
use crate::model::{Model, SolveOutcome};
use crate::restart::{solve_with_restarts, RestartConfig};
use crate::search::iterative::solve_iterative;
use crate::search::recursive;
use crate::search::SearchOutcome;
use crate::symbols::SymbolTable;
use crate::vsids::Vsids;
use crate::watch::Formula;

bitflags! {
    /// Algorithm-tag configuration accepted by [`crate::solve`].
    pub struct Variant: u8 {
        const UNIT = 0b0000_0001;
        const PURE = 0b0000_0010;
        const TWO_WATCHED = 0b0000_0100;
        const TWO_WATCHED_ITERATIVE = 0b0000_1000;
        const VSIDS = 0b0001_0000;
        const RESTARTS = 0b0010_0000;
    }
}

const VSIDS_DECAY: f64 = 0.95;

pub(crate) fn dispatch(
    vars: &[Var],
    clauses: Vec<Vec<Lit>>,
    num_vars: usize,
    symbols: &SymbolTable,
    config: Variant,
) -> Result<SolveOutcome, SolveError> {
    debug!(?config, "dispatching");

    // An empty clause is an immediate contradiction. The recursive variants detect this
    // themselves by scanning for an empty clause at every branch; the watched-literal variants
    // never register a watch for a clause with no literals to watch, so they would otherwise
    // never notice it. Checking once here covers every variant uniformly.
    if clauses.iter().any(Vec::is_empty) {
        return Ok(SolveOutcome::Unsat);
    }

    let assignment = Assignment::with_num_vars(num_vars);

    let result = if config.is_empty() {
        recursive::solve_naive(vars, clauses, assignment)
    } else if config == Variant::UNIT {
        recursive::solve_unit(vars, clauses, assignment)
    } else if config == Variant::PURE {
        recursive::solve_pure(vars, clauses, assignment)
    } else if config == Variant::UNIT | Variant::PURE {
        recursive::solve_unit_pure(vars, clauses, assignment)
    } else if config == Variant::TWO_WATCHED {
        let mut formula = Formula::new(num_vars, clauses);
        let mut assignment = assignment;
        recursive::solve_two_watched(vars, &mut formula, &mut assignment).then_some(assignment)
    } else if config == Variant::TWO_WATCHED_ITERATIVE {
        outcome_to_model(solve_iterative(vars, clauses, assignment, None, 0))
    } else if config == Variant::VSIDS {
        let mut scorer = Vsids::new(num_vars, &clauses, VSIDS_DECAY);
        outcome_to_model(solve_iterative(vars, clauses, assignment, Some(&mut scorer), 0))
    } else if config == Variant::RESTARTS {
        let mut scorer = Vsids::new(num_vars, &clauses, VSIDS_DECAY);
        outcome_to_model(solve_with_restarts(
            vars,
            &clauses,
            num_vars,
            Some(&mut scorer),
            RestartConfig::default(),
        ))
    } else {
        return Err(SolveError::InvalidConfiguration(config));
    };

    Ok(match result {
        Some(assignment) => SolveOutcome::Sat(Model::from_assignment(symbols, &assignment)),
        None => SolveOutcome::Unsat,
    })
}

/// Collapses a search outcome to the dispatcher's `Option<Assignment>` shape.
///
/// Every call site here runs with an unbounded conflict limit (or, for `RESTARTS`, behind a
/// controller that resolves "restart" itself), so `SearchOutcome::Restart` can only mean a bug.
fn outcome_to_model(outcome: SearchOutcome) -> Option<Assignment> {
    match outcome {
        SearchOutcome::Sat(assignment) => Some(assignment),
        SearchOutcome::Unsat => None,
        SearchOutcome::Restart => unreachable!("unbounded search requested a restart"),
    }
}
