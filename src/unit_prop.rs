//! Whole-formula unit propagation.
//!
//! Unlike the two-watched-literal propagator (`crate::propagate`), this form works directly on a
//! clause list and a partial assignment, rescanning for unit clauses after every simplification.
//! It is used by the recursive search variants (`crate::search::recursive`).
use tracing::trace;

use crate::assignment::Assignment;
use crate::simplify::simplify;

/// Outcome of running unit propagation to fixpoint.
pub struct UnitPropagateResult {
    pub clauses: Vec<Vec<crate::lit::Lit>>,
    pub assignment: Assignment,
    pub conflict: bool,
}

/// Repeatedly finds a unit clause and commits its literal, until none remain or a
/// contradiction is found. Deterministic: the first unit clause in stored order is always
/// chosen.
pub fn unit_propagate(clauses: &[Vec<crate::lit::Lit>], assignment: &Assignment) -> UnitPropagateResult {
    let mut assignment = assignment.clone();
    let mut clauses = clauses.to_vec();

    loop {
        let Some(idx) = clauses.iter().position(|clause| clause.len() == 1) else {
            break;
        };
        let unit_lit = clauses[idx][0];

        if let Some(value) = assignment.value_of(unit_lit) {
            if !value {
                trace!(?unit_lit, "unit propagation found a contradiction");
                return UnitPropagateResult {
                    clauses,
                    assignment,
                    conflict: true,
                };
            }
        } else {
            trace!(?unit_lit, "unit propagation commits literal");
            assignment.assign(unit_lit);
        }

        clauses = simplify(&clauses, unit_lit);
    }

    UnitPropagateResult {
        clauses,
        assignment,
        conflict: false,
    }
}
