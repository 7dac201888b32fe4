//! Two-watched-literal boolean constraint propagation.
//!
//! Processes the entire watch list of `!lit` in one call (every clause watching `!lit` needs a
//! look once `lit` becomes true), but surfaces at most one newly unit literal per call. On
//! conflict the loop returns immediately, leaving any watch-list entries past the conflicting
//! clause unprocessed; this is harmless because every caller discards the formula's watch state
//! via `Formula::restore` right after a conflict.
//!
//! The watch list being processed is pulled out of the formula with `mem::take` so the rest of
//! the formula's watch lists can be mutated at the same time without a live borrow on this one.
use std::mem;

use crate::assignment::Assignment;
use crate::lit::Lit;
use crate::watch::Formula;

pub struct PropagateOutcome {
    pub unit: Option<Lit>,
    pub conflict: bool,
}

pub fn propagate(formula: &mut Formula, lit: Lit, assignment: &Assignment) -> PropagateOutcome {
    let watch_list = mem::take(formula.watch_list_mut(lit));
    let mut retained = Vec::with_capacity(watch_list.len());
    let mut unit = None;

    for (clause_id, slot) in watch_list {
        let clause = formula.clause_db_mut().get(clause_id);
        if clause.is_satisfied(assignment) {
            retained.push((clause_id, slot));
            continue;
        }

        if let Some(new_index) = clause.find_replacement(slot, assignment) {
            let new_lit = clause.literals()[new_index];
            formula.clause_db_mut().get_mut(clause_id).set_watch(slot, new_index);
            formula.watch_list_mut(!new_lit).push((clause_id, slot));
            continue;
        }

        retained.push((clause_id, slot));

        let clause = formula.clause_db_mut().get(clause_id);
        if clause.is_conflicting(assignment) {
            *formula.watch_list_mut(lit) = retained;
            return PropagateOutcome { unit: None, conflict: true };
        }

        if unit.is_none() {
            unit = clause.unit_literal(assignment);
        }
    }

    *formula.watch_list_mut(lit) = retained;
    PropagateOutcome { unit, conflict: false }
}
