//! Recursive chronological-backtracking search variants: plain, unit-propagation-only,
//! pure-literal-only, unit+pure, and the watched-literal recursive form.
//!
//! The first four materialize a fresh clause list per branch via [`crate::simplify::simplify`]
//! rather than mutating a shared structure. Each preprocesses differently: `naive` never
//! preprocesses, `unit` runs unit propagation before every branch (including recursively), `pure`
//! eliminates pure literals once at the entry point only, and `unit_pure` does both once at entry
//! and then unit propagation at every recursive step — this asymmetry between variants is
//! intentional, not flattened into one shape.
use crate::assignment::Assignment;
use crate::lit::{Lit, Var};
use crate::pure_literal::eliminate_pure_literals;
use crate::simplify::simplify;
use crate::unit_prop::unit_propagate;
use crate::watch::Formula;
use crate::propagate;

fn branch_only(vars: &[Var], clauses: Vec<Vec<Lit>>, assignment: Assignment) -> Option<Assignment> {
    if clauses.is_empty() {
        return Some(assignment);
    }
    if clauses.iter().any(Vec::is_empty) {
        return None;
    }

    let var = assignment.first_unassigned(vars.iter().copied())?;

    let pos_clauses = simplify(&clauses, var.positive());
    let mut pos_assignment = assignment.clone();
    pos_assignment.assign(var.positive());
    if let Some(model) = branch_only(vars, pos_clauses, pos_assignment) {
        return Some(model);
    }

    let neg_clauses = simplify(&clauses, var.negative());
    let mut neg_assignment = assignment;
    neg_assignment.assign(var.negative());
    branch_only(vars, neg_clauses, neg_assignment)
}

fn branch_with_unit_propagation(vars: &[Var], clauses: Vec<Vec<Lit>>, assignment: Assignment) -> Option<Assignment> {
    let propagated = unit_propagate(&clauses, &assignment);
    if propagated.conflict {
        return None;
    }
    let clauses = propagated.clauses;
    let assignment = propagated.assignment;

    if clauses.is_empty() {
        return Some(assignment);
    }
    if clauses.iter().any(Vec::is_empty) {
        return None;
    }

    let var = assignment.first_unassigned(vars.iter().copied())?;

    let pos_clauses = simplify(&clauses, var.positive());
    let mut pos_assignment = assignment.clone();
    pos_assignment.assign(var.positive());
    if let Some(model) = branch_with_unit_propagation(vars, pos_clauses, pos_assignment) {
        return Some(model);
    }

    let neg_clauses = simplify(&clauses, var.negative());
    let mut neg_assignment = assignment;
    neg_assignment.assign(var.negative());
    branch_with_unit_propagation(vars, neg_clauses, neg_assignment)
}

pub fn solve_naive(vars: &[Var], clauses: Vec<Vec<Lit>>, assignment: Assignment) -> Option<Assignment> {
    branch_only(vars, clauses, assignment)
}

pub fn solve_unit(vars: &[Var], clauses: Vec<Vec<Lit>>, assignment: Assignment) -> Option<Assignment> {
    branch_with_unit_propagation(vars, clauses, assignment)
}

pub fn solve_pure(vars: &[Var], clauses: Vec<Vec<Lit>>, assignment: Assignment) -> Option<Assignment> {
    let eliminated = eliminate_pure_literals(&clauses, &assignment);
    branch_only(vars, eliminated.clauses, eliminated.assignment)
}

pub fn solve_unit_pure(vars: &[Var], clauses: Vec<Vec<Lit>>, assignment: Assignment) -> Option<Assignment> {
    let propagated = unit_propagate(&clauses, &assignment);
    if propagated.conflict {
        return None;
    }
    let eliminated = eliminate_pure_literals(&propagated.clauses, &propagated.assignment);
    branch_with_unit_propagation(vars, eliminated.clauses, eliminated.assignment)
}

/// Recursive two-watched-literal search.
///
/// Mutates `assignment` and `formula` in place rather than copying: every assignment made by
/// this call's own BCP loop or by its branches is undone exactly, in LIFO order, before returning
/// failure. `true` means `assignment` now holds a satisfying (possibly partial) model; `false`
/// means `assignment` and `formula` have been restored to their state on entry.
pub fn solve_two_watched(vars: &[Var], formula: &mut Formula, assignment: &mut Assignment) -> bool {
    let mut assigned_here: Vec<Var> = Vec::new();

    loop {
        let unit = formula.clauses().iter().find_map(|clause| clause.unit_literal(assignment));
        let Some(unit) = unit else {
            break;
        };

        let var = unit.var();
        if let Some(value) = assignment.get(var) {
            if value != unit.is_positive() {
                undo(assignment, &assigned_here);
                return false;
            }
            continue;
        }

        assignment.assign(unit);
        assigned_here.push(var);

        if propagate::propagate(formula, unit, assignment).conflict {
            undo(assignment, &assigned_here);
            return false;
        }
    }

    if formula.is_satisfied(assignment) {
        return true;
    }

    let Some(var) = assignment.first_unassigned(vars.iter().copied()) else {
        if formula.clauses().iter().all(|clause| clause.is_satisfied(assignment)) {
            return true;
        }
        undo(assignment, &assigned_here);
        return false;
    };

    let state = formula.save();
    assignment.assign(var.positive());
    if solve_two_watched(vars, formula, assignment) {
        return true;
    }
    assignment.unassign(var);
    formula.restore(state);

    let state = formula.save();
    assignment.assign(var.negative());
    if solve_two_watched(vars, formula, assignment) {
        return true;
    }
    assignment.unassign(var);
    formula.restore(state);

    undo(assignment, &assigned_here);
    false
}

fn undo(assignment: &mut Assignment, assigned: &[Var]) {
    for &var in assigned.iter().rev() {
        if assignment.get(var).is_some() {
            assignment.unassign(var);
        }
    }
}
