//! Iterative search with an explicit decision stack.
//!
//! `bcp` deliberately rescans every clause for a unit literal on each iteration rather than
//! trusting the unit literal `propagate` itself surfaces, so a clause already known unit by
//! `propagate` is only acted on the next time `bcp`'s scan reaches it. This does not change which
//! fixpoint is eventually reached, so it is kept rather than "fixed".
use tracing::{debug, trace};

use crate::assignment::Assignment;
use crate::lit::Var;
use crate::propagate;
use crate::search::SearchOutcome;
use crate::vsids::Vsids;
use crate::watch::{Formula, FormulaState};

struct Decision {
    var: Var,
    tried_flipped: bool,
    state: FormulaState,
}

/// Picks the next branching variable: VSIDS if a scorer is supplied, otherwise the first
/// unassigned variable in `vars` order.
fn pick_branching_variable(vars: &[Var], assignment: &Assignment, scorer: Option<&mut Vsids>) -> Option<Var> {
    match scorer {
        Some(scorer) => scorer.pick(assignment),
        None => assignment.first_unassigned(vars.iter().copied()),
    }
}

/// Runs boolean constraint propagation to fixpoint. Returns `false` on conflict.
fn bcp(formula: &mut Formula, assignment: &mut Assignment, trail: &mut Vec<Var>) -> bool {
    loop {
        let unit = formula.clauses().iter().find_map(|clause| clause.unit_literal(assignment));
        let Some(unit) = unit else {
            return true;
        };

        let var = unit.var();
        if let Some(value) = assignment.get(var) {
            if value != unit.is_positive() {
                return false;
            }
            continue;
        }

        assignment.assign(unit);
        trail.push(var);

        if propagate::propagate(formula, unit, assignment).conflict {
            return false;
        }
    }
}

/// Runs one iterative search attempt, restarting at `conflict_limit` conflicts (`0` meaning no
/// limit).
pub fn solve_iterative(
    vars: &[Var],
    clause_literals: Vec<Vec<crate::lit::Lit>>,
    mut assignment: Assignment,
    mut scorer: Option<&mut Vsids>,
    conflict_limit: usize,
) -> SearchOutcome {
    let num_vars = assignment.num_vars();
    let mut formula = Formula::new(num_vars, clause_literals);
    let mut trail: Vec<Var> = Vec::new();
    let mut decision_stack: Vec<Decision> = Vec::new();
    let mut conflicts = 0usize;

    if !bcp(&mut formula, &mut assignment, &mut trail) {
        debug!("root-level conflict, formula is unsatisfiable");
        return SearchOutcome::Unsat;
    }

    loop {
        if formula.is_satisfied(&assignment) {
            return SearchOutcome::Sat(assignment);
        }

        let mut conflict;
        match pick_branching_variable(vars, &assignment, scorer.as_deref_mut()) {
            Some(var) => {
                trace!(?var, "deciding");
                let state = formula.save();
                assignment.assign(var.positive());
                trail.push(var);
                decision_stack.push(Decision { var, tried_flipped: false, state });
                conflict = false;
            }
            None => {
                if formula.clauses().iter().all(|clause| clause.is_satisfied(&assignment)) {
                    return SearchOutcome::Sat(assignment);
                }
                conflict = true;
            }
        }

        if !conflict && !bcp(&mut formula, &mut assignment, &mut trail) {
            conflict = true;
        }

        while conflict {
            conflicts += 1;
            if conflict_limit > 0 && conflicts >= conflict_limit {
                trace!(conflicts, "conflict limit reached, requesting restart");
                return SearchOutcome::Restart;
            }

            if decision_stack.is_empty() {
                return SearchOutcome::Unsat;
            }

            let decision = decision_stack.pop().unwrap();

            if let Some(scorer) = scorer.as_deref_mut() {
                scorer.bump(decision.var);
                scorer.decay();
            }

            while let Some(var) = trail.pop() {
                if assignment.get(var).is_some() {
                    assignment.unassign(var);
                }
                if var == decision.var {
                    break;
                }
            }

            formula.restore(decision.state);

            if !decision.tried_flipped {
                let state = formula.save();
                assignment.assign(decision.var.negative());
                trail.push(decision.var);
                decision_stack.push(Decision {
                    var: decision.var,
                    tried_flipped: true,
                    state,
                });

                conflict = !bcp(&mut formula, &mut assignment, &mut trail);
            } else {
                conflict = true;
            }
        }
    }
}
