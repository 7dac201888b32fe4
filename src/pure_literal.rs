//! Pure-literal elimination.
//!
//! A variable is pure if every occurrence across the remaining clauses has the same polarity;
//! such a variable can always be committed to that polarity without risking unsatisfiability.
//! Scans every clause once to classify each variable's polarity (`Unseen` → `Only(bool)` →
//! `Mixed`), then commits and simplifies by every variable found pure.
use tracing::trace;

use crate::assignment::Assignment;
use crate::lit::{Lit, Var};
use crate::simplify::simplify;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Unseen,
    Only(bool),
    Mixed,
}

impl Polarity {
    fn observe(self, positive: bool) -> Polarity {
        match self {
            Polarity::Unseen => Polarity::Only(positive),
            Polarity::Only(seen) if seen == positive => self,
            Polarity::Only(_) => Polarity::Mixed,
            Polarity::Mixed => Polarity::Mixed,
        }
    }
}

/// Result of a single pure-literal elimination pass.
pub struct PureLiteralResult {
    pub clauses: Vec<Vec<Lit>>,
    pub assignment: Assignment,
}

/// Scans `clauses` once, commits every pure variable, and simplifies by each one.
///
/// Applied once per call site (typically as preprocessing, or once before a recursive branch),
/// never recursively during branching, a deliberate cost trade-off against completeness of the
/// elimination.
pub fn eliminate_pure_literals(clauses: &[Vec<Lit>], assignment: &Assignment) -> PureLiteralResult {
    let mut assignment = assignment.clone();
    let mut polarity = vec![Polarity::Unseen; assignment.num_vars()];

    for clause in clauses {
        for &lit in clause {
            let var = lit.var();
            if assignment.get(var).is_some() {
                continue;
            }
            polarity[var.index()] = polarity[var.index()].observe(lit.is_positive());
        }
    }

    let mut pure_lits = Vec::new();
    for (index, state) in polarity.into_iter().enumerate() {
        if let Polarity::Only(positive) = state {
            let var = Var::from_index(index);
            let lit = Lit::from_var(var, positive);
            trace!(?lit, "committing pure literal");
            assignment.assign(lit);
            pure_lits.push(lit);
        }
    }

    let mut clauses = clauses.to_vec();
    for lit in pure_lits {
        clauses = simplify(&clauses, lit);
    }

    PureLiteralResult { clauses, assignment }
}
