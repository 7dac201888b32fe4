//! A dense partial variable assignment.
//!
//! Tracks only the current value of each variable, with no per-variable decision level: this
//! engine never backjumps across levels, so only LIFO trail order is needed, not a level number.
use crate::lit::{Lit, Var};

#[derive(Clone, Debug, Default)]
pub struct Assignment {
    values: Vec<Option<bool>>,
}

impl Assignment {
    pub fn with_num_vars(num_vars: usize) -> Self {
        Assignment {
            values: vec![None; num_vars],
        }
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values[var.index()]
    }

    /// The value of `lit` under this assignment: `Some(true)` if satisfied, `Some(false)` if
    /// falsified, `None` if unassigned.
    pub fn value_of(&self, lit: Lit) -> Option<bool> {
        self.get(lit.var()).map(|value| value == lit.is_positive())
    }

    pub fn is_satisfied(&self, lit: Lit) -> bool {
        self.value_of(lit) == Some(true)
    }

    pub fn is_falsified(&self, lit: Lit) -> bool {
        self.value_of(lit) == Some(false)
    }

    pub fn is_unassigned(&self, lit: Lit) -> bool {
        self.get(lit.var()).is_none()
    }

    pub fn assign(&mut self, lit: Lit) {
        debug_assert!(self.is_unassigned(lit), "variable assigned twice");
        self.values[lit.var().index()] = Some(lit.is_positive());
    }

    pub fn unassign(&mut self, var: Var) {
        debug_assert!(self.values[var.index()].is_some(), "unassigning an unassigned variable");
        self.values[var.index()] = None;
    }

    pub fn is_clause_satisfied(&self, clause: &[Lit]) -> bool {
        clause.iter().any(|&lit| self.is_satisfied(lit))
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    pub fn first_unassigned(&self, order: impl Iterator<Item = Var>) -> Option<Var> {
        order.into_iter().find(|&var| self.values[var.index()].is_none())
    }

    pub fn num_vars(&self) -> usize {
        self.values.len()
    }
}
