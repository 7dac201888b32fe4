//! A formula under the two-watched-literal scheme: a [`crate::clause::ClauseDb`] plus the
//! watcher index mapping each literal `F` to the clauses currently watching `!F`.
//!
//! `watch_lists[key]` holds the clauses whose watched literal negates to `key`, so that assigning
//! `key` true is exactly the condition under which those clauses need to be revisited.
use crate::assignment::Assignment;
use crate::clause::{ClauseDb, ClauseId, WatchSlot};
use crate::lit::Lit;

#[derive(Clone)]
pub struct Formula {
    clauses: ClauseDb,
    watch_lists: Vec<Vec<(ClauseId, WatchSlot)>>,
}

impl Formula {
    /// Builds a formula over `num_vars` variables from an initial clause list, registering the
    /// watched literals of every clause with two or more literals.
    pub fn new(num_vars: usize, clause_literals: Vec<Vec<Lit>>) -> Formula {
        let mut clauses = ClauseDb::new();
        let ids: Vec<ClauseId> = clause_literals.iter().map(|lits| clauses.insert(lits)).collect();

        let mut formula = Formula {
            clauses,
            watch_lists: vec![Vec::new(); 2 * num_vars],
        };
        for id in ids {
            formula.register_watches(id);
        }
        formula
    }

    fn register_watches(&mut self, id: ClauseId) {
        for slot in [WatchSlot::First, WatchSlot::Second] {
            if let Some(lit) = self.clauses.get(id).watched_lit(slot) {
                let key = (!lit).code();
                self.watch_lists[key].push((id, slot));
            }
        }
    }

    pub fn clauses(&self) -> &ClauseDb {
        &self.clauses
    }

    pub(crate) fn clause_db_mut(&mut self) -> &mut ClauseDb {
        &mut self.clauses
    }

    pub(crate) fn watch_list_mut(&mut self, lit: Lit) -> &mut Vec<(ClauseId, WatchSlot)> {
        &mut self.watch_lists[lit.code()]
    }

    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|clause| clause.is_satisfied(assignment))
    }

    /// Snapshots watch positions and watch lists for backtracking.
    ///
    /// Clause contents never change after construction, so only watch state needs saving; the
    /// assignment and trail are snapshotted separately by the search routines.
    pub fn save(&self) -> FormulaState {
        FormulaState {
            watch_positions: self.clauses.save_watch_state(),
            watch_lists: self.watch_lists.clone(),
        }
    }

    pub fn restore(&mut self, state: FormulaState) {
        self.clauses.restore_watch_state(&state.watch_positions);
        self.watch_lists = state.watch_lists;
    }
}

/// Opaque snapshot returned by [`Formula::save`].
pub struct FormulaState {
    watch_positions: Vec<(Option<usize>, Option<usize>)>,
    watch_lists: Vec<Vec<(ClauseId, WatchSlot)>>,
}
