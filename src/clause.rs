//! Watched-clause storage.
//!
//! There is no clause learning or deletion in this engine, so clauses are stored
//! in a flat, never-shrinking `Vec` rather than a compacting arena: there is nothing to
//! garbage-collect. Each watch is an index into the clause rather than a literal swapped to the
//! front, and the watch bookkeeping (`is_satisfied`/`is_conflicting`/`get_unit_literal`/
//! `update_watch`) lives on the clause itself.
use crate::assignment::Assignment;
use crate::lit::Lit;

/// Dense id of a clause within a [`ClauseDb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClauseId(u32);

impl ClauseId {
    fn from_index(index: usize) -> ClauseId {
        ClauseId(index as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A clause with its two watch slots.
///
/// Both watches are `None` for an empty clause, `w2` is `None` for a unit clause, and the
/// two watches are never equal once the clause has two or more literals.
#[derive(Clone, Debug)]
pub struct WatchedClause {
    literals: Vec<Lit>,
    w1: Option<usize>,
    w2: Option<usize>,
}

impl WatchedClause {
    fn new(literals: Vec<Lit>) -> Self {
        let w1 = if literals.is_empty() { None } else { Some(0) };
        let w2 = if literals.len() > 1 { Some(1) } else { None };
        WatchedClause { literals, w1, w2 }
    }

    pub fn literals(&self) -> &[Lit] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn watch1(&self) -> Option<usize> {
        self.w1
    }

    pub fn watch2(&self) -> Option<usize> {
        self.w2
    }

    pub fn watch_index(&self, slot: WatchSlot) -> Option<usize> {
        match slot {
            WatchSlot::First => self.w1,
            WatchSlot::Second => self.w2,
        }
    }

    pub fn watched_lit(&self, slot: WatchSlot) -> Option<Lit> {
        self.watch_index(slot).map(|i| self.literals[i])
    }

    pub(crate) fn set_watch(&mut self, slot: WatchSlot, index: usize) {
        match slot {
            WatchSlot::First => self.w1 = Some(index),
            WatchSlot::Second => self.w2 = Some(index),
        }
    }

    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.literals.iter().any(|&lit| assignment.is_satisfied(lit))
    }

    /// The literal a unit-under-assignment clause must still satisfy, if any.
    ///
    /// Mirrors `WatchedClause.get_unit_literal`: a clause is unit exactly when one watch is
    /// falsified and the other is unassigned (or the clause has only one literal left to watch).
    pub fn unit_literal(&self, assignment: &Assignment) -> Option<Lit> {
        let lit1 = self.watched_lit(WatchSlot::First)?;

        let Some(lit2) = self.watched_lit(WatchSlot::Second) else {
            return assignment.is_unassigned(lit1).then_some(lit1);
        };

        if let Some(value1) = assignment.value_of(lit1) {
            if !value1 && assignment.is_unassigned(lit2) {
                return Some(lit2);
            }
        } else if let Some(value2) = assignment.value_of(lit2) {
            if !value2 {
                return Some(lit1);
            }
        }
        None
    }

    /// Both watches falsified: the clause cannot be satisfied under this assignment.
    pub fn is_conflicting(&self, assignment: &Assignment) -> bool {
        let Some(lit1) = self.watched_lit(WatchSlot::First) else {
            return true;
        };
        let Some(lit2) = self.watched_lit(WatchSlot::Second) else {
            return assignment.is_falsified(lit1);
        };
        assignment.is_falsified(lit1) && assignment.is_falsified(lit2)
    }

    /// Looks for a literal outside the two watched slots that is unassigned or already
    /// satisfied, to take over `slot`. Returns its index without moving the watch itself;
    /// the caller commits via [`WatchedClause::set_watch`].
    pub fn find_replacement(&self, slot: WatchSlot, assignment: &Assignment) -> Option<usize> {
        let other = match slot {
            WatchSlot::First => self.w2,
            WatchSlot::Second => self.w1,
        };
        let current = self.watch_index(slot);
        self.literals.iter().enumerate().find_map(|(i, &lit)| {
            if Some(i) == current || Some(i) == other {
                return None;
            }
            (assignment.is_unassigned(lit) || assignment.is_satisfied(lit)).then_some(i)
        })
    }

    /// Saved `(w1, w2)` pair, for `Formula::save`/`restore`.
    pub(crate) fn watch_state(&self) -> (Option<usize>, Option<usize>) {
        (self.w1, self.w2)
    }

    pub(crate) fn restore_watch_state(&mut self, state: (Option<usize>, Option<usize>)) {
        self.w1 = state.0;
        self.w2 = state.1;
    }
}

/// Which of a clause's two watch slots is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchSlot {
    First,
    Second,
}

/// Owns every clause of a formula. Immutable in content; only watch positions change.
#[derive(Clone, Default)]
pub struct ClauseDb {
    clauses: Vec<WatchedClause>,
}

impl ClauseDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a clause, deduplicating repeated literals (a clause containing the same literal
    /// twice behaves as if it appeared once) while preserving first-occurrence order.
    pub fn insert(&mut self, literals: &[Lit]) -> ClauseId {
        let mut deduped = Vec::with_capacity(literals.len());
        for &lit in literals {
            if !deduped.contains(&lit) {
                deduped.push(lit);
            }
        }
        let id = ClauseId::from_index(self.clauses.len());
        self.clauses.push(WatchedClause::new(deduped));
        id
    }

    pub fn get(&self, id: ClauseId) -> &WatchedClause {
        &self.clauses[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: ClauseId) -> &mut WatchedClause {
        &mut self.clauses[id.index()]
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ClauseId> {
        (0..self.clauses.len()).map(ClauseId::from_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WatchedClause> {
        self.clauses.iter()
    }

    pub(crate) fn save_watch_state(&self) -> Vec<(Option<usize>, Option<usize>)> {
        self.clauses.iter().map(WatchedClause::watch_state).collect()
    }

    pub(crate) fn restore_watch_state(&mut self, state: &[(Option<usize>, Option<usize>)]) {
        debug_assert_eq!(state.len(), self.clauses.len());
        for (clause, &saved) in self.clauses.iter_mut().zip(state) {
            clause.restore_watch_state(saved);
        }
    }
}
