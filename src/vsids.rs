//! VSIDS (Variable State Independent Decaying Sum) variable activity scoring.
//!
//! The heap tolerates stale entries instead of supporting a decreasing-key update: bumping a
//! variable pushes a fresh `(score, var)` pair rather than fixing up its existing position, and
//! [`Vsids::pick`] pops entries until it finds one whose score still matches the authoritative
//! value recorded in `current`. `ordered-float` supplies the `Ord`-on-`f64` wrapper the heap
//! needs.
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::assignment::Assignment;
use crate::lit::Var;

const RESCALE_THRESHOLD: f64 = 1e100;

#[derive(Clone)]
pub struct Vsids {
    current: Vec<f64>,
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, u32)>>,
    increment: f64,
    decay_factor: f64,
}

impl Vsids {
    /// Builds a scorer seeded with one point per literal occurrence, the same initial weighting
    /// as the reference scorer's `_initialize`.
    pub fn new(num_vars: usize, clauses: &[Vec<crate::lit::Lit>], decay_factor: f64) -> Vsids {
        let mut current = vec![0.0; num_vars];
        for clause in clauses {
            for lit in clause {
                current[lit.var().index()] += 1.0;
            }
        }
        let heap = current
            .iter()
            .enumerate()
            .map(|(index, &score)| Reverse((OrderedFloat(-score), index as u32)))
            .collect();
        Vsids {
            current,
            heap,
            increment: 1.0,
            decay_factor,
        }
    }

    /// Increases `var`'s score by the current bump increment and pushes a fresh heap entry.
    pub fn bump(&mut self, var: Var) {
        let score = &mut self.current[var.index()];
        *score += self.increment;
        self.heap.push(Reverse((OrderedFloat(-*score), var.index() as u32)));
    }

    pub fn bump_clause(&mut self, clause: &[crate::lit::Lit]) {
        for lit in clause {
            self.bump(lit.var());
        }
    }

    /// Grows the effective bump increment, the same trick the reference scorer uses instead of
    /// periodically scaling every score down.
    ///
    /// Dividing by `decay_factor` on every conflict eventually overflows `f64` on very deep
    /// searches; once the increment crosses `RESCALE_THRESHOLD` every score and the increment
    /// itself are scaled down together, which changes no relative ordering and so no observable
    /// decision.
    pub fn decay(&mut self) {
        self.increment /= self.decay_factor;
        if self.increment > RESCALE_THRESHOLD {
            for score in &mut self.current {
                *score /= RESCALE_THRESHOLD;
            }
            self.increment /= RESCALE_THRESHOLD;
            self.heap = self
                .current
                .iter()
                .enumerate()
                .map(|(index, &score)| Reverse((OrderedFloat(-score), index as u32)))
                .collect();
        }
    }

    /// Pops stale entries until an unassigned variable whose score matches `current` is found.
    pub fn pick(&mut self, assignment: &Assignment) -> Option<Var> {
        while let Some(Reverse((neg_score, index))) = self.heap.pop() {
            let var = Var::from_index(index as usize);
            if assignment.get(var).is_some() {
                continue;
            }
            if OrderedFloat(-self.current[index as usize]) != neg_score {
                continue;
            }
            self.heap.push(Reverse((neg_score, index)));
            return Some(var);
        }
        None
    }
}
