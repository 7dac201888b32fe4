//! Model verification.
use crate::model::Model;

/// `true` only if every clause contains at least one literal satisfied by `model`. A variable
/// absent from `model` is unassigned, so a clause requiring it cannot be satisfied that way.
pub fn verify(clauses: &[Vec<(String, bool)>], model: &Model) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|(name, positive)| model.get(name) == Some(*positive))
    })
}
