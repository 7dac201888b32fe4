//! Clause-list simplification by a single committed literal.
//!
//! This is the remaining piece of the literal algebra: given a clause list and a literal
//! that has just been committed true, drop every clause the literal satisfies and strip the
//! negation of the literal from the clauses that remain.
use crate::lit::Lit;

/// Simplifies `clauses` by the assignment of `lit`.
///
/// Every clause containing `lit` is dropped (it is already satisfied). Every clause containing
/// `!lit` has that literal removed. The relative order of surviving clauses is preserved. Used by
/// the recursive search variants, which materialize a fresh clause list per branch rather than
/// mutating a shared structure.
pub fn simplify(clauses: &[Vec<Lit>], lit: Lit) -> Vec<Vec<Lit>> {
    let neg = !lit;
    let mut result = Vec::with_capacity(clauses.len());

    for clause in clauses {
        if clause.contains(&lit) {
            continue;
        }
        if clause.contains(&neg) {
            result.push(clause.iter().copied().filter(|&l| l != neg).collect());
        } else {
            result.push(clause.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolTable;

    fn lits(symbols: &mut SymbolTable, tokens: &[&str]) -> Vec<Lit> {
        tokens.iter().map(|t| symbols.parse_token(t)).collect()
    }

    #[test]
    fn drops_satisfied_clauses_and_strips_negation() {
        let mut symbols = SymbolTable::new();
        let clauses = vec![
            lits(&mut symbols, &["A", "B"]),
            lits(&mut symbols, &["-A", "C"]),
            lits(&mut symbols, &["B", "C"]),
        ];
        let a = symbols.parse_token("A");

        let simplified = simplify(&clauses, a);

        assert_eq!(simplified.len(), 2);
        assert_eq!(simplified[0], lits(&mut symbols, &["C"]));
        assert_eq!(simplified[1], lits(&mut symbols, &["B", "C"]));
    }

    #[test]
    fn preserves_order() {
        let mut symbols = SymbolTable::new();
        let clauses = vec![
            lits(&mut symbols, &["B"]),
            lits(&mut symbols, &["-A", "C"]),
            lits(&mut symbols, &["A", "D"]),
        ];
        let a = symbols.parse_token("A");
        let simplified = simplify(&clauses, a);
        assert_eq!(simplified, vec![lits(&mut symbols, &["B"]), lits(&mut symbols, &["C"])]);
    }
}
