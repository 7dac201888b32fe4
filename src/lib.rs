//! A DPLL-family SAT solver.
//!
//! `solve` is the single programmatic entry point: given the full set of variable names that
//! may appear, a list of clauses in the textual literal convention (`"A"` / `"-A"`), and an
//! algorithm tag set ([`dispatcher::Variant`]), it returns a satisfying [`model::Model`] or an
//! explicit unsatisfiable outcome. [`verify`] independently checks a model against the original
//! clauses.
pub mod assignment;
pub mod clause;
pub mod dimacs;
pub mod dispatcher;
pub mod error;
pub mod lit;
pub mod model;
pub mod propagate;
pub mod pure_literal;
pub mod restart;
pub mod search;
pub mod simplify;
pub mod symbols;
pub mod unit_prop;
pub mod verify;
pub mod vsids;
pub mod watch;

pub use dispatcher::Variant;
pub use error::SolveError;
pub use lit::{Lit, Var};
pub use model::{Model, SolveOutcome};
pub use verify::verify;

use symbols::SymbolTable;

/// Solves a CNF formula over the given variable names under the chosen algorithm configuration.
///
/// `variables` enumerates every variable symbol that may appear; `clauses` is a sequence of
/// clauses, each a sequence of literal tokens (the variable name, or the name prefixed with `-`
/// for negation). Fails only if `config` is not one of the eight recognized combinations.
pub fn solve<C, L, S>(variables: &[&str], clauses: C, config: Variant) -> std::result::Result<SolveOutcome, SolveError>
where
    C: IntoIterator<Item = L>,
    L: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut symbols = SymbolTable::new();
    for &name in variables {
        symbols.intern(name);
    }

    let clause_literals: Vec<Vec<lit::Lit>> = clauses
        .into_iter()
        .map(|clause| clause.into_iter().map(|token| symbols.parse_token(token.as_ref())).collect())
        .collect();

    let vars: Vec<lit::Var> = symbols.vars().collect();
    let num_vars = symbols.len();

    dispatcher::dispatch(&vars, clause_literals, num_vars, &symbols, config)
}
