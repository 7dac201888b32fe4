//! Interning of opaque variable symbols.
//!
//! The external API treats variables as arbitrary strings and literals
//! as those strings optionally prefixed with `-`. Internally the solver only ever works with the
//! dense [`Var`]/[`Lit`] representation from [`crate::lit`]. A `SymbolTable` is the bridge: it is
//! built once per [`crate::solve`] call and interns every variable name that appears.
use std::collections::HashMap;

use crate::lit::{Lit, Var};

/// Bidirectional mapping between variable names and dense [`Var`] indices.
#[derive(Default)]
pub struct SymbolTable {
    names: Vec<String>,
    by_name: HashMap<String, Var>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `name`, returning its `Var`. Calling this again with the same name returns the
    /// same `Var`.
    pub fn intern(&mut self, name: &str) -> Var {
        if let Some(&var) = self.by_name.get(name) {
            return var;
        }
        let var = Var::from_index(self.names.len());
        self.names.push(name.to_owned());
        self.by_name.insert(name.to_owned(), var);
        var
    }

    /// Parses a literal token (`"A"` or `"-A"`) into a `Lit`, interning the variable name if it
    /// has not been seen before.
    ///
    /// This is the literal-algebra `parse` operation at the textual boundary: it splits a
    /// token into (variable, polarity) exactly like the reference `parse_literal` helper, then
    /// interns the variable name into the dense representation.
    pub fn parse_token(&mut self, token: &str) -> Lit {
        match token.strip_prefix('-') {
            Some(name) => self.intern(name).negative(),
            None => self.intern(token).positive(),
        }
    }

    pub fn name(&self, var: Var) -> &str {
        &self.names[var.index()]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn vars(&self) -> impl Iterator<Item = Var> {
        (0..self.names.len()).map(Var::from_index)
    }
}
