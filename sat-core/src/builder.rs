//! Fresh-variable allocation and clause accumulation.
//!
//! `Builder` is the thing circuit constructors in [`crate::integer`] and
//! gates in [`crate::gates`] are threaded through: it hands out variable
//! identifiers, remembers human-readable names for debugging, and
//! accumulates every clause emitted against it.

use crate::cnf::{Clause, VarId};
use crate::instance::Instance;
use indexmap::IndexSet;
use rustc_hash::FxHashMap;

/// Allocates fresh boolean variables and accumulates the clauses that
/// constrain them.
pub struct Builder {
    counter: VarId,
    clauses: Vec<Clause>,
    vars: IndexSet<VarId>,
    var_names: FxHashMap<VarId, String>,
    /// The distinguished `false` variable, constrained by the unit clause
    /// `(¬false)`.
    pub false_var: VarId,
    /// The distinguished `true` variable, constrained by the unit clause
    /// `(true)`.
    pub true_var: VarId,
    /// `{0: false_var, 1: true_var}`, handy when wiring a constant bit.
    pub bools: FxHashMap<u8, VarId>,
}

impl Builder {
    pub fn new() -> Builder {
        let mut builder = Builder {
            counter: 0,
            clauses: Vec::new(),
            vars: IndexSet::new(),
            var_names: FxHashMap::default(),
            false_var: 0,
            true_var: 0,
            bools: FxHashMap::default(),
        };
        // Adding true/false is nearly free: the first unit-propagation pass
        // eliminates both immediately.
        builder.false_var = builder.new_var("false");
        builder.true_var = builder.new_var("true");
        builder.add_clause(vec![], vec![builder.false_var]);
        builder.add_clause(vec![builder.true_var], vec![]);
        builder.bools.insert(0, builder.false_var);
        builder.bools.insert(1, builder.true_var);
        builder
    }

    /// Allocates a fresh variable with a debug name.
    pub fn new_var(&mut self, name: impl Into<String>) -> VarId {
        self.counter += 1;
        let var = self.counter;
        self.vars.insert(var);
        self.var_names.insert(var, name.into());
        var
    }

    /// Every variable ever allocated through this builder.
    pub fn all_vars(&self) -> &IndexSet<VarId> {
        &self.vars
    }

    pub fn var_name(&self, var: VarId) -> Option<&str> {
        self.var_names.get(&var).map(String::as_str)
    }

    /// Appends a clause built from two (possibly overlapping) literal lists.
    pub fn add_clause(&mut self, positive: impl IntoIterator<Item = VarId>, negative: impl IntoIterator<Item = VarId>) {
        self.clauses.push(Clause::new(positive, negative));
    }

    /// Constrains `a == b` via `(a ∨ ¬b)` and `(b ∨ ¬a)`.
    pub fn equate(&mut self, a: VarId, b: VarId) {
        self.add_clause(vec![a], vec![b]);
        self.add_clause(vec![b], vec![a]);
    }

    /// Snapshots the builder's accumulated clauses into a fresh `Instance`
    /// with an empty assignment.
    pub fn make_instance(&self) -> Instance {
        log::debug!(
            "make_instance: {} variables, {} clauses",
            self.vars.len(),
            self.clauses.len()
        );
        Instance::new(self.clauses.clone())
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}
