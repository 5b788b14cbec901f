//! Variables, literals and clauses — the CNF data model.
//!
//! A [`Clause`] is a disjunction of literals, stored as two disjoint sets of
//! variable identifiers (those appearing positively and those appearing
//! negatively) rather than a list of signed literals. Set membership makes
//! `apply_subst` an O(1) removal; using an insertion-ordered set
//! ([`indexmap::IndexSet`]) rather than a hash set keeps the "first variable
//! of the first clause" branching heuristic in [`crate::dpll`] reproducible
//! across runs with the same input clauses.

use crate::error::CoreError;
use indexmap::IndexSet;

/// A CNF variable identifier. Variables are never recycled.
pub type VarId = usize;

/// A disjunction of literals over disjoint positive/negative variable sets.
#[derive(Clone, Debug, Default)]
pub struct Clause {
    pub positive: IndexSet<VarId>,
    pub negative: IndexSet<VarId>,
}

impl Clause {
    /// Builds a clause from two (possibly overlapping) lists of variables.
    /// Duplicate variables within a list are silently deduplicated by the
    /// underlying set; a variable present in both lists makes the clause a
    /// tautology, which is filtered out at the start of [`crate::dpll::solve`]
    /// rather than here.
    pub fn new(positive: impl IntoIterator<Item = VarId>, negative: impl IntoIterator<Item = VarId>) -> Clause {
        Clause {
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
        }
    }

    /// A clause is a tautology iff a variable occurs in both sets.
    pub fn is_tautology(&self) -> bool {
        self.positive.iter().any(|v| self.negative.contains(v))
    }

    /// A clause is unit iff exactly one literal remains.
    pub fn is_unit(&self) -> bool {
        self.positive.len() + self.negative.len() == 1
    }

    /// A clause is empty iff both sets are empty (falsity).
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Returns the clause's sole literal, as `(var, required_truth)`.
    /// Panics if the clause is not unit — callers must check first.
    pub fn unit_literal(&self) -> (VarId, bool) {
        debug_assert!(self.is_unit());
        if let Some(&var) = self.positive.iter().next() {
            (var, true)
        } else {
            let var = *self.negative.iter().next().expect("unit clause has one literal");
            (var, false)
        }
    }

    /// The first variable appearing in the clause (positive set first, then
    /// negative), used by DPLL's branching heuristic.
    pub fn first_variable(&self) -> Option<VarId> {
        self.positive.iter().next().or_else(|| self.negative.iter().next()).copied()
    }

    /// Applies a substitution `var = truth` to this clause. Returns `Ok(true)`
    /// if the clause is now satisfied, `Ok(false)` if it survives unsatisfied,
    /// or `Err(CoreError::Unsatisfiable)` if the clause became empty.
    pub(crate) fn apply_subst(&mut self, var: VarId, truth: bool) -> Result<bool, CoreError> {
        if truth {
            self.negative.shift_remove(&var);
            if self.is_empty() {
                return Err(CoreError::Unsatisfiable);
            }
            Ok(self.positive.contains(&var))
        } else {
            self.positive.shift_remove(&var);
            if self.is_empty() {
                return Err(CoreError::Unsatisfiable);
            }
            Ok(self.negative.contains(&var))
        }
    }

    /// True if the clause is satisfied by `assignment` (a total or partial
    /// function from variable to truth value).
    pub fn is_satisfied_by(&self, assignment: &impl VarLookup) -> bool {
        self.positive.iter().any(|&v| assignment.lookup(v) == Some(true))
            || self.negative.iter().any(|&v| assignment.lookup(v) == Some(false))
    }
}

/// Minimal lookup interface so `verify_against` can work over either a
/// `HashMap`-like partial assignment or a totality-expanded one without
/// committing to a concrete map type.
pub trait VarLookup {
    fn lookup(&self, var: VarId) -> Option<bool>;
}

impl VarLookup for rustc_hash::FxHashMap<VarId, bool> {
    fn lookup(&self, var: VarId) -> Option<bool> {
        self.get(&var).copied()
    }
}

impl VarLookup for std::collections::HashMap<VarId, bool> {
    fn lookup(&self, var: VarId) -> Option<bool> {
        self.get(&var).copied()
    }
}
