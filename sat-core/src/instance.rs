//! An `Instance` owns a mutable collection of active clauses plus the
//! partial assignment accumulated so far, and implements unit propagation
//! and pure-literal elimination over them.

use crate::cnf::{Clause, VarId};
use crate::error::CoreError;
use rustc_hash::FxHashMap;

/// Mutable CNF instance: a residual clause set plus the assignment that
/// produced it. The union of `assignments` and any satisfying extension
/// over the remaining free variables satisfies every clause the instance
/// was originally built from.
#[derive(Clone, Debug, Default)]
pub struct Instance {
    pub clauses: Vec<Clause>,
    pub assignments: FxHashMap<VarId, bool>,
}

impl Instance {
    pub fn new(clauses: Vec<Clause>) -> Instance {
        Instance {
            clauses,
            assignments: FxHashMap::default(),
        }
    }

    /// Assigns `var = truth`, then walks every active clause applying the
    /// substitution and dropping those it satisfies. Fails if any clause
    /// empties out.
    ///
    /// # Panics
    /// Panics if `var` is already assigned — this is a programmer error;
    /// callers must check `assignments` first.
    pub(crate) fn apply_subst(&mut self, var: VarId, truth: bool) -> Result<(), CoreError> {
        assert!(
            !self.assignments.contains_key(&var),
            "variable {} is already assigned",
            var
        );
        self.assignments.insert(var, truth);

        let mut i = 0;
        while i < self.clauses.len() {
            match self.clauses[i].apply_subst(var, truth) {
                Ok(true) => {
                    self.clauses.swap_remove(i);
                }
                Ok(false) => i += 1,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Finds any unit clause, applies its forced literal, and returns
    /// whether progress was made.
    pub(crate) fn unit_propagate_once(&mut self) -> Result<bool, CoreError> {
        let unit = self.clauses.iter().find(|c| c.is_unit()).map(Clause::unit_literal);
        match unit {
            Some((var, truth)) => {
                self.apply_subst(var, truth)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Assigns every pure literal (a variable occurring with only one
    /// polarity across all active clauses) to satisfy every clause it
    /// appears in. Returns whether any progress was made.
    pub(crate) fn pure_literal_eliminate_once(&mut self) -> Result<bool, CoreError> {
        let mut only_positive: Vec<VarId> = Vec::new();
        let mut only_negative: Vec<VarId> = Vec::new();
        {
            let mut positive_literals = rustc_hash::FxHashSet::default();
            let mut negative_literals = rustc_hash::FxHashSet::default();
            for clause in &self.clauses {
                positive_literals.extend(clause.positive.iter().copied());
                negative_literals.extend(clause.negative.iter().copied());
            }
            for &var in &positive_literals {
                if !negative_literals.contains(&var) {
                    only_positive.push(var);
                }
            }
            for &var in &negative_literals {
                if !positive_literals.contains(&var) {
                    only_negative.push(var);
                }
            }
        }

        let made_progress = !only_positive.is_empty() || !only_negative.is_empty();
        for var in only_positive {
            if !self.assignments.contains_key(&var) {
                self.apply_subst(var, true)?;
            }
        }
        for var in only_negative {
            if !self.assignments.contains_key(&var) {
                self.apply_subst(var, false)?;
            }
        }
        Ok(made_progress)
    }

    /// Repeats unit propagation and pure-literal elimination until neither
    /// makes progress.
    pub(crate) fn propagate(&mut self) -> Result<(), CoreError> {
        loop {
            let mut made_progress = self.unit_propagate_once()?;
            made_progress |= self.pure_literal_eliminate_once()?;
            if !made_progress {
                break;
            }
        }
        log::debug!("propagate: fixpoint with {} clauses remaining", self.clauses.len());
        Ok(())
    }

    /// True iff every original clause (passed in, since `self.clauses` is
    /// the residual under `self.assignments`) is satisfied by `assignment`.
    pub fn verify_against(
        original_clauses: &[Clause],
        assignment: &FxHashMap<VarId, bool>,
    ) -> bool {
        original_clauses.iter().all(|clause| clause.is_satisfied_by(assignment))
    }
}
