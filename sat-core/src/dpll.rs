//! The DPLL search engine: unit propagation + pure-literal elimination,
//! branching on the first variable of the first remaining clause, yielding
//! every satisfying (partial) assignment lazily as an [`Iterator`].
//!
//! There is no clause learning, no watched literals, no restarts — plain
//! DPLL, by design. Its contract is correctness and composability with the
//! bit-blaster in [`crate::integer`], not speed.

use crate::cnf::{Clause, VarId};
use crate::instance::Instance;
use rustc_hash::FxHashMap;

/// A satisfying (possibly partial) assignment. Variables absent from the
/// map are free — any value completes the model.
pub type PartialAssignment = FxHashMap<VarId, bool>;

/// Lazily enumerates every satisfying assignment of `instance`, in DPLL
/// tree order (for each branching variable, the `false` subtree is fully
/// explored before the `true` subtree). Dropping the iterator mid-stream
/// discards the unexplored search state at no extra cost — there is no
/// checkpointing to resume from.
pub struct Solutions {
    /// Pending instances to resume DPLL from, in LIFO order. Pushing a
    /// branch's `true`-instance before its `false`-instance and popping
    /// from the back reproduces the recursive "explore false, then true"
    /// order without needing actual recursion.
    stack: Vec<Instance>,
}

/// Runs DPLL search over `instance`, yielding every satisfying assignment.
///
/// Tautology clauses (a variable appearing both positively and negatively)
/// are dropped once up front — DPLL never introduces new tautologies, so
/// this pre-filter is the only place they are removed.
pub fn solve(instance: &Instance) -> Solutions {
    let mut start = instance.clone();
    start.clauses.retain(|c| !c.is_tautology());
    Solutions { stack: vec![start] }
}

impl Iterator for Solutions {
    type Item = PartialAssignment;

    fn next(&mut self) -> Option<PartialAssignment> {
        while let Some(mut state) = self.stack.pop() {
            if state.propagate().is_err() {
                // This branch is dead; fall through to the next stack entry.
                continue;
            }
            if state.clauses.is_empty() {
                log::trace!("dpll: model found with {} assignments", state.assignments.len());
                return Some(state.assignments);
            }

            let var = state.clauses[0]
                .first_variable()
                .expect("a non-empty, non-tautological clause has at least one variable");

            log::trace!("dpll: branching on variable {}", var);

            let mut true_branch = state.clone();
            // `state` becomes the false branch; apply_subst can't fail here
            // because `var` was just read off an active, non-unit-or-empty
            // clause and is not yet assigned.
            if state.apply_subst(var, false).is_err() {
                // Pushing only the true branch still preserves completeness.
                if true_branch.apply_subst(var, true).is_ok() {
                    self.stack.push(true_branch);
                }
                continue;
            }
            if true_branch.apply_subst(var, true).is_ok() {
                self.stack.push(true_branch);
            }
            self.stack.push(state);
        }
        None
    }
}

/// Verifies every yielded assignment against the clauses DPLL search
/// started from (before any substitution). Used as a post-hoc assertion by
/// callers who want a stronger, independently-checked guarantee on `solve`'s
/// output.
pub fn verify_against(original_clauses: &[Clause], assignment: &PartialAssignment) -> bool {
    Instance::verify_against(original_clauses, assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cnf::Clause;

    fn instance_of(clauses: Vec<Clause>) -> Instance {
        Instance::new(clauses)
    }

    #[test]
    fn trivially_satisfiable() {
        let instance = instance_of(vec![Clause::new(vec![1], vec![])]);
        let models: Vec<_> = solve(&instance).collect();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0][&1], true);
    }

    #[test]
    fn unsatisfiable_yields_nothing() {
        let instance = instance_of(vec![
            Clause::new(vec![1], vec![]),
            Clause::new(Vec::<usize>::new(), vec![1]),
        ]);
        assert_eq!(solve(&instance).count(), 0);
    }

    #[test]
    fn tautology_prefilter_does_not_change_models() {
        // (1 or !1) is trivially true and should not constrain anything.
        let original = vec![Clause::new(vec![2], vec![])];
        let mut with_tautology = original.clone();
        with_tautology.push(Clause::new(vec![1], vec![1]));

        let plain: Vec<_> = solve(&instance_of(original)).collect();
        let with_taut: Vec<_> = solve(&instance_of(with_tautology)).collect();
        assert_eq!(plain.len(), with_taut.len());
    }

    #[test]
    fn every_yielded_assignment_verifies() {
        // A small 3-clause formula with several models.
        let clauses = vec![
            Clause::new(vec![1, 2], vec![]),
            Clause::new(vec![3], vec![1]),
            Clause::new(vec![2], vec![3]),
        ];
        for model in solve(&instance_of(clauses.clone())) {
            assert!(verify_against(&clauses, &model));
        }
    }

    #[test]
    fn branches_explored_false_before_true() {
        // "exactly one of {1, 2}": (1 or 2) and (!1 or !2). Neither variable
        // is pure or forced by a unit clause, so branching on variable 1 is
        // required; its false branch must be explored before its true one.
        let clauses = vec![Clause::new(vec![1, 2], vec![]), Clause::new(vec![], vec![1, 2])];
        let models: Vec<_> = solve(&instance_of(clauses)).collect();
        let first_false_pos = models.iter().position(|m| m.get(&1) == Some(&false));
        let first_true_pos = models.iter().position(|m| m.get(&1) == Some(&true));
        assert!(first_false_pos.is_some() && first_true_pos.is_some());
        assert!(first_false_pos < first_true_pos);
    }
}
