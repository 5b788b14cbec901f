//! Completes a partial assignment over its don't-care (free) variables by
//! enumerating the Cartesian product of `{false, true}` over them.
//!
//! This is lazy and lives entirely independent of the DPLL search that
//! produced the partial assignment — a caller can stop after the first
//! expansion at no cost to the rest. Its length is `2^(free_count)`, so
//! `iterate_totality` should only be used over the variables a caller
//! actually needs decoded; [`iterate_totality_over`] lets a caller scope
//! that set explicitly instead of expanding the builder's entire universe.

use crate::builder::Builder;
use crate::cnf::VarId;
use crate::dpll::PartialAssignment;

/// Lazily yields every total assignment extending `partial` over `missing`,
/// in lexicographic order (the first variable in `missing` changes slowest,
/// `false` before `true` at each position).
pub struct Totality {
    missing: Vec<VarId>,
    base: PartialAssignment,
    index: u64,
    combinations: u64,
}

impl Iterator for Totality {
    type Item = PartialAssignment;

    fn next(&mut self) -> Option<PartialAssignment> {
        if self.index >= self.combinations {
            return None;
        }
        let n = self.missing.len();
        let mut assignment = self.base.clone();
        for (j, &var) in self.missing.iter().enumerate() {
            let shift = n - 1 - j;
            let truth = (self.index >> shift) & 1 == 1;
            assignment.insert(var, truth);
        }
        self.index += 1;
        Some(assignment)
    }
}

fn totality_over(vars: impl IntoIterator<Item = VarId>, partial: &PartialAssignment) -> Totality {
    let missing: Vec<VarId> = vars.into_iter().filter(|v| !partial.contains_key(v)).collect();
    let combinations = 1u64.checked_shl(missing.len() as u32).expect("too many free variables to enumerate");
    Totality {
        missing,
        base: partial.clone(),
        index: 0,
        combinations,
    }
}

/// Expands `partial` over every variable the builder has ever allocated.
/// Can be `2^k` large for nontrivial problems — prefer
/// [`iterate_totality_over`] when only a handful of variables are actually
/// going to be decoded.
pub fn iterate_totality(builder: &Builder, partial: &PartialAssignment) -> Totality {
    totality_over(builder.all_vars().iter().copied(), partial)
}

/// Expands `partial` over only the given variable subset, ignoring any
/// other free variables the builder may still have.
pub fn iterate_totality_over(vars: &[VarId], partial: &PartialAssignment) -> Totality {
    totality_over(vars.iter().copied(), partial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn expands_all_combinations_in_order() {
        let partial = FxHashMap::default();
        let all: Vec<_> = totality_over(vec![1, 2], &partial).collect();
        assert_eq!(all.len(), 4);
        assert_eq!((all[0][&1], all[0][&2]), (false, false));
        assert_eq!((all[1][&1], all[1][&2]), (false, true));
        assert_eq!((all[2][&1], all[2][&2]), (true, false));
        assert_eq!((all[3][&1], all[3][&2]), (true, true));
    }

    #[test]
    fn already_total_assignment_yields_one() {
        let mut partial = FxHashMap::default();
        partial.insert(1, true);
        let all: Vec<_> = totality_over(vec![1], &partial).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0][&1], true);
    }

    #[test]
    fn scoped_variant_ignores_vars_outside_scope() {
        let mut partial = FxHashMap::default();
        partial.insert(5, true);
        let all: Vec<_> = iterate_totality_over(&[1, 2], &partial).collect();
        assert_eq!(all.len(), 4);
        for assignment in &all {
            assert!(!assignment.contains_key(&99));
        }
    }
}
