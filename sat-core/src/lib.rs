//! A DPLL-style boolean satisfiability solver paired with a bit-blasting
//! circuit compiler for fixed-width modular integer arithmetic.
//!
//! The two halves are tightly coupled by design: [`builder::Builder`] and
//! the gate/circuit functions in [`gates`] and [`integer`] turn constraints
//! over fixed-width integers (addition, XOR, rotation, comparison, equality
//! to constants) into CNF clauses; [`dpll::solve`] finds satisfying
//! assignments for that CNF; [`enumerate`] completes the don't-care
//! variables DPLL leaves free. There is no clause learning, no watched
//! literals, no restarts and no incremental solving — this is deliberately
//! plain DPLL, whose value is correctness and composability with the
//! bit-blaster rather than raw speed.

pub mod builder;
pub mod cnf;
pub mod dpll;
pub mod enumerate;
mod error;
pub mod gates;
pub mod instance;
pub mod integer;

pub use builder::Builder;
pub use cnf::{Clause, VarId};
pub use dpll::{solve, verify_against, PartialAssignment, Solutions};
pub use enumerate::{iterate_totality, iterate_totality_over, Totality};
pub use instance::Instance;
pub use integer::{
    bit_inverse, compare, integer_constant_constraint, integer_equals_zero, integer_negate, rotate, sum_of, xor_of,
    Comparison, Integer, Sum,
};
