//! Crate-internal error type.
//!
//! `Unsatisfiable` is the only recoverable failure inside search: it fires
//! when a clause becomes empty under substitution and is caught exactly at
//! the recursion level that invoked [`crate::instance::Instance::propagate`].
//! It never escapes [`crate::dpll::solve`] to callers — a branch that raises
//! it is simply abandoned. Everything else (mismatched bit widths,
//! re-assigning an already-assigned variable) is a programmer error and is
//! enforced with `assert!`/`debug_assert!`.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoreError {
    #[error("clause became empty under substitution")]
    Unsatisfiable,
}
