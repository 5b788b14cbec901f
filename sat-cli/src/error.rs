//! Errors that can surface at the CLI boundary — bad arguments, or a
//! recovered answer that fails its own sanity check. `sat_core`'s internal
//! `CoreError` never reaches here; by the time a command calls into
//! `sat-core` its inputs are already validated.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("no key recovered the given ciphertext")]
    KeyRecoveryFailed,

    #[error("recovered key replayed a different ciphertext than expected")]
    KeyReplayMismatch,
}
