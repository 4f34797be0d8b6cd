//! Error types for the session engine.
//!
//! Recoverable conditions (bad seed text, invalid configuration edits,
//! unsupported solve) are typed errors. Out-of-range history or preset
//! indices are produced only by the engine itself, so those are asserts,
//! not errors.

use thiserror::Error;

/// A backend could not construct an initial state from a seed.
///
/// Unrecoverable for that session-start attempt: there is no valid prior
/// state to fall back on, so the failed operation leaves the session (or
/// constructor) untouched and reports this instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid seed `{seed}`: {reason}")]
pub struct SeedError {
    /// The offending seed text.
    pub seed: String,
    /// Backend-supplied description of what was wrong with it.
    pub reason: String,
}

impl SeedError {
    /// Create a new seed error.
    pub fn new(seed: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            reason: reason.into(),
        }
    }
}

/// A configuration edit or parameter set was rejected.
///
/// Always recoverable: the session's committed params are untouched when
/// one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A single editable field could not be parsed.
    #[error("field `{field}`: {reason}")]
    Field {
        /// Label of the offending field.
        field: String,
        /// What was wrong with its value.
        reason: String,
    },

    /// The assembled parameters failed backend validation.
    #[error("{0}")]
    Params(String),
}

impl ConfigError {
    /// Error for a single unparseable field.
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Error for parameters that failed validation as a whole.
    pub fn params(reason: impl Into<String>) -> Self {
        Self::Params(reason.into())
    }
}

/// A solve request could not produce a solved state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The backend does not implement solving.
    #[error("this puzzle does not support solving")]
    Unsupported,

    /// The backend tried and failed.
    #[error("solve failed: {0}")]
    Failed(String),
}
