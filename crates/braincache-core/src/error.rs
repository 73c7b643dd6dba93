//! Error taxonomy for domain operations.
//!
//! Every authorization failure surfaces as one of these kinds; none is
//! retried and none is fatal to the process. `NotFound` deliberately does
//! not distinguish "never existed" from "revoked".

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Resource, grant, or token does not exist or was already revoked.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Caller lacks the ownership or permission the operation requires.
    /// Also returned for gated lookups of resources that do not exist, so
    /// existence never leaks to non-owners.
    #[error("access denied")]
    Forbidden,

    /// Self-referential edge cases: granting to oneself, duplicate handle.
    #[error("{0}")]
    Conflict(String),

    /// Malformed input: bad permission level, resource kind, empty fields,
    /// plan limits exceeded.
    #[error("{0}")]
    Validation(String),

    /// Persistence failure.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
