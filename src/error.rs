//! Typed errors for the task core.
//!
//! Every lifecycle and query operation fails with one of these. None of them
//! is retried by the core — failures propagate synchronously to the caller.

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The referenced task id does not exist.
    #[error("task not found: {id}")]
    NotFound { id: String },

    /// Missing or malformed required input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Id collision on insert. Unreachable with ULID generation; treated as
    /// a fatal internal invariant violation, not user-recoverable.
    #[error("task id collision: {id}")]
    Conflict { id: String },
}
