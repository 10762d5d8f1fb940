use crate::types::DbId;

/// Error taxonomy shared by every layer of the ledger.
///
/// Each variant is a distinguishable kind the caller can act on:
/// `Busy` is the only retryable one (nothing was committed), everything
/// else is deterministic and must not be retried with the same input.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Busy: {0}")]
    Busy(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
