//! # Store Errors
//!
//! Error types shared by the store actor, its client and the mock store.

/// A record failed the store's write constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ConstraintViolation {
    pub field: &'static str,
    pub reason: String,
}

impl ConstraintViolation {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur within the store itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Constraint violated: {0}")]
    Constraint(#[from] ConstraintViolation),
}
