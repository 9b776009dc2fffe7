//! Error types surfaced by the catalog managers.

use crate::patch::PatchError;
use resource_store::StoreError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The caller passed an identifier that can never denote a stored record.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A payload failed a field constraint.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The requested record (or a record it references) does not exist.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// A patch document could not be applied.
    #[error(transparent)]
    Patch(#[from] PatchError),

    /// The backing store failed to answer.
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl CatalogError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        CatalogError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Maps a store failure onto the catalog error for `resource`.
    pub fn from_store(resource: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => CatalogError::NotFound { resource, id },
            StoreError::Constraint(violation) => CatalogError::Validation(violation.to_string()),
            other => CatalogError::Store(other),
        }
    }
}
