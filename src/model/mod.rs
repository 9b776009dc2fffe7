//! Catalog records in their three shapes: creation payload (`*Create`), persisted record, and
//! wire form (`*View`).
//!
//! Mapping between the shapes is pure: `from_draft` (see the `*_actor::entity` modules) turns a
//! creation payload into a record once the store picked an identity, `to_view` renders the wire
//! form and `apply_view` writes a wire form back over an existing record.

pub mod category;
pub mod ids;
pub mod product;
pub mod supplier;

pub use category::*;
pub use ids::*;
pub use product::*;
pub use supplier::*;

use crate::patch::Patchable;
use resource_store::StoredEntity;
use serde::Serialize;
use std::fmt::Debug;

/// A record managed by a [`ResourceManager`](crate::managers::ResourceManager).
pub trait CatalogEntity: StoredEntity + Patchable {
    /// Name used in errors and logs.
    const RESOURCE: &'static str;

    /// Wire form returned to callers.
    type View: Debug + Clone + Send + Sync + Serialize + 'static;

    /// Renders the record in its wire form.
    fn to_view(&self) -> Self::View;

    /// Whether `id` could denote a stored record at all.
    fn is_well_formed(id: &Self::Id) -> bool;
}

/// Store-side write constraint shared by every text field that must carry a value.
pub(crate) fn require_non_blank(
    field: &'static str,
    value: &str,
) -> Result<(), resource_store::ConstraintViolation> {
    if value.trim().is_empty() {
        return Err(resource_store::ConstraintViolation::new(field, "must not be empty"));
    }
    Ok(())
}
