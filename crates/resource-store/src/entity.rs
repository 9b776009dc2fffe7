//! # StoredEntity Trait
//!
//! The `StoredEntity` trait is the contract every record type (Category, Supplier, Product, ...)
//! implements to be persisted by the generic [`StoreActor`](crate::StoreActor). It names the
//! identity type and the creation form, builds the persisted record once the store has picked
//! an identity, and exposes a constraint hook the store runs before every write.
//!
//! # Associated Types
//! A `Category` store only accepts a `CategoryCreate` draft; handing it a `ProductCreate` is a
//! compile error rather than a runtime surprise.
//!
//! # Provided Methods
//! - [`StoredEntity::check_constraints`] defaults to accepting everything.

use crate::error::ConstraintViolation;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `StoreActor`.
pub trait StoredEntity: Clone + Send + Sync + Debug + 'static {
    /// Server-assigned identity. Ordered so enumeration is stable.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The client-supplied fields needed to create a new record (no identity).
    type Draft: Send + Sync + Debug;

    /// Builds the persisted record from the identity chosen by the store and the draft.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// The identity of this record.
    fn id(&self) -> &Self::Id;

    /// Called before every insert and commit. A violation rejects the write and leaves the
    /// stored state untouched.
    fn check_constraints(&self) -> Result<(), ConstraintViolation> {
        Ok(())
    }
}
