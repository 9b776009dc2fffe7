//! # Repository Trait
//!
//! The persistence interface a resource manager is constructed with. [`StoreClient`]
//! implements it against a running [`StoreActor`](crate::StoreActor); tests can hand a
//! manager a client obtained from [`MockStore`](crate::mock::MockStore) instead.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use resource_store::{Repository, StoreActor, StoredEntity};
//!
//! #[derive(Clone, Debug)] struct Tag { id: u32 }
//! #[derive(Debug)] struct TagDraft;
//!
//! impl StoredEntity for Tag {
//!     type Id = u32;
//!     type Draft = TagDraft;
//!     fn from_draft(id: u32, _: TagDraft) -> Self { Self { id } }
//!     fn id(&self) -> &u32 { &self.id }
//! }
//!
//! // A manager only sees the trait object.
//! struct TagManager {
//!     store: Arc<dyn Repository<Tag>>,
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Tag>::new(4);
//!     tokio::spawn(actor.run());
//!     let manager = TagManager { store: Arc::new(client) };
//!     assert!(manager.store.find_by_id(7).await.unwrap().is_none());
//! }
//! ```

use crate::entity::StoredEntity;
use crate::error::StoreError;
use async_trait::async_trait;

/// Durable storage for one entity type.
///
/// Every call is atomic on its own. Callers that read, modify and write back (replace, patch)
/// hand the whole working copy to [`Repository::commit`]; nothing is persisted before that.
#[async_trait]
pub trait Repository<T: StoredEntity>: Send + Sync {
    /// Looks up a record by identity.
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError>;

    /// Stores a new record. The store assigns the identity.
    async fn insert(&self, draft: T::Draft) -> Result<T, StoreError>;

    /// Every stored record, ascending identity.
    async fn enumerate(&self) -> Result<Vec<T>, StoreError>;

    /// Overwrites the stored record that has the same identity as `entity`.
    async fn commit(&self, entity: T) -> Result<T, StoreError>;

    /// Deletes the record with the identity of `entity` and returns its last stored state.
    async fn remove_and_commit(&self, entity: T) -> Result<T, StoreError>;
}
