//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the task that owns the records of one entity type.
//! It processes requests sequentially, so the map it owns never needs a lock.

use crate::client::StoreClient;
use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that stores a collection of records.
///
/// This struct is the "Server" half of the store. It owns the state (`records`) and the
/// receiver end of the channel. Each store runs in its own Tokio task and handles one
/// request at a time, which makes every single request atomic.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever the records are needed.
///
/// ```rust
/// use resource_store::{Repository, StoreActor, StoredEntity};
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagDraft { label: String }
///
/// impl StoredEntity for Tag {
///     type Id = u32;
///     type Draft = TagDraft;
///     fn from_draft(id: u32, draft: TagDraft) -> Self { Self { id, label: draft.label } }
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Tag>::new(10);
///     tokio::spawn(actor.run());
///     let tag = client.insert(TagDraft { label: "new".into() }).await.unwrap();
///     assert_eq!(tag.id, 1);
/// }
/// ```
///
/// # Implementation Details
///
/// Records live in a `BTreeMap` keyed by identity, so enumeration is ascending by identity.
/// Identities come from a `u32` counter starting at 1. The counter only advances when an
/// insert succeeds; identities are never reused after a delete.
pub struct StoreActor<T: StoredEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoredEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: BTreeMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Category" instead of "catalog_service::model::Category")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::FindById { id, respond_to } => {
                    let item = self.records.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "FindById");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Insert { draft, respond_to } => {
                    debug!(entity_type, ?draft, "Insert");
                    let id = T::Id::from(self.next_id);
                    let item = T::from_draft(id.clone(), draft);

                    if let Err(e) = item.check_constraints() {
                        warn!(entity_type, error = %e, "Insert rejected");
                        let _ = respond_to.send(Err(StoreError::Constraint(e)));
                        continue;
                    }
                    self.next_id += 1;
                    self.records.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.records.len(), "Inserted");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Enumerate { respond_to } => {
                    let items: Vec<T> = self.records.values().cloned().collect();
                    debug!(entity_type, size = items.len(), "Enumerate");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Commit { entity, respond_to } => {
                    let id = entity.id().clone();
                    debug!(entity_type, %id, ?entity, "Commit");
                    let Some(slot) = self.records.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = entity.check_constraints() {
                        warn!(entity_type, %id, error = %e, "Commit rejected");
                        let _ = respond_to.send(Err(StoreError::Constraint(e)));
                        continue;
                    }
                    *slot = entity.clone();
                    info!(entity_type, %id, "Committed");
                    let _ = respond_to.send(Ok(entity));
                }
                StoreRequest::Remove { id, respond_to } => {
                    debug!(entity_type, %id, "Remove");
                    match self.records.remove(&id) {
                        Some(item) => {
                            info!(entity_type, %id, size = self.records.len(), "Removed");
                            let _ = respond_to.send(Ok(item));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}
