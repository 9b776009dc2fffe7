//! # Store Client
//!
//! The sending half of a store: a cheap, cloneable handle that turns method calls into
//! [`StoreRequest`] messages and waits on the one-shot reply.

use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::repository::Repository;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// * **Cloneable**: holds only a sender, so cloning is inexpensive.
/// * **Async API**: every call resolves to `Result<_, StoreError>`.
/// * **Generic**: works with any record that implements `StoredEntity`.
pub struct StoreClient<T: StoredEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Derived Clone would demand `T: Clone` on the bound, which the sender does not need.
impl<T: StoredEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoredEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}

#[async_trait]
impl<T: StoredEntity> Repository<T> for StoreClient<T> {
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindById { id, respond_to })
            .await
    }

    async fn insert(&self, draft: T::Draft) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Insert { draft, respond_to })
            .await
    }

    async fn enumerate(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Enumerate { respond_to })
            .await
    }

    async fn commit(&self, entity: T) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Commit { entity, respond_to })
            .await
    }

    async fn remove_and_commit(&self, entity: T) -> Result<T, StoreError> {
        let id = entity.id().clone();
        self.request(|respond_to| StoreRequest::Remove { id, respond_to })
            .await
    }
}
