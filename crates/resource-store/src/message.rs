//! # Store Messages
//!
//! The request type sent from a `StoreClient` to its `StoreActor`.

use crate::entity::StoredEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store to request operations.
///
/// The variants map one to one onto the persistence operations a resource manager needs:
///
/// - **FindById**: lookup by identity, `None` when absent.
/// - **Insert**: assigns the next identity and stores the record built from the draft.
/// - **Enumerate**: every record, ascending identity.
/// - **Commit**: overwrites an existing record with a mutated working copy.
/// - **Remove**: deletes by identity and hands back the last stored state.
///
/// Each variant is handled to completion before the next message is read, so a single
/// request is atomic with respect to every other request on the same store.
#[derive(Debug)]
pub enum StoreRequest<T: StoredEntity> {
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Insert {
        draft: T::Draft,
        respond_to: Response<T>,
    },
    Enumerate {
        respond_to: Response<Vec<T>>,
    },
    Commit {
        entity: T,
        respond_to: Response<T>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<T>,
    },
}
