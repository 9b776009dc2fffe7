//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from a queue
//! of scripted expectations instead of a `StoreActor`. Code under test cannot tell the
//! difference, which makes it the quickest way to pin down exactly which store calls a
//! manager makes, and in which order.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **Determinism** | Scripted replies | Real state |
//! | **Call order** | Asserted | Not observable |
//! | **Error Injection** | Easy (`return_err`) | Needs specific state |
//! | **Use Case** | Unit testing a manager's control flow | Integration tests |
//!
//! ## Example
//!
//! ```rust
//! use resource_store::mock::MockStore;
//! use resource_store::{Repository, StoredEntity};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Tag { id: u32 }
//! #[derive(Debug)] struct TagDraft;
//!
//! impl StoredEntity for Tag {
//!     type Id = u32;
//!     type Draft = TagDraft;
//!     fn from_draft(id: u32, _: TagDraft) -> Self { Self { id } }
//!     fn id(&self) -> &u32 { &self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Tag>::new();
//!     mock.expect_find(3).return_ok(Some(Tag { id: 3 }));
//!
//!     let client = mock.client();
//!     assert_eq!(client.find_by_id(3).await.unwrap(), Some(Tag { id: 3 }));
//!
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next expectation (wrong kind, or a different identity)
//! is answered with [`StoreError::ActorDropped`] and recorded; [`MockStore::verify`] panics
//! on any recorded mismatch and on expectations that were never consumed.

use crate::client::StoreClient;
use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Shared<T> = Arc<Mutex<T>>;

/// Represents an expected request to the mock store.
enum Expectation<T: StoredEntity> {
    Find {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Insert {
        response: Result<T, StoreError>,
    },
    Enumerate {
        response: Result<Vec<T>, StoreError>,
    },
    Commit {
        id: T::Id,
        response: Option<Result<T, StoreError>>,
    },
    Remove {
        id: T::Id,
        response: Result<T, StoreError>,
    },
}

impl<T: StoredEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Find { id, .. } => format!("FindById({id})"),
            Expectation::Insert { .. } => "Insert".to_string(),
            Expectation::Enumerate { .. } => "Enumerate".to_string(),
            Expectation::Commit { id, .. } => format!("Commit({id})"),
            Expectation::Remove { id, .. } => format!("Remove({id})"),
        }
    }
}

fn describe_request<T: StoredEntity>(request: &StoreRequest<T>) -> String {
    match request {
        StoreRequest::FindById { id, .. } => format!("FindById({id})"),
        StoreRequest::Insert { .. } => "Insert".to_string(),
        StoreRequest::Enumerate { .. } => "Enumerate".to_string(),
        StoreRequest::Commit { entity, .. } => format!("Commit({})", entity.id()),
        StoreRequest::Remove { id, .. } => format!("Remove({id})"),
    }
}

/// A mock store with expectation tracking for fluent testing.
pub struct MockStore<T: StoredEntity> {
    client: StoreClient<T>,
    expectations: Shared<VecDeque<Expectation<T>>>,
    mismatches: Shared<Vec<String>>,
    committed: Shared<Vec<T>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoredEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> MockStore<T> {
    /// Creates a new mock store with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Shared<VecDeque<Expectation<T>>> = Arc::default();
        let mismatches: Shared<Vec<String>> = Arc::default();
        let committed: Shared<Vec<T>> = Arc::default();

        let exps = expectations.clone();
        let misses = mismatches.clone();
        let commits = committed.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = exps.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::FindById { id, respond_to },
                        Some(Expectation::Find {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Enumerate { respond_to },
                        Some(Expectation::Enumerate { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Commit { entity, respond_to },
                        Some(Expectation::Commit {
                            id: expected,
                            response,
                        }),
                    ) if *entity.id() == expected => {
                        commits.lock().unwrap().push(entity.clone());
                        // Without a scripted reply the store echoes the committed record.
                        let _ = respond_to.send(response.unwrap_or(Ok(entity)));
                    }
                    (
                        StoreRequest::Remove { id, respond_to },
                        Some(Expectation::Remove {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let expected = expectation
                            .map(|e| e.describe())
                            .unwrap_or_else(|| "nothing".to_string());
                        misses.lock().unwrap().push(format!(
                            "got {}, expected {}",
                            describe_request(&request),
                            expected
                        ));
                        // Dropping the request drops its responder: the caller sees ActorDropped.
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            mismatches,
            committed,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `find_by_id` call for `id`.
    pub fn expect_find(&mut self, id: T::Id) -> FindExpectation<T> {
        FindExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `insert` call.
    pub fn expect_insert(&mut self) -> InsertExpectation<T> {
        InsertExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `enumerate` call.
    pub fn expect_enumerate(&mut self) -> EnumerateExpectation<T> {
        EnumerateExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `commit` of the record with identity `id`.
    pub fn expect_commit(&mut self, id: T::Id) -> CommitExpectation<T> {
        CommitExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `remove_and_commit` of the record with identity `id`.
    pub fn expect_remove(&mut self, id: T::Id) -> RemoveExpectation<T> {
        RemoveExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Records received by `commit`, in arrival order.
    pub fn committed(&self) -> Vec<T> {
        self.committed.lock().unwrap().clone()
    }

    /// Verifies that every expectation was met and no unexpected request arrived.
    pub fn verify(&self) {
        let misses = self.mismatches.lock().unwrap();
        if !misses.is_empty() {
            panic!("Unexpected store requests: {}", misses.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `find_by_id` expectations.
pub struct FindExpectation<T: StoredEntity> {
    id: T::Id,
    expectations: Shared<VecDeque<Expectation<T>>>,
}

impl<T: StoredEntity> FindExpectation<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, StoreError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Find {
            id: self.id,
            response,
        });
    }
}

/// Builder for `insert` expectations.
pub struct InsertExpectation<T: StoredEntity> {
    expectations: Shared<VecDeque<Expectation<T>>>,
}

impl<T: StoredEntity> InsertExpectation<T> {
    pub fn return_ok(self, stored: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Insert { response: Ok(stored) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Insert {
                response: Err(error),
            });
    }
}

/// Builder for `enumerate` expectations.
pub struct EnumerateExpectation<T: StoredEntity> {
    expectations: Shared<VecDeque<Expectation<T>>>,
}

impl<T: StoredEntity> EnumerateExpectation<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Enumerate { response: Ok(items) });
    }
}

/// Builder for `commit` expectations.
pub struct CommitExpectation<T: StoredEntity> {
    id: T::Id,
    expectations: Shared<VecDeque<Expectation<T>>>,
}

impl<T: StoredEntity> CommitExpectation<T> {
    /// Accepts the commit and echoes the committed record back.
    pub fn echo(self) {
        self.push(None);
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Some(Err(error)));
    }

    fn push(self, response: Option<Result<T, StoreError>>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Commit {
                id: self.id,
                response,
            });
    }
}

/// Builder for `remove_and_commit` expectations.
pub struct RemoveExpectation<T: StoredEntity> {
    id: T::Id,
    expectations: Shared<VecDeque<Expectation<T>>>,
}

impl<T: StoredEntity> RemoveExpectation<T> {
    pub fn return_ok(self, removed: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Remove {
                id: self.id,
                response: Ok(removed),
            });
    }
}
