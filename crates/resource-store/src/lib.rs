//! # Resource Store
//!
//! This crate provides the persistence collaborator used by the catalog resource managers:
//! one actor per entity type that owns the records of that type and serves lookup, insert,
//! enumerate, commit and remove requests over a channel.
//!
//! ## Why an actor?
//!
//! - Isolated state: the records of one entity type belong to exactly one Tokio task.
//! - Message passing: callers hold a cloneable [`StoreClient`], never the map itself.
//! - Sequential processing: each request runs to completion before the next, so every call
//!   is atomic and concurrent writers to one identity resolve as last-writer-wins.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoredEntity`]) - identity type, creation form, write constraints
//! 2. **Runtime Layer** ([`StoreActor`]) - request processing and identity assignment
//! 3. **Interface Layer** ([`Repository`], implemented by [`StoreClient`]) - what managers call
//!
//! ```rust
//! use resource_store::{ConstraintViolation, Repository, StoreActor, StoredEntity};
//!
//! #[derive(Clone, Debug)]
//! struct Shelf { id: u32, label: String }
//!
//! #[derive(Debug)]
//! struct ShelfDraft { label: String }
//!
//! impl StoredEntity for Shelf {
//!     type Id = u32;
//!     type Draft = ShelfDraft;
//!
//!     fn from_draft(id: u32, draft: ShelfDraft) -> Self {
//!         Self { id, label: draft.label }
//!     }
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn check_constraints(&self) -> Result<(), ConstraintViolation> {
//!         if self.label.is_empty() {
//!             return Err(ConstraintViolation::new("label", "must not be empty"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Shelf>::new(10);
//!     let handle = tokio::spawn(actor.run());
//!
//!     let shelf = client.insert(ShelfDraft { label: "A1".into() }).await.unwrap();
//!     assert_eq!(shelf.id, 1);
//!     assert!(client.insert(ShelfDraft { label: String::new() }).await.is_err());
//!
//!     // Dropping the last client stops the store.
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockStore`, which answers requests from scripted
//! expectations so a manager's exact sequence of store calls can be asserted.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoredEntity;
pub use error::{ConstraintViolation, StoreError};
pub use message::{Response, StoreRequest};
pub use repository::Repository;
