//! # Catalog Service
//!
//! A product catalog with three resources (categories, suppliers and products) exposed as
//! JSON over HTTP.
//!
//! ## Layers
//!
//! 1. **Stores** ([`resource_store`]): one actor per entity type owns the records. Each
//!    `*_actor` module wires a store to its manager.
//! 2. **Managers** ([`managers`]): validate payloads, check that a product's category and
//!    supplier exist, apply patches and map records to their wire form.
//! 3. **HTTP** ([`http`]): axum routes translating requests to manager calls and
//!    [`CatalogError`](error::CatalogError)s to status codes.
//!
//! [`lifecycle::CatalogSystem`] starts and stops the stores; [`config::CatalogConfig`] holds the
//! settings for all of it.
//!
//! ## Testing
//!
//! Manager tests script store replies with [`resource_store::mock::MockStore`]; integration
//! tests under `tests/` run real stores, and drive the router with `tower::ServiceExt::oneshot`.

pub mod category_actor;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod managers;
pub mod model;
pub mod patch;
pub mod product_actor;
pub mod supplier_actor;
