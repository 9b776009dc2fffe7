//! JSON over HTTP in front of the managers.
//!
//! Routes (relative to the configured prefix, `/api` by default):
//!
//! | Resource | Collection | Item |
//! |----------|------------|------|
//! | categories | `GET`, `POST`, `PUT /categories` | `GET`, `PATCH`, `DELETE /categories/{id}` |
//! | suppliers | `GET`, `POST`, `PUT /suppliers` | `GET`, `PATCH`, `DELETE /suppliers/{id}` |
//! | products | `GET`, `POST`, `PUT /products` | `GET`, `PATCH`, `DELETE /products/{id}` |
//!
//! `PUT` carries the full record, identity included, in the body.
//!
//! Products can also be listed per parent: `GET /products/category/{id}` and
//! `GET /products/supplier/{id}`.

mod categories;
mod error;
mod products;
mod suppliers;

pub use error::ApiError;

use crate::lifecycle::CatalogSystem;
use crate::managers::{CategoryManager, ProductManager, SupplierManager};
use axum::routing::get;
use axum::Router;

/// Manager handles shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryManager,
    pub suppliers: SupplierManager,
    pub products: ProductManager,
}

impl AppState {
    pub fn from_system(system: &CatalogSystem) -> Self {
        Self {
            categories: system.categories.clone(),
            suppliers: system.suppliers.clone(),
            products: system.products.clone(),
        }
    }
}

/// Builds the router. An empty `prefix` mounts every route at the root.
pub fn router(state: AppState, prefix: &str) -> Router {
    let routes = Router::new()
        .route(
            "/categories",
            get(categories::list)
                .post(categories::create)
                .put(categories::replace),
        )
        .route(
            "/categories/{id}",
            get(categories::get)
                .patch(categories::patch)
                .delete(categories::delete),
        )
        .route(
            "/suppliers",
            get(suppliers::list).post(suppliers::create).put(suppliers::replace),
        )
        .route(
            "/suppliers/{id}",
            get(suppliers::get)
                .patch(suppliers::patch)
                .delete(suppliers::delete),
        )
        .route(
            "/products",
            get(products::list).post(products::create).put(products::replace),
        )
        .route(
            "/products/{id}",
            get(products::get)
                .patch(products::patch)
                .delete(products::delete),
        )
        .route("/products/category/{id}", get(products::list_by_category))
        .route("/products/supplier/{id}", get(products::list_by_supplier))
        .with_state(state);

    if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(prefix, routes)
    }
}
