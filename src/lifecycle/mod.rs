//! Startup, shutdown and logging setup for the catalog.

mod catalog_system;
pub mod tracing;

pub use catalog_system::CatalogSystem;
pub use self::tracing::setup_tracing;
