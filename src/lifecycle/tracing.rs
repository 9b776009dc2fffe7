//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter without module targets.
//! Records carry their own context as structured fields instead (`entity_type`,
//! `category_id`, `size`, ...).
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the configured `log_level`:
//!
//! ```bash
//! # Request flow through managers and stores
//! RUST_LOG=debug catalog-service
//!
//! # Only the store actors
//! RUST_LOG=resource_store=debug catalog-service
//! ```
//!
//! At `info` a product creation reads:
//!
//! ```text
//! INFO Inserted entity_type="Product" id=3 size=3
//! INFO create: Created product_id=3
//! ```
//!
//! At `debug` the manager additionally logs the payload once on entry, and every store
//! request is logged as it arrives.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_level` applies when `RUST_LOG` is unset or invalid.
pub fn setup_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
