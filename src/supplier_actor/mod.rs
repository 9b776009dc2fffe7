//! Supplier store and manager wiring.

pub mod entity;

use crate::managers::SupplierManager;
use crate::model::Supplier;
use resource_store::StoreActor;
use std::sync::Arc;

/// Creates a new Supplier store actor and the manager that talks to it.
pub fn new(capacity: usize) -> (StoreActor<Supplier>, SupplierManager) {
    let (actor, client) = StoreActor::new(capacity);
    let manager = SupplierManager::new(Arc::new(client));

    (actor, manager)
}
