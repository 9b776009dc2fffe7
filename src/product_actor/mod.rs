//! Product store and manager wiring. The manager resolves references through the
//! category and supplier managers it is handed.

pub mod entity;

use crate::managers::{CategoryManager, ProductManager, SupplierManager};
use crate::model::Product;
use resource_store::StoreActor;
use std::sync::Arc;

/// Creates a new Product store actor and the manager that talks to it.
pub fn new(
    capacity: usize,
    categories: CategoryManager,
    suppliers: SupplierManager,
) -> (StoreActor<Product>, ProductManager) {
    let (actor, client) = StoreActor::new(capacity);
    let manager = ProductManager::new(Arc::new(client), categories, suppliers);

    (actor, manager)
}
