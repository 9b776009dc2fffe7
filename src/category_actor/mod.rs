//! Category store and manager wiring.

pub mod entity;

use crate::managers::CategoryManager;
use crate::model::Category;
use resource_store::StoreActor;
use std::sync::Arc;

/// Creates a new Category store actor and the manager that talks to it.
pub fn new(capacity: usize) -> (StoreActor<Category>, CategoryManager) {
    let (actor, client) = StoreActor::new(capacity);
    let manager = CategoryManager::new(Arc::new(client));

    (actor, manager)
}
