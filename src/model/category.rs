use crate::model::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category as held by the store.
///
/// # Store
/// This struct implements [`StoredEntity`](resource_store::StoredEntity), see
/// [`category_actor::entity`](crate::category_actor::entity).
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Payload for creating a new category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCreate {
    pub name: String,
}

/// Category as exchanged with callers: read responses and full-replace requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Overwrites every mutable field with the values from `view`. The identity is kept.
    pub fn apply_view(&mut self, view: CategoryView) {
        self.name = view.name;
    }
}
