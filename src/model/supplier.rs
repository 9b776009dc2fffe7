use crate::model::SupplierId;
use serde::{Deserialize, Serialize};

/// A supplier as held by the store.
///
/// # Store
/// This struct implements [`StoredEntity`](resource_store::StoredEntity), see
/// [`supplier_actor::entity`](crate::supplier_actor::entity).
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub city: String,
}

/// Payload for creating a new supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierCreate {
    pub name: String,
    pub city: String,
}

/// Supplier as exchanged with callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierView {
    pub id: SupplierId,
    pub name: String,
    pub city: String,
}

impl Supplier {
    /// Overwrites every mutable field with the values from `view`. The identity is kept.
    pub fn apply_view(&mut self, view: SupplierView) {
        self.name = view.name;
        self.city = view.city;
    }
}
