use crate::model::{CategoryId, ProductId, SupplierId};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Fractional digits stored for a price.
pub const PRICE_SCALE: u32 = 2;

/// Represents a product in the catalog.
///
/// # Store
/// This struct implements [`StoredEntity`](resource_store::StoredEntity), see
/// [`product_actor::entity`](crate::product_actor::entity) for:
/// - Creation parameters ([`ProductCreate`])
/// - Write constraints
///
/// Prices are kept at currency precision: two fractional digits, rounded half away from
/// zero on the way in.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub supplier_id: SupplierId,
    pub category_id: CategoryId,
}

/// Payload for creating a new product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub supplier_id: SupplierId,
    pub category_id: CategoryId,
}

/// Product as exchanged with callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub supplier_id: SupplierId,
    pub category_id: CategoryId,
}

impl Product {
    /// Rounds a price to the stored precision.
    pub fn normalize_price(price: Decimal) -> Decimal {
        price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Overwrites every mutable field with the values from `view`. The identity is kept.
    pub fn apply_view(&mut self, view: ProductView) {
        self.name = view.name;
        self.price = Self::normalize_price(view.price);
        self.supplier_id = view.supplier_id;
        self.category_id = view.category_id;
    }
}
