//! Store and patch support for [`Product`].
//!
//! The store only enforces the name constraint. Price range and references are checked by
//! [`ProductManager`](crate::managers::ProductManager) on create and replace, and are not
//! re-checked for patches.

use crate::model::{
    require_non_blank, CatalogEntity, CategoryId, Product, ProductCreate, ProductId, ProductView,
    SupplierId,
};
use crate::patch::{as_decimal, as_integer, as_text, PatchError, Patchable};
use resource_store::{ConstraintViolation, StoredEntity};
use serde_json::Value;

impl StoredEntity for Product {
    type Id = ProductId;
    type Draft = ProductCreate;

    fn from_draft(id: ProductId, draft: ProductCreate) -> Self {
        Self {
            id,
            name: draft.name,
            price: Product::normalize_price(draft.price),
            supplier_id: draft.supplier_id,
            category_id: draft.category_id,
        }
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn check_constraints(&self) -> Result<(), ConstraintViolation> {
        require_non_blank("name", &self.name)
    }
}

impl Patchable for Product {
    /// # Fields
    /// - `name`
    /// - `price`: rounded to cents
    /// - `supplierid`, `categoryid`
    fn replace_field(&mut self, field: &str, value: &Value) -> Result<bool, PatchError> {
        match field {
            "name" => self.name = as_text(field, value)?,
            "price" => self.price = Product::normalize_price(as_decimal(field, value)?),
            "supplierid" => self.supplier_id = SupplierId(as_integer(field, value)?),
            "categoryid" => self.category_id = CategoryId(as_integer(field, value)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl CatalogEntity for Product {
    const RESOURCE: &'static str = "Product";
    type View = ProductView;

    fn to_view(&self) -> ProductView {
        ProductView {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            supplier_id: self.supplier_id,
            category_id: self.category_id,
        }
    }

    fn is_well_formed(id: &ProductId) -> bool {
        id.is_well_formed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn draft() -> ProductCreate {
        ProductCreate {
            name: "Drill".into(),
            price: Decimal::new(49999, 3),
            supplier_id: SupplierId(1),
            category_id: CategoryId(1),
        }
    }

    #[test]
    fn test_from_draft_rounds_price() {
        let product = Product::from_draft(ProductId(1), draft());
        assert_eq!(product.price, Decimal::new(5000, 2));
    }

    #[test]
    fn test_patch_coerces_numeric_strings() {
        let mut product = Product::from_draft(ProductId(1), draft());
        assert!(product.replace_field("price", &json!("888")).unwrap());
        assert!(product.replace_field("categoryid", &json!("7")).unwrap());
        assert!(product.replace_field("supplierid", &json!(3)).unwrap());
        assert_eq!(product.price, Decimal::from(888));
        assert_eq!(product.category_id, CategoryId(7));
        assert_eq!(product.supplier_id, SupplierId(3));
    }

    #[test]
    fn test_patch_rejects_non_numeric_price() {
        let mut product = Product::from_draft(ProductId(1), draft());
        assert!(matches!(
            product.replace_field("price", &json!("cheap")),
            Err(PatchError::IncompatibleValue { .. })
        ));
    }
}
