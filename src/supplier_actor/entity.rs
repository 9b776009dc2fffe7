//! Store and patch support for [`Supplier`].

use crate::model::{require_non_blank, CatalogEntity, Supplier, SupplierCreate, SupplierId, SupplierView};
use crate::patch::{as_text, PatchError, Patchable};
use resource_store::{ConstraintViolation, StoredEntity};
use serde_json::Value;

impl StoredEntity for Supplier {
    type Id = SupplierId;
    type Draft = SupplierCreate;

    fn from_draft(id: SupplierId, draft: SupplierCreate) -> Self {
        Self {
            id,
            name: draft.name,
            city: draft.city,
        }
    }

    fn id(&self) -> &SupplierId {
        &self.id
    }

    fn check_constraints(&self) -> Result<(), ConstraintViolation> {
        require_non_blank("name", &self.name)?;
        require_non_blank("city", &self.city)
    }
}

impl Patchable for Supplier {
    /// # Fields
    /// - `name`
    /// - `city`
    fn replace_field(&mut self, field: &str, value: &Value) -> Result<bool, PatchError> {
        match field {
            "name" => self.name = as_text(field, value)?,
            "city" => self.city = as_text(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl CatalogEntity for Supplier {
    const RESOURCE: &'static str = "Supplier";
    type View = SupplierView;

    fn to_view(&self) -> SupplierView {
        SupplierView {
            id: self.id,
            name: self.name.clone(),
            city: self.city.clone(),
        }
    }

    fn is_well_formed(id: &SupplierId) -> bool {
        id.is_well_formed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_is_required_by_the_store() {
        let supplier = Supplier::from_draft(
            SupplierId(2),
            SupplierCreate {
                name: "Acme".into(),
                city: String::new(),
            },
        );
        assert_eq!(supplier.check_constraints().unwrap_err().field, "city");
    }
}
