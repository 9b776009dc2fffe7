//! Store and patch support for [`Category`].

use crate::model::{require_non_blank, CatalogEntity, Category, CategoryCreate, CategoryId, CategoryView};
use crate::patch::{as_text, PatchError, Patchable};
use resource_store::{ConstraintViolation, StoredEntity};
use serde_json::Value;

impl StoredEntity for Category {
    type Id = CategoryId;
    type Draft = CategoryCreate;

    fn from_draft(id: CategoryId, draft: CategoryCreate) -> Self {
        Self { id, name: draft.name }
    }

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn check_constraints(&self) -> Result<(), ConstraintViolation> {
        require_non_blank("name", &self.name)
    }
}

impl Patchable for Category {
    /// # Fields
    /// - `name`
    fn replace_field(&mut self, field: &str, value: &Value) -> Result<bool, PatchError> {
        match field {
            "name" => self.name = as_text(field, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl CatalogEntity for Category {
    const RESOURCE: &'static str = "Category";
    type View = CategoryView;

    fn to_view(&self) -> CategoryView {
        CategoryView {
            id: self.id,
            name: self.name.clone(),
        }
    }

    fn is_well_formed(id: &CategoryId) -> bool {
        id.is_well_formed()
    }
}
