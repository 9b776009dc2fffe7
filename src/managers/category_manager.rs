use crate::error::CatalogError;
use crate::managers::validation::require_text;
use crate::managers::ResourceManager;
use crate::model::{CatalogEntity, Category, CategoryCreate, CategoryId, CategoryView};
use async_trait::async_trait;
use resource_store::Repository;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Manages categories.
#[derive(Clone)]
pub struct CategoryManager {
    store: Arc<dyn Repository<Category>>,
}

impl CategoryManager {
    pub fn new(store: Arc<dyn Repository<Category>>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: CategoryCreate) -> Result<CategoryView, CatalogError> {
        debug!(?payload, "create called");
        let draft = CategoryCreate {
            name: require_text("name", &payload.name)?,
        };
        let created = self.store.insert(draft).await.map_err(Self::map_error)?;
        info!(category_id = %created.id, "Created");
        Ok(created.to_view())
    }

    /// Overwrites the name of an existing category. The identity in `view` is ignored.
    #[instrument(skip(self, view))]
    pub async fn replace(
        &self,
        id: CategoryId,
        view: CategoryView,
    ) -> Result<CategoryView, CatalogError> {
        debug!(?view, "replace called");
        Self::check_id(&id)?;
        let name = require_text("name", &view.name)?;
        let mut existing = self.find(id).await?;
        existing.apply_view(CategoryView { name, ..view });
        let committed = self.store.commit(existing).await.map_err(Self::map_error)?;
        info!(category_id = %committed.id, "Replaced");
        Ok(committed.to_view())
    }
}

#[async_trait]
impl ResourceManager for CategoryManager {
    type Entity = Category;

    fn store(&self) -> &dyn Repository<Category> {
        self.store.as_ref()
    }
}
