use crate::error::CatalogError;
use crate::managers::validation::require_text;
use crate::managers::ResourceManager;
use crate::model::{CatalogEntity, Supplier, SupplierCreate, SupplierId, SupplierView};
use async_trait::async_trait;
use resource_store::Repository;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Manages suppliers.
#[derive(Clone)]
pub struct SupplierManager {
    store: Arc<dyn Repository<Supplier>>,
}

impl SupplierManager {
    pub fn new(store: Arc<dyn Repository<Supplier>>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: SupplierCreate) -> Result<SupplierView, CatalogError> {
        debug!(?payload, "create called");
        let draft = SupplierCreate {
            name: require_text("name", &payload.name)?,
            city: require_text("city", &payload.city)?,
        };
        let created = self.store.insert(draft).await.map_err(Self::map_error)?;
        info!(supplier_id = %created.id, "Created");
        Ok(created.to_view())
    }

    #[instrument(skip(self, view))]
    pub async fn replace(
        &self,
        id: SupplierId,
        view: SupplierView,
    ) -> Result<SupplierView, CatalogError> {
        debug!(?view, "replace called");
        Self::check_id(&id)?;
        let name = require_text("name", &view.name)?;
        let city = require_text("city", &view.city)?;
        let mut existing = self.find(id).await?;
        existing.apply_view(SupplierView { name, city, ..view });
        let committed = self.store.commit(existing).await.map_err(Self::map_error)?;
        info!(supplier_id = %committed.id, "Replaced");
        Ok(committed.to_view())
    }
}

#[async_trait]
impl ResourceManager for SupplierManager {
    type Entity = Supplier;

    fn store(&self) -> &dyn Repository<Supplier> {
        self.store.as_ref()
    }
}
