use crate::error::CatalogError;
use crate::model::CatalogEntity;
use crate::patch::PatchDocument;
use async_trait::async_trait;
use resource_store::{Repository, StoreError, StoredEntity};

/// Operations every catalog manager shares.
///
/// Implementors only provide the store they write to; lookup, listing, patching and
/// deletion come for free. Creation and full replacement stay on the concrete managers
/// because each validates its own payload.
#[async_trait]
pub trait ResourceManager: Send + Sync {
    /// The record type this manager owns.
    type Entity: CatalogEntity;

    /// The store holding the records.
    fn store(&self) -> &dyn Repository<Self::Entity>;

    /// Map store errors onto catalog errors for this resource.
    fn map_error(e: StoreError) -> CatalogError {
        CatalogError::from_store(Self::Entity::RESOURCE, e)
    }

    /// Rejects identities that can never be stored.
    fn check_id(id: &<Self::Entity as StoredEntity>::Id) -> Result<(), CatalogError> {
        if Self::Entity::is_well_formed(id) {
            Ok(())
        } else {
            Err(CatalogError::InvalidArgument(format!(
                "{} id must be positive, got {}",
                Self::Entity::RESOURCE,
                id
            )))
        }
    }

    /// Every record in store order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<<Self::Entity as CatalogEntity>::View>, CatalogError>
    {
        let records = self.store().enumerate().await.map_err(Self::map_error)?;
        tracing::debug!(size = records.len(), "Listed");
        Ok(records.iter().map(|record| record.to_view()).collect())
    }

    /// The persisted record, or `NotFound`.
    #[tracing::instrument(skip(self))]
    async fn find(
        &self,
        id: <Self::Entity as StoredEntity>::Id,
    ) -> Result<Self::Entity, CatalogError> {
        Self::check_id(&id)?;
        self.store()
            .find_by_id(id.clone())
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| CatalogError::not_found(Self::Entity::RESOURCE, id))
    }

    /// The wire form of a record, or `NotFound`.
    async fn get(
        &self,
        id: <Self::Entity as StoredEntity>::Id,
    ) -> Result<<Self::Entity as CatalogEntity>::View, CatalogError> {
        self.find(id).await.map(|record| record.to_view())
    }

    /// Applies `document` to a working copy and commits it once every operation succeeded.
    #[tracing::instrument(skip(self, document), fields(operations = document.len()))]
    async fn patch(
        &self,
        id: <Self::Entity as StoredEntity>::Id,
        document: PatchDocument,
    ) -> Result<<Self::Entity as CatalogEntity>::View, CatalogError> {
        let mut working = self.find(id).await?;
        if document.is_empty() {
            return Ok(working.to_view());
        }
        document.apply_to(&mut working).map_err(|e| {
            tracing::warn!(error = %e, "Patch rejected");
            CatalogError::from(e)
        })?;
        let committed = self.store().commit(working).await.map_err(Self::map_error)?;
        tracing::info!("Patched");
        Ok(committed.to_view())
    }

    /// Removes a record and returns its last persisted state.
    #[tracing::instrument(skip(self))]
    async fn delete(
        &self,
        id: <Self::Entity as StoredEntity>::Id,
    ) -> Result<<Self::Entity as CatalogEntity>::View, CatalogError> {
        let existing = self.find(id).await?;
        let removed = self
            .store()
            .remove_and_commit(existing)
            .await
            .map_err(Self::map_error)?;
        tracing::info!("Deleted");
        Ok(removed.to_view())
    }
}
