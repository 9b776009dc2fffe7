use crate::config::CatalogConfig;
use crate::managers::{CategoryManager, ProductManager, SupplierManager};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Owns the running catalog: one store actor per entity type and the managers in front of them.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&CatalogConfig::default());
///
/// let tools = system.categories.create(CategoryCreate { name: "Tools".into() }).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub categories: CategoryManager,
    pub suppliers: SupplierManager,
    /// Holds its own clones of the category and supplier managers for reference checks.
    pub products: ProductManager,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns the three stores and wires the managers. Must be called inside a Tokio runtime.
    pub fn new(config: &CatalogConfig) -> Self {
        let capacity = config.channel_capacity;

        // Leaves first: products depend on both other managers.
        let (category_store, categories) = crate::category_actor::new(capacity);
        let (supplier_store, suppliers) = crate::supplier_actor::new(capacity);
        let (product_store, products) =
            crate::product_actor::new(capacity, categories.clone(), suppliers.clone());

        let handles = vec![
            tokio::spawn(category_store.run()),
            tokio::spawn(supplier_store.run()),
            tokio::spawn(product_store.run()),
        ];
        info!(capacity, "Catalog started");

        Self {
            categories,
            suppliers,
            products,
            handles,
        }
    }

    /// Drops every manager held here and waits for the stores to finish.
    ///
    /// A store only stops once all clients are gone, so any manager clones handed out
    /// (for example to an HTTP router) must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        drop(self.products);
        drop(self.categories);
        drop(self.suppliers);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
