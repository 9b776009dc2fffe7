use crate::error::CatalogError;
use crate::managers::validation::{require_price, require_reference, require_text};
use crate::managers::{CategoryManager, ResourceManager, SupplierManager};
use crate::model::{
    CatalogEntity, CategoryId, Product, ProductCreate, ProductId, ProductView, SupplierId,
};
use async_trait::async_trait;
use resource_store::Repository;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Manages products.
///
/// Every create and replace resolves the category reference, then the supplier reference,
/// before anything is written. Patches are applied as-is: references and price range are not
/// re-checked for them.
#[derive(Clone)]
pub struct ProductManager {
    store: Arc<dyn Repository<Product>>,
    categories: CategoryManager,
    suppliers: SupplierManager,
}

impl ProductManager {
    pub fn new(
        store: Arc<dyn Repository<Product>>,
        categories: CategoryManager,
        suppliers: SupplierManager,
    ) -> Self {
        Self {
            store,
            categories,
            suppliers,
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: ProductCreate) -> Result<ProductView, CatalogError> {
        debug!(?payload, "create called");
        let draft = Self::checked(payload)?;
        self.resolve_references(draft.category_id, draft.supplier_id).await?;
        let created = self.store.insert(draft).await.map_err(Self::map_error)?;
        info!(product_id = %created.id, "Created");
        Ok(created.to_view())
    }

    #[instrument(skip(self, view))]
    pub async fn replace(
        &self,
        id: ProductId,
        view: ProductView,
    ) -> Result<ProductView, CatalogError> {
        debug!(?view, "replace called");
        Self::check_id(&id)?;
        let fields = Self::checked(ProductCreate {
            name: view.name,
            price: view.price,
            supplier_id: view.supplier_id,
            category_id: view.category_id,
        })?;
        let mut existing = self.find(id).await?;
        self.resolve_references(fields.category_id, fields.supplier_id).await?;
        existing.apply_view(ProductView {
            id,
            name: fields.name,
            price: fields.price,
            supplier_id: fields.supplier_id,
            category_id: fields.category_id,
        });
        let committed = self.store.commit(existing).await.map_err(Self::map_error)?;
        info!(product_id = %committed.id, "Replaced");
        Ok(committed.to_view())
    }

    /// Products in `category_id`, in store order. `NotFound` if the category does not exist.
    #[instrument(skip(self))]
    pub async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<ProductView>, CatalogError> {
        self.categories.find(category_id).await?;
        self.list_where(|product| product.category_id == category_id).await
    }

    /// Products from `supplier_id`, in store order. `NotFound` if the supplier does not exist.
    #[instrument(skip(self))]
    pub async fn list_by_supplier(
        &self,
        supplier_id: SupplierId,
    ) -> Result<Vec<ProductView>, CatalogError> {
        self.suppliers.find(supplier_id).await?;
        self.list_where(|product| product.supplier_id == supplier_id).await
    }

    async fn list_where(
        &self,
        keep: impl Fn(&Product) -> bool,
    ) -> Result<Vec<ProductView>, CatalogError> {
        let products = self.store.enumerate().await.map_err(Self::map_error)?;
        let matching: Vec<ProductView> = products
            .iter()
            .filter(|product| keep(*product))
            .map(CatalogEntity::to_view)
            .collect();
        debug!(size = matching.len(), "Filtered");
        Ok(matching)
    }

    /// Category first, then supplier; the first missing one is reported.
    async fn resolve_references(
        &self,
        category_id: CategoryId,
        supplier_id: SupplierId,
    ) -> Result<(), CatalogError> {
        self.categories.find(category_id).await?;
        self.suppliers.find(supplier_id).await?;
        Ok(())
    }

    fn checked(payload: ProductCreate) -> Result<ProductCreate, CatalogError> {
        let name = require_text("name", &payload.name)?;
        let price = Product::normalize_price(require_price(payload.price)?);
        require_reference("categoryId", payload.category_id.0)?;
        require_reference("supplierId", payload.supplier_id.0)?;
        Ok(ProductCreate {
            name,
            price,
            supplier_id: payload.supplier_id,
            category_id: payload.category_id,
        })
    }
}

#[async_trait]
impl ResourceManager for ProductManager {
    type Entity = Product;

    fn store(&self) -> &dyn Repository<Product> {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Supplier};
    use crate::patch::{PatchDocument, PatchOperation};
    use resource_store::mock::MockStore;
    use rust_decimal::Decimal;

    struct Fixture {
        products: MockStore<Product>,
        categories: MockStore<Category>,
        suppliers: MockStore<Supplier>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                products: MockStore::new(),
                categories: MockStore::new(),
                suppliers: MockStore::new(),
            }
        }

        fn manager(&self) -> ProductManager {
            ProductManager::new(
                Arc::new(self.products.client()),
                CategoryManager::new(Arc::new(self.categories.client())),
                SupplierManager::new(Arc::new(self.suppliers.client())),
            )
        }

        fn verify(&self) {
            self.products.verify();
            self.categories.verify();
            self.suppliers.verify();
        }
    }

    fn tools() -> Category {
        Category {
            id: CategoryId(1),
            name: "Tools".into(),
        }
    }

    fn acme() -> Supplier {
        Supplier {
            id: SupplierId(1),
            name: "Acme".into(),
            city: "Oslo".into(),
        }
    }

    fn drill() -> Product {
        Product {
            id: ProductId(1),
            name: "Drill".into(),
            price: Decimal::from(50),
            supplier_id: SupplierId(1),
            category_id: CategoryId(1),
        }
    }

    fn payload(category: i64, supplier: i64) -> ProductCreate {
        ProductCreate {
            name: "Drill".into(),
            price: Decimal::from(50),
            supplier_id: SupplierId(supplier),
            category_id: CategoryId(category),
        }
    }

    #[tokio::test]
    async fn test_create_checks_category_then_supplier() {
        let mut fx = Fixture::new();
        fx.categories.expect_find(CategoryId(1)).return_ok(Some(tools()));
        fx.suppliers.expect_find(SupplierId(1)).return_ok(Some(acme()));
        fx.products.expect_insert().return_ok(drill());

        let view = fx.manager().create(payload(1, 1)).await.unwrap();

        assert_eq!(view, drill().to_view());
        fx.verify();
    }

    #[tokio::test]
    async fn test_create_with_missing_category_inserts_nothing() {
        let mut fx = Fixture::new();
        fx.categories.expect_find(CategoryId(99)).return_ok(None);

        let result = fx.manager().create(payload(99, 99)).await;

        // Category is reported even though the supplier is missing too.
        assert_eq!(result, Err(CatalogError::not_found("Category", 99)));
        fx.verify();
    }

    #[tokio::test]
    async fn test_create_with_missing_supplier_inserts_nothing() {
        let mut fx = Fixture::new();
        fx.categories.expect_find(CategoryId(1)).return_ok(Some(tools()));
        fx.suppliers.expect_find(SupplierId(5)).return_ok(None);

        let result = fx.manager().create(payload(1, 5)).await;

        assert_eq!(result, Err(CatalogError::not_found("Supplier", 5)));
        fx.verify();
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_price() {
        let fx = Fixture::new();
        let mut bad = payload(1, 1);
        bad.price = Decimal::new(50, 2);

        let result = fx.manager().create(bad).await;

        assert!(matches!(result, Err(CatalogError::Validation(msg)) if msg.contains("price")));
        fx.verify();
    }

    #[tokio::test]
    async fn test_create_rejects_missing_reference() {
        let fx = Fixture::new();

        let result = fx.manager().create(payload(0, 1)).await;

        assert!(matches!(result, Err(CatalogError::Validation(msg)) if msg.contains("categoryId")));
        fx.verify();
    }

    #[tokio::test]
    async fn test_create_checks_price_range_before_rounding() {
        let fx = Fixture::new();

        for price in [Decimal::new(995, 3), Decimal::new(100_000_004, 3)] {
            let mut bad = payload(1, 1);
            bad.price = price;
            let result = fx.manager().create(bad).await;
            assert!(
                matches!(result, Err(CatalogError::Validation(ref msg)) if msg.contains("price")),
                "{price} accepted: {result:?}"
            );
        }
        fx.verify();
    }

    #[tokio::test]
    async fn test_replace_checks_price_range_before_rounding() {
        let fx = Fixture::new();
        let mut view = drill().to_view();
        view.price = Decimal::new(995, 3);

        let result = fx.manager().replace(ProductId(1), view).await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
        fx.verify();
    }

    #[tokio::test]
    async fn test_replace_looks_up_product_before_references() {
        let mut fx = Fixture::new();
        fx.products.expect_find(ProductId(1)).return_ok(Some(drill()));
        fx.categories.expect_find(CategoryId(2)).return_ok(Some(Category {
            id: CategoryId(2),
            name: "Garden".into(),
        }));
        fx.suppliers.expect_find(SupplierId(1)).return_ok(Some(acme()));
        fx.products.expect_commit(ProductId(1)).echo();

        let view = fx
            .manager()
            .replace(
                ProductId(1),
                ProductView {
                    id: ProductId(1),
                    name: "Hammer".into(),
                    price: Decimal::new(1999, 2),
                    supplier_id: SupplierId(1),
                    category_id: CategoryId(2),
                },
            )
            .await
            .unwrap();

        assert_eq!(view.category_id, CategoryId(2));
        assert_eq!(view.name, "Hammer");
        fx.verify();
    }

    #[tokio::test]
    async fn test_replace_of_missing_product_checks_no_references() {
        let mut fx = Fixture::new();
        fx.products.expect_find(ProductId(7)).return_ok(None);

        let result = fx.manager().replace(ProductId(7), drill().to_view()).await;

        assert_eq!(result, Err(CatalogError::not_found("Product", 7)));
        fx.verify();
    }

    #[tokio::test]
    async fn test_replace_with_missing_category_commits_nothing() {
        let mut fx = Fixture::new();
        fx.products.expect_find(ProductId(1)).return_ok(Some(drill()));
        fx.categories.expect_find(CategoryId(99)).return_ok(None);
        let mut view = drill().to_view();
        view.category_id = CategoryId(99);
        view.supplier_id = SupplierId(99);

        let result = fx.manager().replace(ProductId(1), view).await;

        // Category is reported even though the supplier is missing too.
        assert_eq!(result, Err(CatalogError::not_found("Category", 99)));
        assert!(fx.products.committed().is_empty());
        fx.verify();
    }

    #[tokio::test]
    async fn test_replace_with_missing_supplier_commits_nothing() {
        let mut fx = Fixture::new();
        fx.products.expect_find(ProductId(1)).return_ok(Some(drill()));
        fx.categories.expect_find(CategoryId(1)).return_ok(Some(tools()));
        fx.suppliers.expect_find(SupplierId(5)).return_ok(None);
        let mut view = drill().to_view();
        view.supplier_id = SupplierId(5);

        let result = fx.manager().replace(ProductId(1), view).await;

        assert_eq!(result, Err(CatalogError::not_found("Supplier", 5)));
        assert!(fx.products.committed().is_empty());
        fx.verify();
    }

    #[tokio::test]
    async fn test_patch_does_not_resolve_references() {
        let mut fx = Fixture::new();
        fx.products.expect_find(ProductId(1)).return_ok(Some(drill()));
        fx.products.expect_commit(ProductId(1)).echo();

        let view = fx
            .manager()
            .patch(
                ProductId(1),
                PatchDocument::new(vec![PatchOperation::replace("/categoryId", 404)]),
            )
            .await
            .unwrap();

        assert_eq!(view.category_id, CategoryId(404));
        fx.verify();
    }

    #[tokio::test]
    async fn test_list_by_category_filters() {
        let mut fx = Fixture::new();
        let mut other = drill();
        other.id = ProductId(2);
        other.category_id = CategoryId(3);
        fx.categories.expect_find(CategoryId(1)).return_ok(Some(tools()));
        fx.products.expect_enumerate().return_ok(vec![drill(), other]);

        let views = fx.manager().list_by_category(CategoryId(1)).await.unwrap();

        assert_eq!(views, vec![drill().to_view()]);
        fx.verify();
    }

    #[tokio::test]
    async fn test_list_by_missing_supplier_is_not_found() {
        let mut fx = Fixture::new();
        fx.suppliers.expect_find(SupplierId(8)).return_ok(None);

        let result = fx.manager().list_by_supplier(SupplierId(8)).await;

        assert_eq!(result, Err(CatalogError::not_found("Supplier", 8)));
        fx.verify();
    }
}
