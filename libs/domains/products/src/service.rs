//! Product Service - Business logic layer

use database::DocumentStore;
use mongodb::bson::Document;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::{COLLECTION, CreateProduct, Product, ProductFilter, SeedResponse};
use crate::seed::sample_products;

/// Product service over a [`DocumentStore`]
///
/// Every operation first checks that the store was connected at startup and
/// fails with [`ProductError::Unavailable`] otherwise.
pub struct ProductService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> ProductService<S> {
    /// Create a new ProductService with the given store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    fn ensure_available(&self) -> ProductResult<()> {
        if self.store.is_available() {
            Ok(())
        } else {
            Err(ProductError::Unavailable)
        }
    }

    /// List products, optionally restricted to one category
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.ensure_available()?;

        self.store
            .find(COLLECTION, filter.to_document())
            .await?
            .into_iter()
            .map(Product::from_document)
            .collect()
    }

    /// Create a product and return its generated id
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<String> {
        self.ensure_available()?;

        let id = self.store.insert(COLLECTION, input.to_document()?).await?;
        info!(%id, "Product created");
        Ok(id)
    }

    /// Distinct non-empty categories, sorted
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ProductResult<Vec<String>> {
        self.ensure_available()?;
        Ok(self.store.distinct(COLLECTION, "category").await?)
    }

    /// Insert the sample catalog unless the collection already has records
    #[instrument(skip(self))]
    pub async fn seed_sample_products(&self) -> ProductResult<SeedResponse> {
        self.ensure_available()?;

        let count = self.store.count(COLLECTION, Document::new()).await?;
        if count > 0 {
            info!(count, "Products already exist, skipping seed");
            return Ok(SeedResponse::already_seeded(count));
        }

        let samples = sample_products();
        for product in &samples {
            self.store.insert(COLLECTION, product.to_document()?).await?;
        }

        info!(inserted = samples.len(), "Seeded sample products");
        Ok(SeedResponse::inserted(samples.len()))
    }
}

impl<S: DocumentStore> Clone for ProductService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::StoreError;
    use database::document::MockDocumentStore;
    use mockall::predicate::{eq, function};
    use mongodb::bson::doc;

    fn available_store() -> MockDocumentStore {
        let mut store = MockDocumentStore::new();
        store.expect_is_available().return_const(true);
        store
    }

    #[tokio::test]
    async fn test_unavailable_store_short_circuits() {
        let mut store = MockDocumentStore::new();
        store.expect_is_available().return_const(false);
        let service = ProductService::new(store);

        assert_eq!(
            service.list_products(ProductFilter::default()).await,
            Err(ProductError::Unavailable)
        );
        assert_eq!(service.list_categories().await, Err(ProductError::Unavailable));
        assert_eq!(
            service.create_product(sample_products().remove(0)).await,
            Err(ProductError::Unavailable)
        );
        assert_eq!(
            service.seed_sample_products().await,
            Err(ProductError::Unavailable)
        );
    }

    #[tokio::test]
    async fn test_list_products_passes_category_filter() {
        let mut store = available_store();
        store
            .expect_find()
            .with(eq(COLLECTION), eq(doc! { "category": "makeup" }))
            .times(1)
            .returning(|_, _| {
                Ok(vec![doc! {
                    "id": "65f1c2a9e4b0a1b2c3d4e5f6",
                    "title": "Velvet Matte Lipstick",
                    "price": 14.99,
                    "category": "makeup",
                }])
            });
        let service = ProductService::new(store);

        let products = service
            .list_products(ProductFilter {
                category: Some("makeup".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "65f1c2a9e4b0a1b2c3d4e5f6");
        assert_eq!(products[0].category.as_deref(), Some("makeup"));
    }

    #[tokio::test]
    async fn test_store_fault_is_reported() {
        let mut store = available_store();
        store
            .expect_distinct()
            .returning(|_, _| Err(StoreError::fault("connection reset by peer")));
        let service = ProductService::new(store);

        assert_eq!(
            service.list_categories().await,
            Err(ProductError::Store("connection reset by peer".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_product_returns_store_id() {
        let mut store = available_store();
        store
            .expect_insert()
            .with(
                eq(COLLECTION),
                function(|record: &Document| record.get_str("title").ok() == Some("Test")),
            )
            .times(1)
            .returning(|_, _| Ok("65f1c2a9e4b0a1b2c3d4e5f6".to_string()));
        let service = ProductService::new(store);

        let input: CreateProduct =
            serde_json::from_value(serde_json::json!({"title": "Test", "price": 9.99})).unwrap();
        let id = service.create_product(input).await.unwrap();

        assert_eq!(id, "65f1c2a9e4b0a1b2c3d4e5f6");
    }

    #[tokio::test]
    async fn test_seed_skips_when_products_exist() {
        let mut store = available_store();
        store.expect_count().times(1).returning(|_, _| Ok(7));
        store.expect_insert().never();
        let service = ProductService::new(store);

        assert_eq!(
            service.seed_sample_products().await.unwrap(),
            SeedResponse::already_seeded(7)
        );
    }

    #[tokio::test]
    async fn test_seed_inserts_samples_into_empty_collection() {
        let mut store = available_store();
        store.expect_count().times(1).returning(|_, _| Ok(0));
        store
            .expect_insert()
            .times(4)
            .returning(|_, _| Ok("65f1c2a9e4b0a1b2c3d4e5f6".to_string()));
        let service = ProductService::new(store);

        assert_eq!(
            service.seed_sample_products().await.unwrap(),
            SeedResponse::inserted(4)
        );
    }
}
