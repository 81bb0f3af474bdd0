//! MongoDB implementation of DocumentStore

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use tracing::{error, instrument, warn};

use super::{
    DocumentStore, STORE_ID_FIELD, StoreError, StoreResult, distinct_strings, expose_id,
    id_to_string, strip_empty_id,
};
use crate::mongodb::{MongoConfig, connect_from_config};

/// Document store backed by a MongoDB database.
///
/// Holds `None` when the service started without a reachable database; every
/// operation then fails with [`StoreError::Unavailable`]. Cloning shares the
/// driver's connection pool.
#[derive(Clone, Debug, Default)]
pub struct MongoDocumentStore {
    db: Option<Database>,
}

impl MongoDocumentStore {
    /// Wrap an already connected database.
    pub fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    /// A store that reports itself unavailable.
    pub fn unavailable() -> Self {
        Self { db: None }
    }

    /// Connect once at startup.
    ///
    /// Missing configuration or a failed connection leaves the store
    /// unavailable instead of failing startup.
    pub async fn connect(config: Option<&MongoConfig>) -> Self {
        let Some(config) = config else {
            warn!("DATABASE_URL / DATABASE_NAME not set; document store is unavailable");
            return Self::unavailable();
        };

        match connect_from_config(config).await {
            Ok(client) => Self::new(client.database(config.database())),
            Err(e) => {
                error!(error = %e, "MongoDB connection failed; document store is unavailable");
                Self::unavailable()
            }
        }
    }

    fn collection(&self, name: &str) -> StoreResult<Collection<Document>> {
        self.db
            .as_ref()
            .map(|db| db.collection::<Document>(name))
            .ok_or(StoreError::Unavailable)
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    fn is_available(&self) -> bool {
        self.db.is_some()
    }

    fn database_name(&self) -> Option<String> {
        self.db.as_ref().map(|db| db.name().to_string())
    }

    #[instrument(skip(self, record))]
    async fn insert(&self, collection: &str, record: Document) -> StoreResult<String> {
        let result = self
            .collection(collection)?
            .insert_one(strip_empty_id(record))
            .await?;

        let id = id_to_string(&result.inserted_id);
        tracing::debug!(%id, "Document inserted");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let cursor = self
            .collection(collection)?
            .find(filter)
            .sort(doc! { STORE_ID_FIELD: 1 })
            .await?;
        let records: Vec<Document> = cursor.try_collect().await?;

        Ok(records.into_iter().map(expose_id).collect())
    }

    #[instrument(skip(self))]
    async fn distinct(&self, collection: &str, field: &str) -> StoreResult<Vec<String>> {
        let values = self
            .collection(collection)?
            .distinct(field, doc! {})
            .await?;
        Ok(distinct_strings(values))
    }

    #[instrument(skip(self))]
    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        let count = self.collection(collection)?.count_documents(filter).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn collections(&self) -> StoreResult<Vec<String>> {
        let db = self.db.as_ref().ok_or(StoreError::Unavailable)?;
        let mut names = db.list_collection_names().await?;
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_store_rejects_every_operation() {
        let store = MongoDocumentStore::unavailable();

        assert!(!store.is_available());
        assert_eq!(store.database_name(), None);
        assert_eq!(
            store.insert("cosmeticproduct", doc! { "title": "Serum" }).await,
            Err(StoreError::Unavailable)
        );
        assert_eq!(
            store.find("cosmeticproduct", doc! {}).await,
            Err(StoreError::Unavailable)
        );
        assert_eq!(
            store.distinct("cosmeticproduct", "category").await,
            Err(StoreError::Unavailable)
        );
        assert_eq!(
            store.count("cosmeticproduct", doc! {}).await,
            Err(StoreError::Unavailable)
        );
        assert_eq!(store.collections().await, Err(StoreError::Unavailable));
    }

    #[tokio::test]
    async fn test_connect_without_config_is_unavailable() {
        let store = MongoDocumentStore::connect(None).await;
        assert!(!store.is_available());
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_round_trip_against_mongodb() {
        let url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let config = MongoConfig::with_database(url, "catalog_store_test");
        let store = MongoDocumentStore::connect(Some(&config)).await;
        assert!(store.is_available());

        let collection = "round_trip";
        let id = store
            .insert(collection, doc! { "id": "", "category": "makeup" })
            .await
            .unwrap();
        assert_eq!(id.len(), 24);

        let found = store
            .find(collection, doc! { "category": "makeup" })
            .await
            .unwrap();
        assert!(found.iter().any(|d| d.get_str("id").ok() == Some(id.as_str())));

        connect_from_config(&config)
            .await
            .unwrap()
            .database(config.database())
            .collection::<Document>(collection)
            .drop()
            .await
            .unwrap();
    }
}
