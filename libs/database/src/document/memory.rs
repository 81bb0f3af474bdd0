//! In-process DocumentStore used by tests and local runs without MongoDB

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{
    DocumentStore, STORE_ID_FIELD, StoreError, StoreResult, distinct_strings, expose_id,
    strip_empty_id,
};

/// Document store holding every collection in memory.
///
/// Records keep insertion order. Filters are exact-match; a `null` filter
/// value also matches a record that lacks the field, the way MongoDB does.
#[derive(Debug)]
pub struct InMemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
    available: bool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(BTreeMap::new()),
            available: true,
        }
    }

    /// A store that behaves like one whose startup connection failed.
    pub fn unavailable() -> Self {
        Self {
            collections: RwLock::new(BTreeMap::new()),
            available: false,
        }
    }

    fn ensure_available(&self) -> StoreResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| match record.get(key) {
        Some(actual) => actual == expected,
        None => matches!(expected, Bson::Null),
    })
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn database_name(&self) -> Option<String> {
        self.available.then(|| "memory".to_string())
    }

    async fn insert(&self, collection: &str, record: Document) -> StoreResult<String> {
        self.ensure_available()?;

        let oid = ObjectId::new();
        let mut stored = Document::new();
        stored.insert(STORE_ID_FIELD, oid);
        for (key, value) in strip_empty_id(record) {
            stored.insert(key, value);
        }

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(stored);

        Ok(oid.to_hex())
    }

    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        self.ensure_available()?;

        let collections = self.collections.read().await;
        let records = collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| matches(record, &filter))
                    .cloned()
                    .map(expose_id)
                    .collect()
            })
            .unwrap_or_default();
        Ok(records)
    }

    async fn distinct(&self, collection: &str, field: &str) -> StoreResult<Vec<String>> {
        self.ensure_available()?;

        let collections = self.collections.read().await;
        let values = collections
            .get(collection)
            .into_iter()
            .flatten()
            .filter_map(|record| record.get(field).cloned());
        Ok(distinct_strings(values))
    }

    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        self.ensure_available()?;

        let collections = self.collections.read().await;
        let count = collections
            .get(collection)
            .map(|records| records.iter().filter(|r| matches(r, &filter)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn collections(&self) -> StoreResult<Vec<String>> {
        self.ensure_available()?;
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    const PRODUCTS: &str = "cosmeticproduct";

    #[tokio::test]
    async fn test_insert_assigns_object_id() {
        let store = InMemoryDocumentStore::new();

        let id = store
            .insert(PRODUCTS, doc! { "id": "", "title": "Serum" })
            .await
            .unwrap();

        assert_eq!(id.len(), 24);
        assert!(ObjectId::parse_str(&id).is_ok());

        let found = store.find(PRODUCTS, doc! {}).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get_str("id").unwrap(), id);
        assert!(!found[0].contains_key("_id"));
    }

    #[tokio::test]
    async fn test_find_filters_and_keeps_insertion_order() {
        let store = InMemoryDocumentStore::new();
        for (title, category) in [("A", "makeup"), ("B", "skincare"), ("C", "makeup")] {
            store
                .insert(PRODUCTS, doc! { "title": title, "category": category })
                .await
                .unwrap();
        }

        let makeup = store
            .find(PRODUCTS, doc! { "category": "makeup" })
            .await
            .unwrap();
        let titles: Vec<_> = makeup.iter().map(|d| d.get_str("title").unwrap()).collect();
        assert_eq!(titles, vec!["A", "C"]);

        let none = store
            .find(PRODUCTS, doc! { "category": "fragrance" })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_null_filter_matches_missing_field() {
        let store = InMemoryDocumentStore::new();
        store.insert(PRODUCTS, doc! { "title": "A" }).await.unwrap();
        store
            .insert(PRODUCTS, doc! { "title": "B", "category": Bson::Null })
            .await
            .unwrap();
        store
            .insert(PRODUCTS, doc! { "title": "C", "category": "makeup" })
            .await
            .unwrap();

        let count = store
            .count(PRODUCTS, doc! { "category": Bson::Null })
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_distinct_and_count() {
        let store = InMemoryDocumentStore::new();
        for category in ["skincare", "makeup", "skincare", ""] {
            store
                .insert(PRODUCTS, doc! { "category": category })
                .await
                .unwrap();
        }
        store.insert(PRODUCTS, doc! { "title": "x" }).await.unwrap();

        assert_eq!(
            store.distinct(PRODUCTS, "category").await.unwrap(),
            vec!["makeup", "skincare"]
        );
        assert_eq!(store.count(PRODUCTS, doc! {}).await.unwrap(), 5);
        assert_eq!(store.count("missing", doc! {}).await.unwrap(), 0);
        assert!(store.distinct("missing", "category").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_collections_lists_names_sorted() {
        let store = InMemoryDocumentStore::new();
        assert!(store.collections().await.unwrap().is_empty());

        store.insert("zeta", doc! {}).await.unwrap();
        store.insert(PRODUCTS, doc! {}).await.unwrap();

        assert_eq!(
            store.collections().await.unwrap(),
            vec![PRODUCTS.to_string(), "zeta".to_string()]
        );
        assert_eq!(store.database_name().as_deref(), Some("memory"));
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let store = InMemoryDocumentStore::unavailable();

        assert!(!store.is_available());
        assert_eq!(store.database_name(), None);
        assert_eq!(
            store.insert(PRODUCTS, doc! {}).await,
            Err(StoreError::Unavailable)
        );
        assert_eq!(store.find(PRODUCTS, doc! {}).await, Err(StoreError::Unavailable));
        assert_eq!(store.collections().await, Err(StoreError::Unavailable));
    }
}
