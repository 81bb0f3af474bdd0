//! Collection-oriented document store adapter
//!
//! [`DocumentStore`] is the seam between HTTP handlers and the database. It
//! speaks in BSON documents and named collections, hides driver errors behind
//! [`StoreError`], and reports [`StoreError::Unavailable`] when no connection
//! was established at startup.
//!
//! Two implementations ship with the crate:
//! - [`MongoDocumentStore`] backed by a `mongodb::Database`
//! - [`InMemoryDocumentStore`] for tests and local runs without MongoDB

mod error;
mod memory;
mod mongo;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use std::collections::BTreeSet;
use std::sync::Arc;

pub use error::{MAX_DIAGNOSTIC_LEN, StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;
pub use mongo::MongoDocumentStore;

/// Name of the public identifier field on records returned by [`DocumentStore::find`].
pub const ID_FIELD: &str = "id";

/// Name of the identifier field the store assigns.
pub const STORE_ID_FIELD: &str = "_id";

/// Data access interface over named collections of documents.
///
/// Every operation is a single round-trip; implementations must be safe to
/// share between concurrent requests.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Whether a connection was established at startup.
    fn is_available(&self) -> bool;

    /// Name of the backing database, if connected.
    fn database_name(&self) -> Option<String>;

    /// Write one record and return its generated identifier.
    ///
    /// An empty or null `id` field on the record is dropped before writing.
    async fn insert(&self, collection: &str, record: Document) -> StoreResult<String>;

    /// Return records whose fields equal every entry of `filter`.
    ///
    /// Results come back in insertion order with `_id` exposed as a string `id`.
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>>;

    /// Unique non-empty string values of `field`, sorted ascending.
    async fn distinct(&self, collection: &str, field: &str) -> StoreResult<Vec<String>>;

    /// Number of records matching `filter`.
    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64>;

    /// Names of the collections in the database.
    async fn collections(&self) -> StoreResult<Vec<String>>;
}

#[async_trait]
impl<T: DocumentStore + ?Sized> DocumentStore for Arc<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn database_name(&self) -> Option<String> {
        (**self).database_name()
    }

    async fn insert(&self, collection: &str, record: Document) -> StoreResult<String> {
        (**self).insert(collection, record).await
    }

    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        (**self).find(collection, filter).await
    }

    async fn distinct(&self, collection: &str, field: &str) -> StoreResult<Vec<String>> {
        (**self).distinct(collection, field).await
    }

    async fn count(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        (**self).count(collection, filter).await
    }

    async fn collections(&self) -> StoreResult<Vec<String>> {
        (**self).collections().await
    }
}

/// Drop an `id` field that carries no value so the store assigns its own.
pub(crate) fn strip_empty_id(mut record: Document) -> Document {
    let empty = match record.get(ID_FIELD) {
        Some(Bson::Null) => true,
        Some(Bson::String(s)) => s.is_empty(),
        _ => false,
    };
    if empty {
        record.remove(ID_FIELD);
    }
    record
}

/// Render a store-assigned identifier in its public string form.
pub(crate) fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Replace `_id` with a leading string `id` field.
pub(crate) fn expose_id(mut record: Document) -> Document {
    let mut exposed = Document::new();
    if let Some(id) = record.remove(STORE_ID_FIELD) {
        exposed.insert(ID_FIELD, id_to_string(&id));
    }
    for (key, value) in record {
        if key == ID_FIELD && exposed.contains_key(ID_FIELD) {
            continue;
        }
        exposed.insert(key, value);
    }
    exposed
}

/// Keep non-empty strings, deduplicated and sorted.
pub(crate) fn distinct_strings(values: impl IntoIterator<Item = Bson>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|value| match value {
            Bson::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
