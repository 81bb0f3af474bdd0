//! Database library providing the MongoDB connector and the document store adapter
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector and the [`document`] adapter
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `mock` - `MockDocumentStore` generated by mockall, for downstream tests
//!
//! # Examples
//!
//! ## Connecting
//!
//! ```ignore
//! use database::mongodb::{connect_from_config, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog");
//! let client = connect_from_config(&config).await?;
//! ```
//!
//! ## Document store
//!
//! ```ignore
//! use database::document::{DocumentStore, MongoDocumentStore};
//! use mongodb::bson::doc;
//!
//! let store = MongoDocumentStore::connect(Some(&config)).await;
//! let id = store.insert("cosmeticproduct", doc! { "title": "Serum" }).await?;
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;

#[cfg(feature = "mongodb")]
pub mod document;

#[cfg(feature = "mongodb")]
pub use document::{DocumentStore, StoreError, StoreResult};
