//! Products Domain
//!
//! The cosmetics catalog: product records stored in the `cosmeticproduct`
//! collection of a [`DocumentStore`](database::DocumentStore).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Availability check, seeding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │DocumentStore│  ← Data access (MongoDB or in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, CreateProduct, conversions
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use database::document::MongoDocumentStore;
//! use domain_products::{handlers, ProductService};
//!
//! let store = MongoDocumentStore::connect(Some(&mongo_config)).await;
//! let router = handlers::router(ProductService::new(store));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    COLLECTION, CreateProduct, CreatedResponse, FIELDS, Product, ProductFilter, SeedResponse,
};
pub use service::ProductService;
