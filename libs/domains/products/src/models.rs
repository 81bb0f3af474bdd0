use database::StoreError;
use mongodb::bson::{self, Document, doc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ProductError, ProductResult};

/// Collection holding every product record
pub const COLLECTION: &str = "cosmeticproduct";

/// Field names of a product record, in declaration order (without `id`)
pub const FIELDS: [&str; 10] = [
    "title",
    "description",
    "price",
    "category",
    "in_stock",
    "image_url",
    "shopify_url",
    "brand",
    "tags",
    "rating",
];

fn default_in_stock() -> bool {
    true
}

/// Product as returned by the API
///
/// Optional fields are always present in JSON, as `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier (24 hex characters)
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Velvet Matte Lipstick")]
    pub title: String,
    pub description: Option<String>,
    /// Expected to be non-negative; not enforced
    #[schema(example = 14.99)]
    pub price: f64,
    #[schema(example = "makeup")]
    pub category: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub image_url: Option<String>,
    pub shopify_url: Option<String>,
    pub brand: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Expected within 0-5; not enforced
    #[schema(example = 4.6)]
    pub rating: Option<f64>,
}

impl Product {
    /// Decode a record returned by the document store.
    pub fn from_document(record: Document) -> ProductResult<Self> {
        bson::from_document(record).map_err(|e| ProductError::from(StoreError::fault(e)))
    }
}

/// Payload for creating a product
///
/// Any `id` in the payload is ignored; the store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Hydrating Face Serum")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(example = 24.5)]
    pub price: f64,
    #[serde(default)]
    #[schema(example = "skincare")]
    pub category: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub shopify_url: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl CreateProduct {
    /// Encode as a store record. Unset optional fields are written as `null`.
    pub fn to_document(&self) -> ProductResult<Document> {
        bson::to_document(self).map_err(|e| ProductError::from(StoreError::fault(e)))
    }

    /// The API view of this payload once the store assigned `id`.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
            image_url: self.image_url,
            shopify_url: self.shopify_url,
            brand: self.brand,
            tags: self.tags,
            rating: self.rating,
        }
    }
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Only products whose category equals this value; empty means no filter
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn to_document(&self) -> Document {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => doc! { "category": category },
            _ => Document::new(),
        }
    }
}

/// Response body of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
}

/// Response body of the seed operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SeedResponse {
    /// The collection was empty and the samples were written
    Inserted { status: String, inserted: usize },
    /// The collection already held records; nothing was written
    AlreadySeeded {
        status: String,
        message: String,
        count: u64,
    },
}

impl SeedResponse {
    pub fn inserted(inserted: usize) -> Self {
        SeedResponse::Inserted {
            status: "ok".to_string(),
            inserted,
        }
    }

    pub fn already_seeded(count: u64) -> Self {
        SeedResponse::AlreadySeeded {
            status: "ok".to_string(),
            message: "Products already exist".to_string(),
            count,
        }
    }
}
