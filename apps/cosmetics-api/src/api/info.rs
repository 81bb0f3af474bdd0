//! Service banner and schema introspection

use axum::Json;
use domain_products::FIELDS;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionSchema {
    pub fields: Vec<&'static str>,
}

/// Field names per collection
#[derive(Debug, Serialize, ToSchema)]
pub struct SchemaResponse {
    #[serde(rename = "cosmeticproduct")]
    pub products: CollectionSchema,
}

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Info",
    responses((status = 200, description = "Service banner", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Cosmetics Store Backend is running",
    })
}

/// Greeting used by the frontend to check connectivity
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Info",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

/// Product record field names, for tooling
#[utoipa::path(
    get,
    path = "/schema",
    tag = "Info",
    responses((status = 200, description = "Fields of each collection", body = SchemaResponse))
)]
pub async fn schema() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        products: CollectionSchema {
            fields: FIELDS.to_vec(),
        },
    })
}
