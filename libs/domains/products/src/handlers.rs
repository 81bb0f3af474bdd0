//! HTTP handlers for the catalog API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    JsonBody, QueryParams,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, UnprocessableEntityResponse,
    },
};
use database::DocumentStore;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, CreatedResponse, Product, ProductFilter, SeedResponse};
use crate::service::ProductService;

/// OpenAPI documentation for the catalog endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, list_categories, seed_sample_products),
    components(
        schemas(Product, CreateProduct, CreatedResponse, ProductFilter, SeedResponse),
        responses(
            BadRequestResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Cosmetics catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router: `/products`, `/categories` and `/seed`
pub fn router<S: DocumentStore + 'static>(service: ProductService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/categories", get(list_categories))
        .route("/seed", post(seed_sample_products))
        .with_state(shared_service)
}

/// List products, optionally filtered by category
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Products in insertion order", body = Vec<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: DocumentStore>(
    State(service): State<Arc<ProductService<S>>>,
    QueryParams(filter): QueryParams<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 400, response = BadRequestResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: DocumentStore>(
    State(service): State<Arc<ProductService<S>>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let id = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// List distinct product categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Products",
    responses(
        (status = 200, description = "Sorted, duplicate-free categories", body = Vec<String>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<S: DocumentStore>(
    State(service): State<Arc<ProductService<S>>>,
) -> ProductResult<Json<Vec<String>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Insert the sample catalog if it is empty
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Products",
    responses(
        (status = 200, description = "Samples inserted, or the existing count", body = SeedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn seed_sample_products<S: DocumentStore>(
    State(service): State<Arc<ProductService<S>>>,
) -> ProductResult<Json<SeedResponse>> {
    let response = service.seed_sample_products().await?;
    Ok(Json(response))
}
