//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::{diagnostics, info};

/// Combined OpenAPI documentation for the Cosmetics API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cosmetics Store API",
        version = "1.0.0",
        description = "Cosmetics catalog backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(info::root, info::hello, info::schema, diagnostics::test_database),
    components(schemas(
        info::MessageResponse,
        info::SchemaResponse,
        info::CollectionSchema,
        diagnostics::DiagnosticsResponse
    )),
    nest(
        (path = "/api", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Info", description = "Service banners and diagnostics"),
        (name = "Products", description = "Cosmetics catalog endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_contains_catalog_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/",
            "/api/hello",
            "/schema",
            "/test",
            "/api/products",
            "/api/categories",
            "/api/seed",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
