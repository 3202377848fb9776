use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{SERVICE_DESCRIPTION, SERVICE_TITLE, SERVICE_VERSION};

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", openapi_document())
}

/// OpenAPI document with service metadata filled in
pub fn openapi_document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = SERVICE_TITLE.to_string();
    doc.info.description = Some(SERVICE_DESCRIPTION.to_string());
    doc.info.version = SERVICE_VERSION.to_string();
    doc
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::calculate::calculate_map,
    ),
    components(
        schemas(
            crate::entities::map::MapFormInput,
            crate::entities::map::MapFormOutput,
            crate::entities::common::ErrorResponse,
            crate::entities::common::FieldErrorDetail,
        )
    ),
    tags(
        (name = "map", description = "Mean Arterial Pressure calculation")
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
struct ApiDoc;
