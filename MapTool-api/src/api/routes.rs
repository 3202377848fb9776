use axum::{routing::post, Router};
use tracing::debug;

use crate::api::handlers::calculate;
use crate::api::middleware::configure_middleware;
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(config: &AppConfig) -> Router {
    debug!("Creating application router");

    let calculator_service = calculate::create_service();

    let app = Router::new()
        .route("/calculate", post(calculate::calculate_map))
        .with_state(calculator_service);

    debug!("Calculate route configured");

    let app = if config.enable_docs {
        debug!("API documentation enabled");
        add_swagger_ui(app)
    } else {
        app
    };

    let app = configure_middleware(app);
    debug!("Middleware applied");

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
