use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{info, instrument, warn};

use map_tool_domain::{create_default_map_calculator, MapCalculatorTrait};

use crate::entities::common::ErrorResponse;
use crate::entities::map::{MapFormInput, MapFormOutput};

/// Service type for dependency injection
pub type CalculatorService = Arc<dyn MapCalculatorTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> CalculatorService {
    Arc::new(create_default_map_calculator())
}

/// Calculate Mean Arterial Pressure (MAP) based on Systolic and Diastolic Blood Pressure.
#[utoipa::path(
    post,
    path = "/calculate",
    request_body(
        content = MapFormInput,
        content_type = "application/x-www-form-urlencoded",
        description = "Systolic and diastolic blood pressure in mmHg"
    ),
    responses(
        (status = 200, description = "MAP calculated", body = MapFormOutput),
        (status = 400, description = "Request body is not a valid form", body = ErrorResponse),
        (status = 415, description = "Request body is not form-encoded", body = ErrorResponse),
        (status = 422, description = "One or more fields failed validation", body = ErrorResponse),
    ),
    tag = "map"
)]
#[instrument(skip(service, form))]
pub async fn calculate_map(
    State(service): State<CalculatorService>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let Form(pairs) = form.map_err(|rejection| {
        warn!("Rejected malformed form body: {}", rejection.body_text());
        ErrorResponse::from_form_rejection(&rejection)
    })?;
    let input = MapFormInput::from_pairs(pairs);

    match service.calculate_submission(input.into()) {
        Ok(result) => {
            info!(map = result.map(), "Calculated mean arterial pressure");
            Ok((StatusCode::OK, Json(MapFormOutput::from(result))))
        }
        Err(e) => {
            warn!("Invalid blood pressure input: {}", e);
            Err(ErrorResponse::validation_error(&e))
        }
    }
}
