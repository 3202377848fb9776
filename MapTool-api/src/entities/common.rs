use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use map_tool_domain::{FieldError, MapValidationError};

/// One rejected form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDetail {
    /// Name of the offending field
    pub field: String,

    /// Machine-readable reason: below_minimum, above_maximum, wrong_type or missing
    pub kind: String,

    /// Human-readable reason
    pub message: String,
}

impl From<&FieldError> for FieldErrorDetail {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.name().to_string(),
            kind: error.kind.code().to_string(),
            message: error.to_string(),
        }
    }
}

/// Error response format for API
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status the response is sent with
    #[serde(skip)]
    pub status: StatusCode,

    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Per-field details for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldErrorDetail>>,
}

impl ErrorResponse {
    /// Create a validation error response listing every rejected field
    pub fn validation_error(error: &MapValidationError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: "validation_error".to_string(),
            message: error.to_string(),
            details: Some(error.errors().iter().map(FieldErrorDetail::from).collect()),
        }
    }

    /// Create a bad request error response
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "bad_request".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Create an unsupported media type error response
    pub fn unsupported_media_type(message: &str) -> Self {
        Self {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            error: "unsupported_media_type".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Map a form extraction failure onto the API error format
    pub fn from_form_rejection(rejection: &FormRejection) -> Self {
        let message = rejection.body_text();
        if rejection.status() == StatusCode::UNSUPPORTED_MEDIA_TYPE {
            Self::unsupported_media_type(&message)
        } else {
            Self::bad_request(&message)
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
