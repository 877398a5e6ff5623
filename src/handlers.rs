use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

pub mod alert_setting_handlers;
pub mod auth_handlers;
pub mod balance_handlers;
pub mod category_handlers;
pub mod household_handlers;
pub mod item_handlers;
pub mod memo_handlers;
pub mod storage_location_handlers;

/// Error response structure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub(crate) fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Convert validator output into the 400 response every handler uses
pub(crate) fn validation_error_response(validation_errors: ValidationErrors) -> Response {
    let error_message = validation_errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ");

    let error_response = ErrorResponse::new("validation_error", &error_message);
    (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
}
