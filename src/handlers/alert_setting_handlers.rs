use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::handlers::{validation_error_response, ErrorResponse};
use crate::middleware::household_middleware::HouseholdContext;
use crate::models::alert_setting::{AlertSetting, AlertSettingRequest};
use crate::services::alert_setting_service::{AlertSettingError, AlertSettingService};

/// Convert AlertSettingError to HTTP response
impl IntoResponse for AlertSettingError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AlertSettingError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for fetching the household's alert thresholds
///
/// A household that never configured its thresholds gets the defaults,
/// persisted on this first read.
#[utoipa::path(
    get,
    path = "/api/alert-settings",
    responses(
        (status = 200, description = "The household's alert thresholds", body = AlertSetting),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "alert-settings"
)]
pub async fn get_alert_settings_handler(
    State(alert_setting_service): State<Arc<dyn AlertSettingService>>,
    Extension(household): Extension<HouseholdContext>,
) -> Result<Json<AlertSetting>, Response> {
    match alert_setting_service
        .get_or_create(household.household_id)
        .await
    {
        Ok(setting) => Ok(Json(setting)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for replacing the household's alert thresholds
#[utoipa::path(
    put,
    path = "/api/alert-settings",
    request_body = AlertSettingRequest,
    responses(
        (status = 200, description = "Thresholds successfully updated", body = AlertSetting),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "alert-settings"
)]
pub async fn update_alert_settings_handler(
    State(alert_setting_service): State<Arc<dyn AlertSettingService>>,
    Extension(household): Extension<HouseholdContext>,
    Json(request): Json<AlertSettingRequest>,
) -> Result<Json<AlertSetting>, Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match alert_setting_service
        .update(household.household_id, request)
        .await
    {
        Ok(setting) => Ok(Json(setting)),
        Err(e) => Err(e.into_response()),
    }
}
