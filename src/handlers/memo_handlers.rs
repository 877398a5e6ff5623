use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::handlers::{validation_error_response, ErrorResponse};
use crate::middleware::household_middleware::HouseholdContext;
use crate::models::memo::{Memo, MemoRequest};
use crate::services::memo_service::{MemoError, MemoService};

/// Convert MemoError to HTTP response
impl IntoResponse for MemoError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            MemoError::MemoNotFound => (StatusCode::NOT_FOUND, "memo_not_found", "Memo not found"),
            MemoError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for listing memos
#[utoipa::path(
    get,
    path = "/api/memos",
    responses(
        (status = 200, description = "List of memos, newest first", body = Vec<Memo>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "memos"
)]
pub async fn list_memos_handler(
    State(memo_service): State<Arc<dyn MemoService>>,
    Extension(household): Extension<HouseholdContext>,
) -> Result<Json<Vec<Memo>>, Response> {
    match memo_service.list_memos(household.household_id).await {
        Ok(memos) => Ok(Json(memos)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for creating a memo
#[utoipa::path(
    post,
    path = "/api/memos",
    request_body = MemoRequest,
    responses(
        (status = 201, description = "Memo successfully created", body = Memo),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "memos"
)]
pub async fn create_memo_handler(
    State(memo_service): State<Arc<dyn MemoService>>,
    Extension(household): Extension<HouseholdContext>,
    Json(request): Json<MemoRequest>,
) -> Result<(StatusCode, Json<Memo>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match memo_service
        .create_memo(household.household_id, request)
        .await
    {
        Ok(memo) => Ok((StatusCode::CREATED, Json(memo))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for replacing a memo's body
#[utoipa::path(
    put,
    path = "/api/memos/{id}",
    params(
        ("id" = Uuid, Path, description = "Memo ID")
    ),
    request_body = MemoRequest,
    responses(
        (status = 200, description = "Memo successfully updated", body = Memo),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Memo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "memos"
)]
pub async fn update_memo_handler(
    State(memo_service): State<Arc<dyn MemoService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(memo_id): Path<Uuid>,
    Json(request): Json<MemoRequest>,
) -> Result<Json<Memo>, Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match memo_service
        .update_memo(household.household_id, memo_id, request)
        .await
    {
        Ok(memo) => Ok(Json(memo)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for deleting a memo
#[utoipa::path(
    delete,
    path = "/api/memos/{id}",
    params(
        ("id" = Uuid, Path, description = "Memo ID")
    ),
    responses(
        (status = 204, description = "Memo successfully deleted"),
        (status = 404, description = "Memo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "memos"
)]
pub async fn delete_memo_handler(
    State(memo_service): State<Arc<dyn MemoService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(memo_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    match memo_service
        .delete_memo(household.household_id, memo_id)
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into_response()),
    }
}
