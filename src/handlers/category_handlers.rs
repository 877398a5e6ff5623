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
use crate::models::category::{Category, CategoryRequest};
use crate::services::category_service::{CategoryError, CategoryService};

/// Convert CategoryError to HTTP response
impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            CategoryError::DuplicateName => (
                StatusCode::CONFLICT,
                "duplicate_name",
                "Category with this name already exists",
            ),
            CategoryError::CategoryNotFound => (
                StatusCode::NOT_FOUND,
                "category_not_found",
                "Category not found",
            ),
            CategoryError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for listing categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "categories"
)]
pub async fn list_categories_handler(
    State(category_service): State<Arc<dyn CategoryService>>,
    Extension(household): Extension<HouseholdContext>,
) -> Result<Json<Vec<Category>>, Response> {
    match category_service
        .list_categories(household.household_id)
        .await
    {
        Ok(categories) => Ok(Json(categories)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for creating a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category successfully created", body = Category),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Category with this name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "categories"
)]
pub async fn create_category_handler(
    State(category_service): State<Arc<dyn CategoryService>>,
    Extension(household): Extension<HouseholdContext>,
    Json(request): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match category_service
        .create_category(household.household_id, request)
        .await
    {
        Ok(category) => Ok((StatusCode::CREATED, Json(category))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for replacing a category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category successfully updated", body = Category),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Category with this name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "categories"
)]
pub async fn update_category_handler(
    State(category_service): State<Arc<dyn CategoryService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(category_id): Path<Uuid>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<Category>, Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match category_service
        .update_category(household.household_id, category_id, request)
        .await
    {
        Ok(category) => Ok(Json(category)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for deleting a category
///
/// Items in the deleted category become uncategorized rather than being
/// deleted with it.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category successfully deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "categories"
)]
pub async fn delete_category_handler(
    State(category_service): State<Arc<dyn CategoryService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(category_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    match category_service
        .delete_category(household.household_id, category_id)
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into_response()),
    }
}
