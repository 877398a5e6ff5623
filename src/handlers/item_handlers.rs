use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::handlers::{validation_error_response, ErrorResponse};
use crate::middleware::household_middleware::HouseholdContext;
use crate::models::item::{InventoryItem, ItemRequest, ItemWithAlert};
use crate::services::item_service::{ItemError, ItemService};

/// Convert ItemError to HTTP response
impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ItemError::ItemNotFound => (StatusCode::NOT_FOUND, "item_not_found", "Item not found"),
            ItemError::CategoryNotFound => (
                StatusCode::NOT_FOUND,
                "category_not_found",
                "Category not found",
            ),
            ItemError::StorageLocationNotFound => (
                StatusCode::NOT_FOUND,
                "storage_location_not_found",
                "Storage location not found",
            ),
            ItemError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Query parameters for the item listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListItemsQuery {
    /// Restrict the listing to one storage location
    pub storage_location_id: Option<Uuid>,
    /// Reference date for alert evaluation, defaults to the current date
    pub today: Option<NaiveDate>,
}

/// Handler for listing inventory items
///
/// Retrieves all items in the caller's household, each decorated with its
/// alert classification. `today` can be overridden to make listings
/// reproducible.
#[utoipa::path(
    get,
    path = "/api/items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "List of items with alert status", body = Vec<ItemWithAlert>),
        (status = 403, description = "User does not belong to a household", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "items"
)]
pub async fn list_items_handler(
    State(item_service): State<Arc<dyn ItemService>>,
    Extension(household): Extension<HouseholdContext>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemWithAlert>>, Response> {
    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());

    match item_service
        .list_with_alerts(household.household_id, query.storage_location_id, today)
        .await
    {
        Ok(items) => Ok(Json(items)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for creating an inventory item
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item successfully created", body = InventoryItem),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Referenced category or storage location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "items"
)]
pub async fn create_item_handler(
    State(item_service): State<Arc<dyn ItemService>>,
    Extension(household): Extension<HouseholdContext>,
    Json(request): Json<ItemRequest>,
) -> Result<(StatusCode, Json<InventoryItem>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match item_service
        .create_item(household.household_id, request)
        .await
    {
        Ok(item) => Ok((StatusCode::CREATED, Json(item))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for fetching one inventory item
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "The item", body = InventoryItem),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "items"
)]
pub async fn get_item_handler(
    State(item_service): State<Arc<dyn ItemService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<InventoryItem>, Response> {
    match item_service.get_item(household.household_id, item_id).await {
        Ok(item) => Ok(Json(item)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for replacing an inventory item
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item successfully updated", body = InventoryItem),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Item, category or storage location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "items"
)]
pub async fn update_item_handler(
    State(item_service): State<Arc<dyn ItemService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(item_id): Path<Uuid>,
    Json(request): Json<ItemRequest>,
) -> Result<Json<InventoryItem>, Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match item_service
        .update_item(household.household_id, item_id, request)
        .await
    {
        Ok(item) => Ok(Json(item)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for deleting an inventory item
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item successfully deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "items"
)]
pub async fn delete_item_handler(
    State(item_service): State<Arc<dyn ItemService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(item_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    match item_service
        .delete_item(household.household_id, item_id)
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for duplicating an inventory item
///
/// Creates a copy of an existing item with the same attributes and a fresh
/// id; the copy's name is suffixed to keep it distinguishable.
#[utoipa::path(
    post,
    path = "/api/items/{id}/duplicate",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 201, description = "Copy successfully created", body = InventoryItem),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "items"
)]
pub async fn duplicate_item_handler(
    State(item_service): State<Arc<dyn ItemService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(item_id): Path<Uuid>,
) -> Result<(StatusCode, Json<InventoryItem>), Response> {
    match item_service
        .duplicate_item(household.household_id, item_id)
        .await
    {
        Ok(item) => Ok((StatusCode::CREATED, Json(item))),
        Err(e) => Err(e.into_response()),
    }
}
