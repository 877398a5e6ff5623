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
use crate::models::storage_location::{StorageLocation, StorageLocationRequest};
use crate::services::storage_location_service::{StorageLocationError, StorageLocationService};

/// Convert StorageLocationError to HTTP response
impl IntoResponse for StorageLocationError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            StorageLocationError::DuplicateName => (
                StatusCode::CONFLICT,
                "duplicate_name",
                "Storage location with this name already exists",
            ),
            StorageLocationError::StorageLocationNotFound => (
                StatusCode::NOT_FOUND,
                "storage_location_not_found",
                "Storage location not found",
            ),
            StorageLocationError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for listing storage locations
#[utoipa::path(
    get,
    path = "/api/storage-locations",
    responses(
        (status = 200, description = "List of storage locations", body = Vec<StorageLocation>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "storage-locations"
)]
pub async fn list_locations_handler(
    State(storage_location_service): State<Arc<dyn StorageLocationService>>,
    Extension(household): Extension<HouseholdContext>,
) -> Result<Json<Vec<StorageLocation>>, Response> {
    match storage_location_service
        .list_locations(household.household_id)
        .await
    {
        Ok(locations) => Ok(Json(locations)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for creating a storage location
#[utoipa::path(
    post,
    path = "/api/storage-locations",
    request_body = StorageLocationRequest,
    responses(
        (status = 201, description = "Storage location successfully created", body = StorageLocation),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Storage location with this name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "storage-locations"
)]
pub async fn create_location_handler(
    State(storage_location_service): State<Arc<dyn StorageLocationService>>,
    Extension(household): Extension<HouseholdContext>,
    Json(request): Json<StorageLocationRequest>,
) -> Result<(StatusCode, Json<StorageLocation>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match storage_location_service
        .create_location(household.household_id, request)
        .await
    {
        Ok(location) => Ok((StatusCode::CREATED, Json(location))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for renaming a storage location
#[utoipa::path(
    put,
    path = "/api/storage-locations/{id}",
    params(
        ("id" = Uuid, Path, description = "Storage location ID")
    ),
    request_body = StorageLocationRequest,
    responses(
        (status = 200, description = "Storage location successfully updated", body = StorageLocation),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Storage location not found", body = ErrorResponse),
        (status = 409, description = "Storage location with this name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "storage-locations"
)]
pub async fn update_location_handler(
    State(storage_location_service): State<Arc<dyn StorageLocationService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(location_id): Path<Uuid>,
    Json(request): Json<StorageLocationRequest>,
) -> Result<Json<StorageLocation>, Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match storage_location_service
        .update_location(household.household_id, location_id, request)
        .await
    {
        Ok(location) => Ok(Json(location)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for deleting a storage location
///
/// Items stored there lose their location rather than being deleted.
#[utoipa::path(
    delete,
    path = "/api/storage-locations/{id}",
    params(
        ("id" = Uuid, Path, description = "Storage location ID")
    ),
    responses(
        (status = 204, description = "Storage location successfully deleted"),
        (status = 404, description = "Storage location not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "storage-locations"
)]
pub async fn delete_location_handler(
    State(storage_location_service): State<Arc<dyn StorageLocationService>>,
    Extension(household): Extension<HouseholdContext>,
    Path(location_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    match storage_location_service
        .delete_location(household.household_id, location_id)
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage_location_service::StorageLocationServiceImpl;
    use crate::test_support::MockStorageLocationRepository;

    fn setup() -> (Arc<dyn StorageLocationService>, HouseholdContext) {
        let service: Arc<dyn StorageLocationService> = Arc::new(StorageLocationServiceImpl::new(
            Arc::new(MockStorageLocationRepository::new()),
        ));
        (
            service,
            HouseholdContext {
                household_id: Uuid::new_v4(),
            },
        )
    }

    fn request(name: &str) -> StorageLocationRequest {
        StorageLocationRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_location_handler_success() {
        let (service, household) = setup();

        let result =
            create_location_handler(State(service), Extension(household), Json(request("pantry")))
                .await;

        assert!(result.is_ok());
        let (status, Json(location)) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(location.name, "pantry");
    }

    #[tokio::test]
    async fn test_create_location_handler_empty_name_rejected() {
        let (service, household) = setup();

        let result =
            create_location_handler(State(service), Extension(household), Json(request(""))).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_update_location_handler_not_found() {
        let (service, household) = setup();

        let result = update_location_handler(
            State(service),
            Extension(household),
            Path(Uuid::new_v4()),
            Json(request("cellar")),
        )
        .await;

        assert!(result.is_err());
    }
}
