use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::handlers::{validation_error_response, ErrorResponse};
use crate::middleware::auth_middleware::AuthenticatedUser;
use crate::models::household::{CreateHouseholdRequest, Household, JoinHouseholdRequest};
use crate::services::household_service::{HouseholdError, HouseholdService};

/// Convert HouseholdError to HTTP response
impl IntoResponse for HouseholdError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            HouseholdError::AlreadyInHousehold => (
                StatusCode::CONFLICT,
                "already_in_household",
                "User already belongs to a household",
            ),
            HouseholdError::HouseholdNotFound => (
                StatusCode::NOT_FOUND,
                "household_not_found",
                "Household not found",
            ),
            HouseholdError::NoHousehold => (
                StatusCode::NOT_FOUND,
                "no_household",
                "User does not belong to a household",
            ),
            HouseholdError::UserNotFound => (
                StatusCode::UNAUTHORIZED,
                "user_not_found",
                "Authenticated user no longer exists",
            ),
            HouseholdError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for creating a household
///
/// Creates a new household and makes the authenticated user its first member.
#[utoipa::path(
    post,
    path = "/api/households",
    request_body = CreateHouseholdRequest,
    responses(
        (status = 201, description = "Household successfully created", body = Household),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "User already belongs to a household", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "households"
)]
pub async fn create_household_handler(
    State(household_service): State<Arc<dyn HouseholdService>>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateHouseholdRequest>,
) -> Result<(StatusCode, Json<Household>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match household_service
        .create_household(auth_user.user_id, request)
        .await
    {
        Ok(household) => Ok((StatusCode::CREATED, Json(household))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for joining a household
///
/// Attaches the authenticated user to an existing household.
#[utoipa::path(
    post,
    path = "/api/households/join",
    request_body = JoinHouseholdRequest,
    responses(
        (status = 200, description = "Joined the household", body = Household),
        (status = 404, description = "Household not found", body = ErrorResponse),
        (status = 409, description = "User already belongs to a household", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "households"
)]
pub async fn join_household_handler(
    State(household_service): State<Arc<dyn HouseholdService>>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<JoinHouseholdRequest>,
) -> Result<Json<Household>, Response> {
    match household_service
        .join_household(auth_user.user_id, request)
        .await
    {
        Ok(household) => Ok(Json(household)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for fetching the caller's household
///
/// Returns the household the authenticated user belongs to.
#[utoipa::path(
    get,
    path = "/api/households/current",
    responses(
        (status = 200, description = "The caller's household", body = Household),
        (status = 404, description = "User does not belong to a household", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "households"
)]
pub async fn current_household_handler(
    State(household_service): State<Arc<dyn HouseholdService>>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<Household>, Response> {
    match household_service.current_household(auth_user.user_id).await {
        Ok(household) => Ok(Json(household)),
        Err(e) => Err(e.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::CreateUserRequest;
    use crate::repositories::user_repository::UserRepository;
    use crate::services::household_service::HouseholdServiceImpl;
    use crate::test_support::{MockHouseholdRepository, MockUserRepository};
    use uuid::Uuid;

    async fn setup() -> (Arc<dyn HouseholdService>, Uuid) {
        let user_repo = Arc::new(MockUserRepository::new());
        let household_repo = Arc::new(MockHouseholdRepository::new());
        let user = user_repo
            .create(
                CreateUserRequest {
                    name: "Test User".to_string(),
                    email: "user@example.com".to_string(),
                    password: "password123".to_string(),
                },
                "hash".to_string(),
            )
            .await
            .unwrap();
        let service: Arc<dyn HouseholdService> =
            Arc::new(HouseholdServiceImpl::new(household_repo, user_repo));
        (service, user.id)
    }

    #[tokio::test]
    async fn test_create_household_handler_success() {
        let (service, user_id) = setup().await;

        let result = create_household_handler(
            State(service),
            Extension(AuthenticatedUser { user_id }),
            Json(CreateHouseholdRequest {
                name: "Tanaka family".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        let (status, Json(household)) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(household.name, "Tanaka family");
    }

    #[tokio::test]
    async fn test_create_household_handler_validation_error() {
        let (service, user_id) = setup().await;

        let result = create_household_handler(
            State(service),
            Extension(AuthenticatedUser { user_id }),
            Json(CreateHouseholdRequest {
                name: "".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_join_household_handler_not_found() {
        let (service, user_id) = setup().await;

        let result = join_household_handler(
            State(service),
            Extension(AuthenticatedUser { user_id }),
            Json(JoinHouseholdRequest {
                household_id: Uuid::new_v4(),
            }),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_current_household_handler_roundtrip() {
        let (service, user_id) = setup().await;

        let (_, Json(created)) = create_household_handler(
            State(service.clone()),
            Extension(AuthenticatedUser { user_id }),
            Json(CreateHouseholdRequest {
                name: "Tanaka family".to_string(),
            }),
        )
        .await
        .unwrap();

        let result =
            current_household_handler(State(service), Extension(AuthenticatedUser { user_id }))
                .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().0.id, created.id);
    }
}
