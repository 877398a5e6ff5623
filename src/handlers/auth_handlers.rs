use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::handlers::{validation_error_response, ErrorResponse};
use crate::models::auth::{AuthToken, LoginRequest};
use crate::models::user::{CreateUserRequest, User};
use crate::services::auth_service::{AuthError, AuthService};

/// Convert AuthError to HTTP response
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AuthError::DuplicateEmail => (
                StatusCode::CONFLICT,
                "duplicate_email",
                "Email already exists",
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "Invalid email or password",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "invalid_token",
                "Invalid authentication token",
            ),
            AuthError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                "token_expired",
                "Authentication token has expired",
            ),
            AuthError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Handler for user registration
///
/// Creates a new user account with the provided credentials. The new user
/// belongs to no household yet.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User successfully registered", body = User),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(auth_service): State<Arc<dyn AuthService>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_error_response(validation_errors));
    }

    match auth_service.register(request).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(user))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for user login
///
/// Authenticates a user and returns a JWT token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthToken),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(auth_service): State<Arc<dyn AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthToken>, Response> {
    match auth_service.login(request).await {
        Ok(token) => Ok(Json(token)),
        Err(e) => Err(e.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth_service::AuthServiceImpl;
    use crate::test_support::MockUserRepository;

    fn service() -> Arc<dyn AuthService> {
        Arc::new(AuthServiceImpl::new(
            Arc::new(MockUserRepository::new()),
            "test_secret".to_string(),
        ))
    }

    fn register_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_handler_success() {
        let auth_service = service();

        let result = register_handler(State(auth_service), Json(register_request())).await;
        assert!(result.is_ok());

        let (status, Json(user)) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user.name, "Test User");
        assert_eq!(user.email, "test@example.com");
        assert!(user.household_id.is_none());
    }

    #[tokio::test]
    async fn test_register_handler_validation_error() {
        let auth_service = service();

        // Invalid email format
        let request = CreateUserRequest {
            name: "Test User".to_string(),
            email: "invalid-email".to_string(),
            password: "password123".to_string(),
        };

        let result = register_handler(State(auth_service), Json(request)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_register_handler_duplicate_email() {
        let auth_service = service();

        let _ = register_handler(State(auth_service.clone()), Json(register_request())).await;

        let result = register_handler(State(auth_service), Json(register_request())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_login_handler_success() {
        let auth_service = service();
        let _ = register_handler(State(auth_service.clone()), Json(register_request())).await;

        let login_request = LoginRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        };

        let result = login_handler(State(auth_service), Json(login_request)).await;
        assert!(result.is_ok());

        let Json(token) = result.unwrap();
        assert!(!token.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_handler_invalid_credentials() {
        let auth_service = service();
        let _ = register_handler(State(auth_service.clone()), Json(register_request())).await;

        let login_request = LoginRequest {
            email: "test@example.com".to_string(),
            password: "wrongpassword".to_string(),
        };

        let result = login_handler(State(auth_service), Json(login_request)).await;
        assert!(result.is_err());
    }
}
