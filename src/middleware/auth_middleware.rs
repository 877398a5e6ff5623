use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::services::auth_service::AuthService;

/// Extension type to store authenticated user ID in request
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Auth middleware that validates JWT tokens and adds user_id to request extensions
pub async fn auth_middleware(
    State(auth_service): State<Arc<dyn AuthService>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidTokenFormat)?;

    let user_id = auth_service
        .validate_token(token)
        .await
        .map_err(|e| match e {
            crate::services::auth_service::AuthError::TokenExpired => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Auth middleware errors
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidTokenFormat,
    InvalidToken,
    TokenExpired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authorization token"),
            AuthError::InvalidTokenFormat => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization header format. Expected: Bearer <token>",
            ),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or malformed token"),
            AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token has expired"),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::{AuthToken, LoginRequest};
    use crate::models::user::{CreateUserRequest, User};
    use crate::services::auth_service::{AuthService, AuthServiceImpl};
    use crate::test_support::MockUserRepository;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    // Test handler that requires authentication
    async fn protected_handler(
        axum::Extension(user): axum::Extension<AuthenticatedUser>,
    ) -> impl IntoResponse {
        Json(json!({
            "user_id": user.user_id.to_string(),
            "message": "Access granted"
        }))
    }

    fn create_test_app(auth_service: Arc<dyn AuthService>) -> Router {
        Router::new()
            .route("/protected", get(protected_handler))
            .layer(middleware::from_fn_with_state(
                auth_service.clone(),
                auth_middleware,
            ))
            .with_state(auth_service)
    }

    async fn create_test_user_and_token(auth_service: &Arc<dyn AuthService>) -> (User, AuthToken) {
        let register_request = CreateUserRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        };

        let user = auth_service.register(register_request).await.unwrap();

        let login_request = LoginRequest {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        };

        let token = auth_service.login(login_request).await.unwrap();

        (user, token)
    }

    #[tokio::test]
    async fn test_middleware_with_valid_token() {
        let repo = Arc::new(MockUserRepository::new());
        let auth_service: Arc<dyn AuthService> =
            Arc::new(AuthServiceImpl::new(repo, "test_secret".to_string()));

        let (user, token) = create_test_user_and_token(&auth_service).await;

        let app = create_test_app(auth_service);

        let request = Request::builder()
            .uri("/protected")
            .header("Authorization", format!("Bearer {}", token.token))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body_json["user_id"], user.id.to_string());
        assert_eq!(body_json["message"], "Access granted");
    }

    #[tokio::test]
    async fn test_middleware_without_token() {
        let repo = Arc::new(MockUserRepository::new());
        let auth_service: Arc<dyn AuthService> =
            Arc::new(AuthServiceImpl::new(repo, "test_secret".to_string()));

        let app = create_test_app(auth_service);

        let request = Request::builder()
            .uri("/protected")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(
            body_json["error"]
                .as_str()
                .unwrap()
                .contains("Missing authorization token")
        );
    }

    #[tokio::test]
    async fn test_middleware_with_invalid_token() {
        let repo = Arc::new(MockUserRepository::new());
        let auth_service: Arc<dyn AuthService> =
            Arc::new(AuthServiceImpl::new(repo, "test_secret".to_string()));

        let app = create_test_app(auth_service);

        let request = Request::builder()
            .uri("/protected")
            .header("Authorization", "Bearer invalid_token_here")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(
            body_json["error"]
                .as_str()
                .unwrap()
                .contains("Invalid or malformed token")
        );
    }

    #[tokio::test]
    async fn test_middleware_with_malformed_header() {
        let repo = Arc::new(MockUserRepository::new());
        let auth_service: Arc<dyn AuthService> =
            Arc::new(AuthServiceImpl::new(repo, "test_secret".to_string()));

        let app = create_test_app(auth_service);

        // Without the "Bearer " prefix
        let request = Request::builder()
            .uri("/protected")
            .header("Authorization", "some_token")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(
            body_json["error"]
                .as_str()
                .unwrap()
                .contains("Invalid authorization header format")
        );
    }
}
