use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::middleware::auth_middleware::AuthenticatedUser;
use crate::repositories::user_repository::UserRepository;

/// Extension type carrying the caller's household membership.
///
/// Handlers behind this middleware can rely on the household existing and
/// the authenticated user belonging to it; all repository queries are then
/// scoped by this id.
#[derive(Clone, Debug)]
pub struct HouseholdContext {
    pub household_id: Uuid,
}

/// Middleware that resolves the authenticated user's household and adds it
/// to request extensions. Requests from users without a household are
/// rejected before any handler runs.
pub async fn household_middleware(
    State(user_repository): State<Arc<dyn UserRepository>>,
    mut request: Request,
    next: Next,
) -> Result<Response, HouseholdGuardError> {
    let authenticated = request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or(HouseholdGuardError::Unauthenticated)?;

    let user = user_repository
        .find_by_id(authenticated.user_id)
        .await
        .map_err(|e| HouseholdGuardError::DatabaseError(e.to_string()))?
        .ok_or(HouseholdGuardError::Unauthenticated)?;

    let household_id = user.household_id.ok_or(HouseholdGuardError::NoHousehold)?;

    request
        .extensions_mut()
        .insert(HouseholdContext { household_id });

    Ok(next.run(request).await)
}

/// Household guard errors
#[derive(Debug)]
pub enum HouseholdGuardError {
    Unauthenticated,
    NoHousehold,
    DatabaseError(String),
}

impl IntoResponse for HouseholdGuardError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            HouseholdGuardError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Authentication required".to_string(),
            ),
            HouseholdGuardError::NoHousehold => (
                StatusCode::FORBIDDEN,
                "no_household",
                "You must create or join a household first".to_string(),
            ),
            HouseholdGuardError::DatabaseError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        };

        let body = Json(json!({
            "error": error,
            "message": message,
        }));

        (status, body).into_response()
    }
}
