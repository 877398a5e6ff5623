use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Household entity: the sharing boundary for all inventory data.
/// Items, categories, storage locations, memos and alert settings all
/// belong to exactly one household.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Household {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a household
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({ "name": "Tanaka family" }))]
pub struct CreateHouseholdRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

/// Request payload for joining an existing household
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "household_id": "550e8400-e29b-41d4-a716-446655440000" }))]
pub struct JoinHouseholdRequest {
    pub household_id: Uuid,
}
