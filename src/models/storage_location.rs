use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Storage location entity (pantry, fridge, cellar, ...)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct StorageLocation {
    pub id: Uuid,
    pub household_id: Uuid,
    /// Unique within the household
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating or replacing a storage location
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({ "name": "pantry" }))]
pub struct StorageLocationRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}
