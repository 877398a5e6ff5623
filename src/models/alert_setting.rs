use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Threshold applied when a household has not configured one yet
pub const DEFAULT_QUANTITY_THRESHOLD: i32 = 1;

/// Expiry warning window applied when a household has not configured one yet
pub const DEFAULT_EXPIRY_DAYS: i32 = 30;

/// Alert threshold configuration, exactly one row per household.
/// Created with the defaults above the first time it is read.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct AlertSetting {
    pub household_id: Uuid,
    /// Items with quantity at or below this are flagged as low stock
    pub quantity_threshold: i32,
    /// Items expiring within this many days are flagged as expiring soon
    pub expiry_days: i32,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for updating a household's alert thresholds
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({ "quantity_threshold": 2, "expiry_days": 14 }))]
pub struct AlertSettingRequest {
    #[validate(range(min = 0, message = "Quantity threshold must not be negative"))]
    #[schema(minimum = 0, example = 2)]
    pub quantity_threshold: i32,

    #[validate(range(min = 0, message = "Expiry days must not be negative"))]
    #[schema(minimum = 0, example = 14)]
    pub expiry_days: i32,
}
