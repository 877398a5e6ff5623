use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::alerts::AlertStatus;
use crate::validation::validate_positive_amount;

/// Inventory item entity: one stocked product in a household
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: Uuid,
    pub household_id: Uuid,
    pub name: String,
    /// Number of pieces on hand, never negative
    pub quantity: i32,
    /// Units per piece in the category's goal unit; multiplies quantity
    /// to yield the current amount
    pub content_amount: f64,
    pub expiry_date: Option<NaiveDate>,
    pub category_id: Option<Uuid>,
    pub storage_location_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating or replacing an inventory item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "oat milk",
    "quantity": 4,
    "content_amount": 1.0,
    "expiry_date": "2024-07-01",
    "category_id": "550e8400-e29b-41d4-a716-446655440000",
    "storage_location_id": null
}))]
pub struct ItemRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    #[schema(minimum = 0, example = 4)]
    pub quantity: i32,

    #[validate(custom(function = "validate_positive_amount"))]
    #[schema(minimum = 0.01, example = 1.0)]
    pub content_amount: f64,

    #[schema(format = "date", example = "2024-07-01")]
    pub expiry_date: Option<NaiveDate>,

    pub category_id: Option<Uuid>,

    pub storage_location_id: Option<Uuid>,
}

/// An inventory item decorated with its alert classification for listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemWithAlert {
    pub item: InventoryItem,
    pub alert: AlertStatus,
}
