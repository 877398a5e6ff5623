use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::validate_hex_color;

/// Unit a category's goal amount is expressed in
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GoalUnit {
    /// Volume in liters
    Liters,
    /// Plain piece count
    Pieces,
}

/// Category entity grouping inventory items, with a per-category stock goal
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub household_id: Uuid,
    /// Unique within the household
    pub name: String,
    /// Display color in #rrggbb form, irrelevant to any computation
    pub color: String,
    /// Target stocked amount in `goal_unit`; 0 means no goal
    pub goal_amount: f64,
    pub goal_unit: GoalUnit,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating or replacing a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "drinks",
    "color": "#3388ff",
    "goal_amount": 12.0,
    "goal_unit": "liters"
}))]
pub struct CategoryRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,

    #[validate(range(min = 0.0, message = "Goal amount must not be negative"))]
    #[schema(minimum = 0.0, example = 12.0)]
    pub goal_amount: f64,

    pub goal_unit: GoalUnit,
}
