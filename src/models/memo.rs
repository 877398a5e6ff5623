use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Memo entity: a free-form shared note within a household
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Memo {
    pub id: Uuid,
    pub household_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating or replacing a memo
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({ "body": "buy more rice on Saturday" }))]
pub struct MemoRequest {
    #[validate(length(min = 1, max = 2000, message = "Body must not be empty"))]
    pub body: String,
}
