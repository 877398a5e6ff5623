use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::memo::{Memo, MemoRequest};
use crate::repositories::memo_repository::MemoRepository;
use crate::repositories::RepositoryError;

/// Memo service errors
#[derive(Debug, thiserror::Error)]
pub enum MemoError {
    #[error("Memo not found")]
    MemoNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for MemoError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => MemoError::MemoNotFound,
            other => MemoError::DatabaseError(other.to_string()),
        }
    }
}

/// Trait defining memo operations, scoped to the caller's household
#[async_trait]
pub trait MemoService: Send + Sync {
    /// List the household's memos, newest first
    async fn list_memos(&self, household_id: Uuid) -> Result<Vec<Memo>, MemoError>;

    /// Create a new memo
    async fn create_memo(
        &self,
        household_id: Uuid,
        request: MemoRequest,
    ) -> Result<Memo, MemoError>;

    /// Replace a memo's body
    async fn update_memo(
        &self,
        household_id: Uuid,
        memo_id: Uuid,
        request: MemoRequest,
    ) -> Result<Memo, MemoError>;

    /// Delete a memo
    async fn delete_memo(&self, household_id: Uuid, memo_id: Uuid) -> Result<(), MemoError>;
}

/// Implementation of MemoService
pub struct MemoServiceImpl {
    memo_repository: Arc<dyn MemoRepository>,
}

impl MemoServiceImpl {
    pub fn new(memo_repository: Arc<dyn MemoRepository>) -> Self {
        Self { memo_repository }
    }
}

#[async_trait]
impl MemoService for MemoServiceImpl {
    async fn list_memos(&self, household_id: Uuid) -> Result<Vec<Memo>, MemoError> {
        Ok(self.memo_repository.find_by_household(household_id).await?)
    }

    async fn create_memo(
        &self,
        household_id: Uuid,
        request: MemoRequest,
    ) -> Result<Memo, MemoError> {
        let memo = Memo {
            id: Uuid::new_v4(),
            household_id,
            body: request.body,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        Ok(self.memo_repository.create(memo).await?)
    }

    async fn update_memo(
        &self,
        household_id: Uuid,
        memo_id: Uuid,
        request: MemoRequest,
    ) -> Result<Memo, MemoError> {
        let existing = self
            .memo_repository
            .find_by_id(household_id, memo_id)
            .await?
            .ok_or(MemoError::MemoNotFound)?;

        let updated = Memo {
            id: existing.id,
            household_id,
            body: request.body,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        Ok(self.memo_repository.update(updated).await?)
    }

    async fn delete_memo(&self, household_id: Uuid, memo_id: Uuid) -> Result<(), MemoError> {
        Ok(self.memo_repository.delete(household_id, memo_id).await?)
    }
}
