use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::memo::Memo;
use crate::repositories::RepositoryError;

/// Trait defining memo repository operations, household-scoped
#[async_trait]
pub trait MemoRepository: Send + Sync {
    /// Create a new memo
    async fn create(&self, memo: Memo) -> Result<Memo, RepositoryError>;

    /// Find all memos of a household, newest first
    async fn find_by_household(&self, household_id: Uuid) -> Result<Vec<Memo>, RepositoryError>;

    /// Find a memo by ID within a household
    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Memo>, RepositoryError>;

    /// Replace a memo's body
    async fn update(&self, memo: Memo) -> Result<Memo, RepositoryError>;

    /// Delete a memo within a household
    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
}

/// PostgreSQL implementation of MemoRepository
pub struct PostgresMemoRepository {
    pool: PgPool,
}

impl PostgresMemoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemoRepository for PostgresMemoRepository {
    async fn create(&self, memo: Memo) -> Result<Memo, RepositoryError> {
        let memo = sqlx::query_as::<_, Memo>(
            r#"
            INSERT INTO memos (id, household_id, body)
            VALUES ($1, $2, $3)
            RETURNING id, household_id, body, created_at, updated_at
            "#,
        )
        .bind(memo.id)
        .bind(memo.household_id)
        .bind(memo.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(memo)
    }

    async fn find_by_household(&self, household_id: Uuid) -> Result<Vec<Memo>, RepositoryError> {
        let memos = sqlx::query_as::<_, Memo>(
            r#"
            SELECT id, household_id, body, created_at, updated_at
            FROM memos
            WHERE household_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(household_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(memos)
    }

    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Memo>, RepositoryError> {
        let memo = sqlx::query_as::<_, Memo>(
            r#"
            SELECT id, household_id, body, created_at, updated_at
            FROM memos
            WHERE household_id = $1 AND id = $2
            "#,
        )
        .bind(household_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(memo)
    }

    async fn update(&self, memo: Memo) -> Result<Memo, RepositoryError> {
        let memo = sqlx::query_as::<_, Memo>(
            r#"
            UPDATE memos
            SET body = $3, updated_at = now()
            WHERE household_id = $1 AND id = $2
            RETURNING id, household_id, body, created_at, updated_at
            "#,
        )
        .bind(memo.household_id)
        .bind(memo.id)
        .bind(memo.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(memo)
    }

    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM memos
            WHERE household_id = $1 AND id = $2
            "#,
        )
        .bind(household_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
