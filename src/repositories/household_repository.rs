use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::household::Household;
use crate::repositories::RepositoryError;

/// Trait defining household repository operations
#[async_trait]
pub trait HouseholdRepository: Send + Sync {
    /// Create a new household
    async fn create(&self, name: String) -> Result<Household, RepositoryError>;

    /// Find a household by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Household>, RepositoryError>;
}

/// PostgreSQL implementation of HouseholdRepository
pub struct PostgresHouseholdRepository {
    pool: PgPool,
}

impl PostgresHouseholdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HouseholdRepository for PostgresHouseholdRepository {
    async fn create(&self, name: String) -> Result<Household, RepositoryError> {
        let household = sqlx::query_as::<_, Household>(
            r#"
            INSERT INTO households (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(household)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Household>, RepositoryError> {
        let household = sqlx::query_as::<_, Household>(
            r#"
            SELECT id, name, created_at
            FROM households
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(household)
    }
}
