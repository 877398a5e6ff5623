use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{CreateUserRequest, User};
use crate::repositories::RepositoryError;

/// Trait defining user repository operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user (without a household)
    async fn create(
        &self,
        user: CreateUserRequest,
        password_hash: String,
    ) -> Result<User, RepositoryError>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Attach a user to a household
    async fn set_household(
        &self,
        user_id: Uuid,
        household_id: Uuid,
    ) -> Result<User, RepositoryError>;
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(
        &self,
        user: CreateUserRequest,
        password_hash: String,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, household_id, created_at
            "#,
        )
        .bind(user.name)
        .bind(user.email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, household_id, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, household_id, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn set_household(
        &self,
        user_id: Uuid,
        household_id: Uuid,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET household_id = $2
            WHERE id = $1
            RETURNING id, name, email, password_hash, household_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(household_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
