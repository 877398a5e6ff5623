use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::category::Category;
use crate::repositories::RepositoryError;

/// Trait defining category repository operations.
/// Every query is scoped to a household; no method can reach another
/// household's rows.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Create a new category
    async fn create(&self, category: Category) -> Result<Category, RepositoryError>;

    /// Find all categories of a household, ordered by name
    async fn find_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<Category>, RepositoryError>;

    /// Find a category by ID within a household
    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Category>, RepositoryError>;

    /// Find a category by name within a household
    async fn find_by_name(
        &self,
        household_id: Uuid,
        name: &str,
    ) -> Result<Option<Category>, RepositoryError>;

    /// Replace a category's attributes
    async fn update(&self, category: Category) -> Result<Category, RepositoryError>;

    /// Delete a category within a household
    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
}

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, household_id, name, color, goal_amount, goal_unit)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, household_id, name, color, goal_amount, goal_unit, created_at
            "#,
        )
        .bind(category.id)
        .bind(category.household_id)
        .bind(category.name)
        .bind(category.color)
        .bind(category.goal_amount)
        .bind(category.goal_unit)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, household_id, name, color, goal_amount, goal_unit, created_at
            FROM categories
            WHERE household_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(household_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, household_id, name, color, goal_amount, goal_unit, created_at
            FROM categories
            WHERE household_id = $1 AND id = $2
            "#,
        )
        .bind(household_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_by_name(
        &self,
        household_id: Uuid,
        name: &str,
    ) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, household_id, name, color, goal_amount, goal_unit, created_at
            FROM categories
            WHERE household_id = $1 AND name = $2
            "#,
        )
        .bind(household_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $3, color = $4, goal_amount = $5, goal_unit = $6
            WHERE household_id = $1 AND id = $2
            RETURNING id, household_id, name, color, goal_amount, goal_unit, created_at
            "#,
        )
        .bind(category.household_id)
        .bind(category.id)
        .bind(category.name)
        .bind(category.color)
        .bind(category.goal_amount)
        .bind(category.goal_unit)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
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
