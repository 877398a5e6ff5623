use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::storage_location::StorageLocation;
use crate::repositories::RepositoryError;

/// Trait defining storage location repository operations, household-scoped
/// like all inventory data access.
#[async_trait]
pub trait StorageLocationRepository: Send + Sync {
    /// Create a new storage location
    async fn create(
        &self,
        location: StorageLocation,
    ) -> Result<StorageLocation, RepositoryError>;

    /// Find all storage locations of a household, ordered by name
    async fn find_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<StorageLocation>, RepositoryError>;

    /// Find a storage location by ID within a household
    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<StorageLocation>, RepositoryError>;

    /// Replace a storage location's attributes
    async fn update(
        &self,
        location: StorageLocation,
    ) -> Result<StorageLocation, RepositoryError>;

    /// Delete a storage location within a household
    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
}

/// PostgreSQL implementation of StorageLocationRepository
pub struct PostgresStorageLocationRepository {
    pool: PgPool,
}

impl PostgresStorageLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageLocationRepository for PostgresStorageLocationRepository {
    async fn create(
        &self,
        location: StorageLocation,
    ) -> Result<StorageLocation, RepositoryError> {
        let location = sqlx::query_as::<_, StorageLocation>(
            r#"
            INSERT INTO storage_locations (id, household_id, name)
            VALUES ($1, $2, $3)
            RETURNING id, household_id, name, created_at
            "#,
        )
        .bind(location.id)
        .bind(location.household_id)
        .bind(location.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    async fn find_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<StorageLocation>, RepositoryError> {
        let locations = sqlx::query_as::<_, StorageLocation>(
            r#"
            SELECT id, household_id, name, created_at
            FROM storage_locations
            WHERE household_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(household_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<StorageLocation>, RepositoryError> {
        let location = sqlx::query_as::<_, StorageLocation>(
            r#"
            SELECT id, household_id, name, created_at
            FROM storage_locations
            WHERE household_id = $1 AND id = $2
            "#,
        )
        .bind(household_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    async fn update(
        &self,
        location: StorageLocation,
    ) -> Result<StorageLocation, RepositoryError> {
        let location = sqlx::query_as::<_, StorageLocation>(
            r#"
            UPDATE storage_locations
            SET name = $3
            WHERE household_id = $1 AND id = $2
            RETURNING id, household_id, name, created_at
            "#,
        )
        .bind(location.household_id)
        .bind(location.id)
        .bind(location.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM storage_locations
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
