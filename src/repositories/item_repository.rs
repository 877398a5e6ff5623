use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::item::InventoryItem;
use crate::repositories::RepositoryError;

/// Trait defining inventory item repository operations, household-scoped
/// like all inventory data access.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Create a new item
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, RepositoryError>;

    /// Find all items of a household, optionally restricted to one storage
    /// location, ordered by name
    async fn find_by_household(
        &self,
        household_id: Uuid,
        storage_location_id: Option<Uuid>,
    ) -> Result<Vec<InventoryItem>, RepositoryError>;

    /// Find an item by ID within a household
    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<InventoryItem>, RepositoryError>;

    /// Replace an item's attributes
    async fn update(&self, item: InventoryItem) -> Result<InventoryItem, RepositoryError>;

    /// Delete an item within a household
    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
}

/// PostgreSQL implementation of ItemRepository
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ITEM_COLUMNS: &str = "id, household_id, name, quantity, content_amount, \
                            expiry_date, category_id, storage_location_id, \
                            created_at, updated_at";

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, RepositoryError> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"
            INSERT INTO inventory_items
                (id, household_id, name, quantity, content_amount,
                 expiry_date, category_id, storage_location_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(item.household_id)
        .bind(item.name)
        .bind(item.quantity)
        .bind(item.content_amount)
        .bind(item.expiry_date)
        .bind(item.category_id)
        .bind(item.storage_location_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn find_by_household(
        &self,
        household_id: Uuid,
        storage_location_id: Option<Uuid>,
    ) -> Result<Vec<InventoryItem>, RepositoryError> {
        // $2 IS NULL disables the storage filter rather than matching NULLs
        let items = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"
            SELECT {ITEM_COLUMNS}
            FROM inventory_items
            WHERE household_id = $1
              AND ($2::uuid IS NULL OR storage_location_id = $2)
            ORDER BY name ASC
            "#
        ))
        .bind(household_id)
        .bind(storage_location_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<InventoryItem>, RepositoryError> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"
            SELECT {ITEM_COLUMNS}
            FROM inventory_items
            WHERE household_id = $1 AND id = $2
            "#
        ))
        .bind(household_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn update(&self, item: InventoryItem) -> Result<InventoryItem, RepositoryError> {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"
            UPDATE inventory_items
            SET name = $3, quantity = $4, content_amount = $5, expiry_date = $6,
                category_id = $7, storage_location_id = $8, updated_at = now()
            WHERE household_id = $1 AND id = $2
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(item.household_id)
        .bind(item.id)
        .bind(item.name)
        .bind(item.quantity)
        .bind(item.content_amount)
        .bind(item.expiry_date)
        .bind(item.category_id)
        .bind(item.storage_location_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM inventory_items
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
