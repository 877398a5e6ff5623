use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::alerts::evaluate_alert;
use crate::models::item::{InventoryItem, ItemRequest, ItemWithAlert};
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::item_repository::ItemRepository;
use crate::repositories::storage_location_repository::StorageLocationRepository;
use crate::repositories::RepositoryError;
use crate::services::alert_setting_service::{AlertSettingError, AlertSettingService};

/// Item service errors
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("Item not found")]
    ItemNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Storage location not found")]
    StorageLocationNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for ItemError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => ItemError::ItemNotFound,
            other => ItemError::DatabaseError(other.to_string()),
        }
    }
}

impl From<AlertSettingError> for ItemError {
    fn from(e: AlertSettingError) -> Self {
        match e {
            AlertSettingError::DatabaseError(msg) => ItemError::DatabaseError(msg),
        }
    }
}

/// Trait defining inventory item operations. Every method is scoped to the
/// caller's household; ids from other households behave as if they do not
/// exist.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// List the household's items decorated with their alert tier.
    /// `today` comes from the caller so listings are reproducible.
    async fn list_with_alerts(
        &self,
        household_id: Uuid,
        storage_location_id: Option<Uuid>,
        today: NaiveDate,
    ) -> Result<Vec<ItemWithAlert>, ItemError>;

    /// Create a new item
    async fn create_item(
        &self,
        household_id: Uuid,
        request: ItemRequest,
    ) -> Result<InventoryItem, ItemError>;

    /// Get one item
    async fn get_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
    ) -> Result<InventoryItem, ItemError>;

    /// Replace an item's attributes
    async fn update_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
        request: ItemRequest,
    ) -> Result<InventoryItem, ItemError>;

    /// Delete an item
    async fn delete_item(&self, household_id: Uuid, item_id: Uuid) -> Result<(), ItemError>;

    /// Create a copy of an existing item (same attributes, fresh id)
    async fn duplicate_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
    ) -> Result<InventoryItem, ItemError>;
}

/// Implementation of ItemService
pub struct ItemServiceImpl {
    item_repository: Arc<dyn ItemRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    storage_location_repository: Arc<dyn StorageLocationRepository>,
    alert_setting_service: Arc<dyn AlertSettingService>,
}

impl ItemServiceImpl {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        storage_location_repository: Arc<dyn StorageLocationRepository>,
        alert_setting_service: Arc<dyn AlertSettingService>,
    ) -> Self {
        Self {
            item_repository,
            category_repository,
            storage_location_repository,
            alert_setting_service,
        }
    }

    /// Reject references to categories or storage locations the household
    /// does not own
    async fn check_references(
        &self,
        household_id: Uuid,
        request: &ItemRequest,
    ) -> Result<(), ItemError> {
        if let Some(category_id) = request.category_id {
            self.category_repository
                .find_by_id(household_id, category_id)
                .await
                .map_err(|e| ItemError::DatabaseError(e.to_string()))?
                .ok_or(ItemError::CategoryNotFound)?;
        }
        if let Some(storage_location_id) = request.storage_location_id {
            self.storage_location_repository
                .find_by_id(household_id, storage_location_id)
                .await
                .map_err(|e| ItemError::DatabaseError(e.to_string()))?
                .ok_or(ItemError::StorageLocationNotFound)?;
        }
        Ok(())
    }
}

#[async_trait]
impl ItemService for ItemServiceImpl {
    async fn list_with_alerts(
        &self,
        household_id: Uuid,
        storage_location_id: Option<Uuid>,
        today: NaiveDate,
    ) -> Result<Vec<ItemWithAlert>, ItemError> {
        let setting = self.alert_setting_service.get_or_create(household_id).await?;
        let items = self
            .item_repository
            .find_by_household(household_id, storage_location_id)
            .await?;

        Ok(items
            .into_iter()
            .map(|item| {
                let alert = evaluate_alert(
                    item.quantity,
                    item.expiry_date,
                    today,
                    Some(setting.quantity_threshold),
                    Some(setting.expiry_days),
                );
                ItemWithAlert { item, alert }
            })
            .collect())
    }

    async fn create_item(
        &self,
        household_id: Uuid,
        request: ItemRequest,
    ) -> Result<InventoryItem, ItemError> {
        self.check_references(household_id, &request).await?;

        let item = InventoryItem {
            id: Uuid::new_v4(),
            household_id,
            name: request.name,
            quantity: request.quantity,
            content_amount: request.content_amount,
            expiry_date: request.expiry_date,
            category_id: request.category_id,
            storage_location_id: request.storage_location_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        Ok(self.item_repository.create(item).await?)
    }

    async fn get_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
    ) -> Result<InventoryItem, ItemError> {
        self.item_repository
            .find_by_id(household_id, item_id)
            .await?
            .ok_or(ItemError::ItemNotFound)
    }

    async fn update_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
        request: ItemRequest,
    ) -> Result<InventoryItem, ItemError> {
        let existing = self.get_item(household_id, item_id).await?;
        self.check_references(household_id, &request).await?;

        let updated = InventoryItem {
            id: existing.id,
            household_id,
            name: request.name,
            quantity: request.quantity,
            content_amount: request.content_amount,
            expiry_date: request.expiry_date,
            category_id: request.category_id,
            storage_location_id: request.storage_location_id,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        Ok(self.item_repository.update(updated).await?)
    }

    async fn delete_item(&self, household_id: Uuid, item_id: Uuid) -> Result<(), ItemError> {
        Ok(self.item_repository.delete(household_id, item_id).await?)
    }

    async fn duplicate_item(
        &self,
        household_id: Uuid,
        item_id: Uuid,
    ) -> Result<InventoryItem, ItemError> {
        let existing = self.get_item(household_id, item_id).await?;

        let copy = InventoryItem {
            id: Uuid::new_v4(),
            name: format!("{} (copy)", existing.name),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            ..existing
        };

        Ok(self.item_repository.create(copy).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::{Category, GoalUnit};
    use crate::services::alert_setting_service::AlertSettingServiceImpl;
    use crate::test_support::{
        MockAlertSettingRepository, MockCategoryRepository, MockItemRepository,
        MockStorageLocationRepository,
    };

    struct Fixture {
        service: ItemServiceImpl,
        item_repo: Arc<MockItemRepository>,
        category_repo: Arc<MockCategoryRepository>,
        household_id: Uuid,
    }

    fn fixture() -> Fixture {
        let item_repo = Arc::new(MockItemRepository::new());
        let category_repo = Arc::new(MockCategoryRepository::new());
        let service = ItemServiceImpl::new(
            item_repo.clone(),
            category_repo.clone(),
            Arc::new(MockStorageLocationRepository::new()),
            Arc::new(AlertSettingServiceImpl::new(Arc::new(
                MockAlertSettingRepository::new(),
            ))),
        );
        Fixture {
            service,
            item_repo,
            category_repo,
            household_id: Uuid::new_v4(),
        }
    }

    fn request(name: &str, quantity: i32, expiry_date: Option<NaiveDate>) -> ItemRequest {
        ItemRequest {
            name: name.to_string(),
            quantity,
            content_amount: 1.0,
            expiry_date,
            category_id: None,
            storage_location_id: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let f = fixture();

        let created = f
            .service
            .create_item(f.household_id, request("rice", 2, None))
            .await
            .unwrap();

        let fetched = f.service.get_item(f.household_id, created.id).await.unwrap();
        assert_eq!(fetched.name, "rice");
        assert_eq!(fetched.quantity, 2);
        assert_eq!(fetched.content_amount, 1.0);
    }

    #[tokio::test]
    async fn test_get_is_household_scoped() {
        let f = fixture();

        let created = f
            .service
            .create_item(f.household_id, request("rice", 2, None))
            .await
            .unwrap();

        let result = f.service.get_item(Uuid::new_v4(), created.id).await;
        assert!(matches!(result.unwrap_err(), ItemError::ItemNotFound));
    }

    #[tokio::test]
    async fn test_create_with_unknown_category() {
        let f = fixture();

        let mut req = request("rice", 2, None);
        req.category_id = Some(Uuid::new_v4());

        let result = f.service.create_item(f.household_id, req).await;
        assert!(matches!(result.unwrap_err(), ItemError::CategoryNotFound));
    }

    #[tokio::test]
    async fn test_create_with_foreign_category() {
        let f = fixture();

        // Category exists but belongs to a different household
        let foreign = Category {
            id: Uuid::new_v4(),
            household_id: Uuid::new_v4(),
            name: "drinks".to_string(),
            color: "#3388ff".to_string(),
            goal_amount: 0.0,
            goal_unit: GoalUnit::Pieces,
            created_at: Utc::now(),
        };
        f.category_repo.create(foreign.clone()).await.unwrap();

        let mut req = request("oat milk", 1, None);
        req.category_id = Some(foreign.id);

        let result = f.service.create_item(f.household_id, req).await;
        assert!(matches!(result.unwrap_err(), ItemError::CategoryNotFound));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let f = fixture();

        let created = f
            .service
            .create_item(f.household_id, request("rice", 2, None))
            .await
            .unwrap();

        let updated = f
            .service
            .update_item(
                f.household_id,
                created.id,
                request("brown rice", 5, Some(date(2025, 1, 1))),
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "brown rice");
        assert_eq!(updated.quantity, 5);
        assert_eq!(updated.expiry_date, Some(date(2025, 1, 1)));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_delete() {
        let f = fixture();

        let created = f
            .service
            .create_item(f.household_id, request("rice", 2, None))
            .await
            .unwrap();

        f.service
            .delete_item(f.household_id, created.id)
            .await
            .unwrap();

        let result = f.service.get_item(f.household_id, created.id).await;
        assert!(matches!(result.unwrap_err(), ItemError::ItemNotFound));
    }

    #[tokio::test]
    async fn test_duplicate_copies_attributes() {
        let f = fixture();

        let created = f
            .service
            .create_item(f.household_id, request("rice", 2, Some(date(2025, 3, 1))))
            .await
            .unwrap();

        let copy = f
            .service
            .duplicate_item(f.household_id, created.id)
            .await
            .unwrap();

        assert_ne!(copy.id, created.id);
        assert_eq!(copy.name, "rice (copy)");
        assert_eq!(copy.quantity, created.quantity);
        assert_eq!(copy.expiry_date, created.expiry_date);
    }

    #[tokio::test]
    async fn test_list_with_alerts_uses_default_thresholds() {
        let f = fixture();
        let today = date(2024, 6, 1);

        // quantity 0 and expired yesterday: red
        f.service
            .create_item(f.household_id, request("old milk", 0, Some(date(2024, 5, 31))))
            .await
            .unwrap();
        // quantity 1 hits the default threshold of 1: blue
        f.service
            .create_item(f.household_id, request("rice", 1, None))
            .await
            .unwrap();
        // well stocked, no expiry: no alert
        f.service
            .create_item(f.household_id, request("salt", 10, None))
            .await
            .unwrap();

        let listed = f
            .service
            .list_with_alerts(f.household_id, None, today)
            .await
            .unwrap();

        assert_eq!(listed.len(), 3);
        let by_name = |name: &str| {
            listed
                .iter()
                .find(|entry| entry.item.name == name)
                .unwrap()
        };

        assert!(by_name("old milk").alert.is_red);
        assert!(!by_name("old milk").alert.is_blue);
        assert_eq!(by_name("old milk").alert.days_left, Some(-1));

        assert!(by_name("rice").alert.is_blue);
        assert!(!by_name("rice").alert.is_red);

        assert!(!by_name("salt").alert.is_red);
        assert!(!by_name("salt").alert.is_blue);
    }

    #[tokio::test]
    async fn test_list_filters_by_storage_location() {
        let f = fixture();
        let pantry = Uuid::new_v4();
        let today = date(2024, 6, 1);

        // Seed the repo directly; reference checks are not under test here
        f.item_repo
            .create(InventoryItem {
                id: Uuid::new_v4(),
                household_id: f.household_id,
                name: "rice".to_string(),
                quantity: 5,
                content_amount: 1.0,
                expiry_date: None,
                category_id: None,
                storage_location_id: Some(pantry),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .await
            .unwrap();
        f.service
            .create_item(f.household_id, request("salt", 5, None))
            .await
            .unwrap();

        let listed = f
            .service
            .list_with_alerts(f.household_id, Some(pantry), today)
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].item.name, "rice");
    }
}
