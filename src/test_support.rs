//! In-memory repository implementations backing unit and integration tests.
//! They mirror the Postgres repositories' contracts: household scoping on
//! every query, unique-constraint violations reported as
//! [`RepositoryError::ConstraintViolation`].

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::alert_setting::AlertSetting;
use crate::models::category::Category;
use crate::models::household::Household;
use crate::models::item::InventoryItem;
use crate::models::memo::Memo;
use crate::models::storage_location::StorageLocation;
use crate::models::user::{CreateUserRequest, User};
use crate::repositories::alert_setting_repository::AlertSettingRepository;
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::household_repository::HouseholdRepository;
use crate::repositories::item_repository::ItemRepository;
use crate::repositories::memo_repository::MemoRepository;
use crate::repositories::storage_location_repository::StorageLocationRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;

#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(
        &self,
        user: CreateUserRequest,
        password_hash: String,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::ConstraintViolation(
                "Email already exists".to_string(),
            ));
        }

        let new_user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash,
            household_id: None,
            created_at: Utc::now(),
        };

        users.insert(new_user.id, new_user.clone());
        Ok(new_user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id).cloned())
    }

    async fn set_household(
        &self,
        user_id: Uuid,
        household_id: Uuid,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&user_id).ok_or(RepositoryError::NotFound)?;
        user.household_id = Some(household_id);
        Ok(user.clone())
    }
}

#[derive(Default)]
pub struct MockHouseholdRepository {
    households: Mutex<HashMap<Uuid, Household>>,
}

impl MockHouseholdRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HouseholdRepository for MockHouseholdRepository {
    async fn create(&self, name: String) -> Result<Household, RepositoryError> {
        let household = Household {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        };
        self.households
            .lock()
            .unwrap()
            .insert(household.id, household.clone());
        Ok(household)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Household>, RepositoryError> {
        Ok(self.households.lock().unwrap().get(&id).cloned())
    }
}

#[derive(Default)]
pub struct MockCategoryRepository {
    categories: Mutex<HashMap<Uuid, Category>>,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, RepositoryError> {
        let mut categories = self.categories.lock().unwrap();

        if categories
            .values()
            .any(|c| c.household_id == category.household_id && c.name == category.name)
        {
            return Err(RepositoryError::ConstraintViolation(
                "Category name already exists in household".to_string(),
            ));
        }

        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn find_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<Category>, RepositoryError> {
        let categories = self.categories.lock().unwrap();
        let mut result: Vec<Category> = categories
            .values()
            .filter(|c| c.household_id == household_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Category>, RepositoryError> {
        let categories = self.categories.lock().unwrap();
        Ok(categories
            .get(&id)
            .filter(|c| c.household_id == household_id)
            .cloned())
    }

    async fn find_by_name(
        &self,
        household_id: Uuid,
        name: &str,
    ) -> Result<Option<Category>, RepositoryError> {
        let categories = self.categories.lock().unwrap();
        Ok(categories
            .values()
            .find(|c| c.household_id == household_id && c.name == name)
            .cloned())
    }

    async fn update(&self, category: Category) -> Result<Category, RepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        match categories.get(&category.id) {
            Some(existing) if existing.household_id == category.household_id => {
                categories.insert(category.id, category.clone());
                Ok(category)
            }
            _ => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let mut categories = self.categories.lock().unwrap();
        match categories.get(&id) {
            Some(existing) if existing.household_id == household_id => {
                categories.remove(&id);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound),
        }
    }
}

#[derive(Default)]
pub struct MockStorageLocationRepository {
    locations: Mutex<HashMap<Uuid, StorageLocation>>,
}

impl MockStorageLocationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageLocationRepository for MockStorageLocationRepository {
    async fn create(
        &self,
        location: StorageLocation,
    ) -> Result<StorageLocation, RepositoryError> {
        let mut locations = self.locations.lock().unwrap();

        if locations
            .values()
            .any(|l| l.household_id == location.household_id && l.name == location.name)
        {
            return Err(RepositoryError::ConstraintViolation(
                "Storage location name already exists in household".to_string(),
            ));
        }

        locations.insert(location.id, location.clone());
        Ok(location)
    }

    async fn find_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<StorageLocation>, RepositoryError> {
        let locations = self.locations.lock().unwrap();
        let mut result: Vec<StorageLocation> = locations
            .values()
            .filter(|l| l.household_id == household_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<StorageLocation>, RepositoryError> {
        let locations = self.locations.lock().unwrap();
        Ok(locations
            .get(&id)
            .filter(|l| l.household_id == household_id)
            .cloned())
    }

    async fn update(
        &self,
        location: StorageLocation,
    ) -> Result<StorageLocation, RepositoryError> {
        let mut locations = self.locations.lock().unwrap();
        match locations.get(&location.id) {
            Some(existing) if existing.household_id == location.household_id => {
                locations.insert(location.id, location.clone());
                Ok(location)
            }
            _ => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let mut locations = self.locations.lock().unwrap();
        match locations.get(&id) {
            Some(existing) if existing.household_id == household_id => {
                locations.remove(&id);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound),
        }
    }
}

#[derive(Default)]
pub struct MockItemRepository {
    items: Mutex<HashMap<Uuid, InventoryItem>>,
}

impl MockItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn create(&self, item: InventoryItem) -> Result<InventoryItem, RepositoryError> {
        self.items.lock().unwrap().insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_household(
        &self,
        household_id: Uuid,
        storage_location_id: Option<Uuid>,
    ) -> Result<Vec<InventoryItem>, RepositoryError> {
        let items = self.items.lock().unwrap();
        let mut result: Vec<InventoryItem> = items
            .values()
            .filter(|i| i.household_id == household_id)
            .filter(|i| {
                storage_location_id.is_none() || i.storage_location_id == storage_location_id
            })
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<InventoryItem>, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .get(&id)
            .filter(|i| i.household_id == household_id)
            .cloned())
    }

    async fn update(&self, item: InventoryItem) -> Result<InventoryItem, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        match items.get(&item.id) {
            Some(existing) if existing.household_id == item.household_id => {
                items.insert(item.id, item.clone());
                Ok(item)
            }
            _ => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let mut items = self.items.lock().unwrap();
        match items.get(&id) {
            Some(existing) if existing.household_id == household_id => {
                items.remove(&id);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound),
        }
    }
}

#[derive(Default)]
pub struct MockMemoRepository {
    memos: Mutex<HashMap<Uuid, Memo>>,
}

impl MockMemoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemoRepository for MockMemoRepository {
    async fn create(&self, memo: Memo) -> Result<Memo, RepositoryError> {
        self.memos.lock().unwrap().insert(memo.id, memo.clone());
        Ok(memo)
    }

    async fn find_by_household(&self, household_id: Uuid) -> Result<Vec<Memo>, RepositoryError> {
        let memos = self.memos.lock().unwrap();
        let mut result: Vec<Memo> = memos
            .values()
            .filter(|m| m.household_id == household_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn find_by_id(
        &self,
        household_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Memo>, RepositoryError> {
        let memos = self.memos.lock().unwrap();
        Ok(memos
            .get(&id)
            .filter(|m| m.household_id == household_id)
            .cloned())
    }

    async fn update(&self, memo: Memo) -> Result<Memo, RepositoryError> {
        let mut memos = self.memos.lock().unwrap();
        match memos.get(&memo.id) {
            Some(existing) if existing.household_id == memo.household_id => {
                memos.insert(memo.id, memo.clone());
                Ok(memo)
            }
            _ => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, household_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let mut memos = self.memos.lock().unwrap();
        match memos.get(&id) {
            Some(existing) if existing.household_id == household_id => {
                memos.remove(&id);
                Ok(())
            }
            _ => Err(RepositoryError::NotFound),
        }
    }
}

#[derive(Default)]
pub struct MockAlertSettingRepository {
    settings: Mutex<HashMap<Uuid, AlertSetting>>,
}

impl MockAlertSettingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AlertSettingRepository for MockAlertSettingRepository {
    async fn find_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Option<AlertSetting>, RepositoryError> {
        Ok(self.settings.lock().unwrap().get(&household_id).cloned())
    }

    async fn create(&self, setting: AlertSetting) -> Result<AlertSetting, RepositoryError> {
        let mut settings = self.settings.lock().unwrap();
        if settings.contains_key(&setting.household_id) {
            return Err(RepositoryError::ConstraintViolation(
                "Alert setting already exists for household".to_string(),
            ));
        }
        settings.insert(setting.household_id, setting.clone());
        Ok(setting)
    }

    async fn update(&self, setting: AlertSetting) -> Result<AlertSetting, RepositoryError> {
        let mut settings = self.settings.lock().unwrap();
        if !settings.contains_key(&setting.household_id) {
            return Err(RepositoryError::NotFound);
        }
        settings.insert(setting.household_id, setting.clone());
        Ok(setting)
    }
}
