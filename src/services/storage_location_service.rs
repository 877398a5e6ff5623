use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::storage_location::{StorageLocation, StorageLocationRequest};
use crate::repositories::storage_location_repository::StorageLocationRepository;
use crate::repositories::RepositoryError;

/// Storage location service errors
#[derive(Debug, thiserror::Error)]
pub enum StorageLocationError {
    #[error("Storage location with this name already exists")]
    DuplicateName,

    #[error("Storage location not found")]
    StorageLocationNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for StorageLocationError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => StorageLocationError::StorageLocationNotFound,
            RepositoryError::ConstraintViolation(_) => StorageLocationError::DuplicateName,
            RepositoryError::DatabaseError(msg) => StorageLocationError::DatabaseError(msg),
        }
    }
}

/// Trait defining storage location operations, scoped to the caller's
/// household
#[async_trait]
pub trait StorageLocationService: Send + Sync {
    /// List the household's storage locations, ordered by name
    async fn list_locations(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<StorageLocation>, StorageLocationError>;

    /// Create a new storage location
    async fn create_location(
        &self,
        household_id: Uuid,
        request: StorageLocationRequest,
    ) -> Result<StorageLocation, StorageLocationError>;

    /// Rename a storage location
    async fn update_location(
        &self,
        household_id: Uuid,
        location_id: Uuid,
        request: StorageLocationRequest,
    ) -> Result<StorageLocation, StorageLocationError>;

    /// Delete a storage location; its items become location-less
    async fn delete_location(
        &self,
        household_id: Uuid,
        location_id: Uuid,
    ) -> Result<(), StorageLocationError>;
}

/// Implementation of StorageLocationService
pub struct StorageLocationServiceImpl {
    storage_location_repository: Arc<dyn StorageLocationRepository>,
}

impl StorageLocationServiceImpl {
    pub fn new(storage_location_repository: Arc<dyn StorageLocationRepository>) -> Self {
        Self {
            storage_location_repository,
        }
    }
}

#[async_trait]
impl StorageLocationService for StorageLocationServiceImpl {
    async fn list_locations(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<StorageLocation>, StorageLocationError> {
        Ok(self
            .storage_location_repository
            .find_by_household(household_id)
            .await?)
    }

    async fn create_location(
        &self,
        household_id: Uuid,
        request: StorageLocationRequest,
    ) -> Result<StorageLocation, StorageLocationError> {
        let location = StorageLocation {
            id: Uuid::new_v4(),
            household_id,
            name: request.name,
            created_at: Utc::now(),
        };

        Ok(self.storage_location_repository.create(location).await?)
    }

    async fn update_location(
        &self,
        household_id: Uuid,
        location_id: Uuid,
        request: StorageLocationRequest,
    ) -> Result<StorageLocation, StorageLocationError> {
        let existing = self
            .storage_location_repository
            .find_by_id(household_id, location_id)
            .await?
            .ok_or(StorageLocationError::StorageLocationNotFound)?;

        let updated = StorageLocation {
            id: existing.id,
            household_id,
            name: request.name,
            created_at: existing.created_at,
        };

        Ok(self.storage_location_repository.update(updated).await?)
    }

    async fn delete_location(
        &self,
        household_id: Uuid,
        location_id: Uuid,
    ) -> Result<(), StorageLocationError> {
        Ok(self
            .storage_location_repository
            .delete(household_id, location_id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockStorageLocationRepository;

    fn service() -> (StorageLocationServiceImpl, Uuid) {
        (
            StorageLocationServiceImpl::new(Arc::new(MockStorageLocationRepository::new())),
            Uuid::new_v4(),
        )
    }

    fn request(name: &str) -> StorageLocationRequest {
        StorageLocationRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (service, household_id) = service();

        service
            .create_location(household_id, request("pantry"))
            .await
            .unwrap();
        service
            .create_location(household_id, request("fridge"))
            .await
            .unwrap();

        let locations = service.list_locations(household_id).await.unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name, "fridge");
        assert_eq!(locations[1].name, "pantry");
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let (service, household_id) = service();

        service
            .create_location(household_id, request("pantry"))
            .await
            .unwrap();
        let result = service.create_location(household_id, request("pantry")).await;

        assert!(matches!(
            result.unwrap_err(),
            StorageLocationError::DuplicateName
        ));
    }

    #[tokio::test]
    async fn test_rename() {
        let (service, household_id) = service();

        let created = service
            .create_location(household_id, request("pantry"))
            .await
            .unwrap();

        let updated = service
            .update_location(household_id, created.id, request("cellar"))
            .await
            .unwrap();

        assert_eq!(updated.name, "cellar");
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    async fn test_update_is_household_scoped() {
        let (service, household_id) = service();

        let created = service
            .create_location(household_id, request("pantry"))
            .await
            .unwrap();

        let result = service
            .update_location(Uuid::new_v4(), created.id, request("cellar"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            StorageLocationError::StorageLocationNotFound
        ));
    }
}
