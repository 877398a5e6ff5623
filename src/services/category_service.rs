use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::category::{Category, CategoryRequest};
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::RepositoryError;

/// Category service errors
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Category with this name already exists")]
    DuplicateName,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for CategoryError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => CategoryError::CategoryNotFound,
            RepositoryError::ConstraintViolation(_) => CategoryError::DuplicateName,
            RepositoryError::DatabaseError(msg) => CategoryError::DatabaseError(msg),
        }
    }
}

/// Trait defining category operations, scoped to the caller's household
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// List the household's categories, ordered by name
    async fn list_categories(&self, household_id: Uuid) -> Result<Vec<Category>, CategoryError>;

    /// Create a new category
    async fn create_category(
        &self,
        household_id: Uuid,
        request: CategoryRequest,
    ) -> Result<Category, CategoryError>;

    /// Replace a category's attributes
    async fn update_category(
        &self,
        household_id: Uuid,
        category_id: Uuid,
        request: CategoryRequest,
    ) -> Result<Category, CategoryError>;

    /// Delete a category; its items fall back to "uncategorized"
    async fn delete_category(
        &self,
        household_id: Uuid,
        category_id: Uuid,
    ) -> Result<(), CategoryError>;
}

/// Implementation of CategoryService
pub struct CategoryServiceImpl {
    category_repository: Arc<dyn CategoryRepository>,
}

impl CategoryServiceImpl {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn list_categories(&self, household_id: Uuid) -> Result<Vec<Category>, CategoryError> {
        Ok(self
            .category_repository
            .find_by_household(household_id)
            .await?)
    }

    async fn create_category(
        &self,
        household_id: Uuid,
        request: CategoryRequest,
    ) -> Result<Category, CategoryError> {
        let category = Category {
            id: Uuid::new_v4(),
            household_id,
            name: request.name,
            color: request.color,
            goal_amount: request.goal_amount,
            goal_unit: request.goal_unit,
            created_at: Utc::now(),
        };

        Ok(self.category_repository.create(category).await?)
    }

    async fn update_category(
        &self,
        household_id: Uuid,
        category_id: Uuid,
        request: CategoryRequest,
    ) -> Result<Category, CategoryError> {
        let existing = self
            .category_repository
            .find_by_id(household_id, category_id)
            .await?
            .ok_or(CategoryError::CategoryNotFound)?;

        // Renaming onto a sibling category is a conflict
        if let Some(conflict) = self
            .category_repository
            .find_by_name(household_id, &request.name)
            .await?
        {
            if conflict.id != category_id {
                return Err(CategoryError::DuplicateName);
            }
        }

        let updated = Category {
            id: existing.id,
            household_id,
            name: request.name,
            color: request.color,
            goal_amount: request.goal_amount,
            goal_unit: request.goal_unit,
            created_at: existing.created_at,
        };

        Ok(self.category_repository.update(updated).await?)
    }

    async fn delete_category(
        &self,
        household_id: Uuid,
        category_id: Uuid,
    ) -> Result<(), CategoryError> {
        Ok(self
            .category_repository
            .delete(household_id, category_id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::GoalUnit;
    use crate::test_support::MockCategoryRepository;

    fn service() -> (CategoryServiceImpl, Uuid) {
        (
            CategoryServiceImpl::new(Arc::new(MockCategoryRepository::new())),
            Uuid::new_v4(),
        )
    }

    fn request(name: &str, goal_amount: f64) -> CategoryRequest {
        CategoryRequest {
            name: name.to_string(),
            color: "#3388ff".to_string(),
            goal_amount,
            goal_unit: GoalUnit::Pieces,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_sorted() {
        let (service, household_id) = service();

        service
            .create_category(household_id, request("snacks", 5.0))
            .await
            .unwrap();
        service
            .create_category(household_id, request("drinks", 12.0))
            .await
            .unwrap();

        let categories = service.list_categories(household_id).await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "drinks");
        assert_eq!(categories[1].name, "snacks");
    }

    #[tokio::test]
    async fn test_duplicate_name_in_household_rejected() {
        let (service, household_id) = service();

        service
            .create_category(household_id, request("drinks", 12.0))
            .await
            .unwrap();
        let result = service
            .create_category(household_id, request("drinks", 1.0))
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::DuplicateName));
    }

    #[tokio::test]
    async fn test_same_name_in_other_household_allowed() {
        let (service, household_id) = service();

        service
            .create_category(household_id, request("drinks", 12.0))
            .await
            .unwrap();
        let result = service
            .create_category(Uuid::new_v4(), request("drinks", 12.0))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_keeps_own_name() {
        let (service, household_id) = service();

        let created = service
            .create_category(household_id, request("drinks", 12.0))
            .await
            .unwrap();

        // Same name, new goal: not a conflict with itself
        let updated = service
            .update_category(household_id, created.id, request("drinks", 20.0))
            .await
            .unwrap();

        assert_eq!(updated.goal_amount, 20.0);
    }

    #[tokio::test]
    async fn test_update_rename_conflict() {
        let (service, household_id) = service();

        service
            .create_category(household_id, request("drinks", 12.0))
            .await
            .unwrap();
        let snacks = service
            .create_category(household_id, request("snacks", 5.0))
            .await
            .unwrap();

        let result = service
            .update_category(household_id, snacks.id, request("drinks", 5.0))
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::DuplicateName));
    }

    #[tokio::test]
    async fn test_delete_is_household_scoped() {
        let (service, household_id) = service();

        let created = service
            .create_category(household_id, request("drinks", 12.0))
            .await
            .unwrap();

        let result = service.delete_category(Uuid::new_v4(), created.id).await;
        assert!(matches!(
            result.unwrap_err(),
            CategoryError::CategoryNotFound
        ));

        // Still present for the owning household
        assert_eq!(service.list_categories(household_id).await.unwrap().len(), 1);
    }
}
