use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::household::{CreateHouseholdRequest, Household, JoinHouseholdRequest};
use crate::repositories::household_repository::HouseholdRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;

/// Household service errors
#[derive(Debug, thiserror::Error)]
pub enum HouseholdError {
    #[error("User already belongs to a household")]
    AlreadyInHousehold,

    #[error("Household not found")]
    HouseholdNotFound,

    #[error("User does not belong to a household")]
    NoHousehold,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for HouseholdError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => HouseholdError::HouseholdNotFound,
            other => HouseholdError::DatabaseError(other.to_string()),
        }
    }
}

/// Trait defining household membership operations
#[async_trait]
pub trait HouseholdService: Send + Sync {
    /// Create a new household and attach the creating user to it
    async fn create_household(
        &self,
        user_id: Uuid,
        request: CreateHouseholdRequest,
    ) -> Result<Household, HouseholdError>;

    /// Attach the user to an existing household
    async fn join_household(
        &self,
        user_id: Uuid,
        request: JoinHouseholdRequest,
    ) -> Result<Household, HouseholdError>;

    /// Get the household the user currently belongs to
    async fn current_household(&self, user_id: Uuid) -> Result<Household, HouseholdError>;
}

/// Implementation of HouseholdService
pub struct HouseholdServiceImpl {
    household_repository: Arc<dyn HouseholdRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl HouseholdServiceImpl {
    pub fn new(
        household_repository: Arc<dyn HouseholdRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            household_repository,
            user_repository,
        }
    }

    async fn load_user(&self, user_id: Uuid) -> Result<crate::models::user::User, HouseholdError> {
        self.user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| HouseholdError::DatabaseError(e.to_string()))?
            .ok_or(HouseholdError::UserNotFound)
    }
}

#[async_trait]
impl HouseholdService for HouseholdServiceImpl {
    async fn create_household(
        &self,
        user_id: Uuid,
        request: CreateHouseholdRequest,
    ) -> Result<Household, HouseholdError> {
        let user = self.load_user(user_id).await?;
        if user.household_id.is_some() {
            return Err(HouseholdError::AlreadyInHousehold);
        }

        let household = self.household_repository.create(request.name).await?;
        self.user_repository
            .set_household(user_id, household.id)
            .await?;

        Ok(household)
    }

    async fn join_household(
        &self,
        user_id: Uuid,
        request: JoinHouseholdRequest,
    ) -> Result<Household, HouseholdError> {
        let user = self.load_user(user_id).await?;
        if user.household_id.is_some() {
            return Err(HouseholdError::AlreadyInHousehold);
        }

        let household = self
            .household_repository
            .find_by_id(request.household_id)
            .await?
            .ok_or(HouseholdError::HouseholdNotFound)?;

        self.user_repository
            .set_household(user_id, household.id)
            .await?;

        Ok(household)
    }

    async fn current_household(&self, user_id: Uuid) -> Result<Household, HouseholdError> {
        let user = self.load_user(user_id).await?;
        let household_id = user.household_id.ok_or(HouseholdError::NoHousehold)?;

        self.household_repository
            .find_by_id(household_id)
            .await?
            .ok_or(HouseholdError::HouseholdNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::CreateUserRequest;
    use crate::test_support::{MockHouseholdRepository, MockUserRepository};

    async fn setup() -> (Arc<MockUserRepository>, HouseholdServiceImpl, Uuid) {
        let user_repo = Arc::new(MockUserRepository::new());
        let household_repo = Arc::new(MockHouseholdRepository::new());
        let user = user_repo
            .create(
                CreateUserRequest {
                    name: "Test User".to_string(),
                    email: "user@example.com".to_string(),
                    password: "password123".to_string(),
                },
                "hash".to_string(),
            )
            .await
            .unwrap();
        let service = HouseholdServiceImpl::new(household_repo, user_repo.clone());
        (user_repo, service, user.id)
    }

    #[tokio::test]
    async fn test_create_household_attaches_creator() {
        let (user_repo, service, user_id) = setup().await;

        let household = service
            .create_household(
                user_id,
                CreateHouseholdRequest {
                    name: "Tanaka family".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(household.name, "Tanaka family");
        let user = user_repo.find_by_id(user_id).await.unwrap().unwrap();
        assert_eq!(user.household_id, Some(household.id));
    }

    #[tokio::test]
    async fn test_create_household_rejected_when_already_member() {
        let (_, service, user_id) = setup().await;

        service
            .create_household(
                user_id,
                CreateHouseholdRequest {
                    name: "First".to_string(),
                },
            )
            .await
            .unwrap();

        let result = service
            .create_household(
                user_id,
                CreateHouseholdRequest {
                    name: "Second".to_string(),
                },
            )
            .await;

        assert!(matches!(
            result.unwrap_err(),
            HouseholdError::AlreadyInHousehold
        ));
    }

    #[tokio::test]
    async fn test_join_household() {
        let (user_repo, service, creator_id) = setup().await;

        let household = service
            .create_household(
                creator_id,
                CreateHouseholdRequest {
                    name: "Shared".to_string(),
                },
            )
            .await
            .unwrap();

        let joiner = user_repo
            .create(
                CreateUserRequest {
                    name: "Second User".to_string(),
                    email: "second@example.com".to_string(),
                    password: "password123".to_string(),
                },
                "hash".to_string(),
            )
            .await
            .unwrap();

        let joined = service
            .join_household(
                joiner.id,
                JoinHouseholdRequest {
                    household_id: household.id,
                },
            )
            .await
            .unwrap();

        assert_eq!(joined.id, household.id);
        let joiner = user_repo.find_by_id(joiner.id).await.unwrap().unwrap();
        assert_eq!(joiner.household_id, Some(household.id));
    }

    #[tokio::test]
    async fn test_join_unknown_household() {
        let (_, service, user_id) = setup().await;

        let result = service
            .join_household(
                user_id,
                JoinHouseholdRequest {
                    household_id: Uuid::new_v4(),
                },
            )
            .await;

        assert!(matches!(
            result.unwrap_err(),
            HouseholdError::HouseholdNotFound
        ));
    }

    #[tokio::test]
    async fn test_current_household_without_membership() {
        let (_, service, user_id) = setup().await;

        let result = service.current_household(user_id).await;
        assert!(matches!(result.unwrap_err(), HouseholdError::NoHousehold));
    }
}
