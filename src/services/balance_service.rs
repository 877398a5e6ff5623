use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::balance::{aggregate_balance, BalanceSummary};
use crate::repositories::category_repository::CategoryRepository;
use crate::repositories::item_repository::ItemRepository;
use crate::repositories::RepositoryError;

/// Balance service errors
#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for BalanceError {
    fn from(e: RepositoryError) -> Self {
        BalanceError::DatabaseError(e.to_string())
    }
}

/// Trait defining the balance dashboard computation.
///
/// Loads one consistent snapshot of the household's items and categories,
/// then hands off to the pure aggregation in [`crate::balance`].
#[async_trait]
pub trait BalanceService: Send + Sync {
    /// Compute per-category stock-vs-goal rows for a household, optionally
    /// restricted to one storage location
    async fn get_balance(
        &self,
        household_id: Uuid,
        storage_location_id: Option<Uuid>,
    ) -> Result<BalanceSummary, BalanceError>;
}

/// Implementation of BalanceService
pub struct BalanceServiceImpl {
    item_repository: Arc<dyn ItemRepository>,
    category_repository: Arc<dyn CategoryRepository>,
}

impl BalanceServiceImpl {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        category_repository: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            item_repository,
            category_repository,
        }
    }
}

#[async_trait]
impl BalanceService for BalanceServiceImpl {
    async fn get_balance(
        &self,
        household_id: Uuid,
        storage_location_id: Option<Uuid>,
    ) -> Result<BalanceSummary, BalanceError> {
        let items = self
            .item_repository
            .find_by_household(household_id, None)
            .await?;
        let categories = self
            .category_repository
            .find_by_household(household_id)
            .await?;

        Ok(aggregate_balance(&items, &categories, storage_location_id))
    }
}
