use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::balance::BalanceSummary;
use crate::handlers::ErrorResponse;
use crate::middleware::household_middleware::HouseholdContext;
use crate::services::balance_service::{BalanceError, BalanceService};

/// Convert BalanceError to HTTP response
impl IntoResponse for BalanceError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            BalanceError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Query parameters for the balance dashboard
#[derive(Debug, Deserialize, IntoParams)]
pub struct BalanceQuery {
    /// Restrict the aggregation to one storage location
    pub storage_location_id: Option<Uuid>,
}

/// Handler for the balance dashboard
///
/// Aggregates current stock against each category's goal: one row per
/// category, sorted by achievement ascending so the most depleted
/// categories come first.
#[utoipa::path(
    get,
    path = "/api/balance",
    params(BalanceQuery),
    responses(
        (status = 200, description = "Per-category stock-vs-goal summary", body = BalanceSummary),
        (status = 403, description = "User does not belong to a household", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "balance"
)]
pub async fn get_balance_handler(
    State(balance_service): State<Arc<dyn BalanceService>>,
    Extension(household): Extension<HouseholdContext>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceSummary>, Response> {
    match balance_service
        .get_balance(household.household_id, query.storage_location_id)
        .await
    {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => Err(e.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::{Category, GoalUnit};
    use crate::models::item::InventoryItem;
    use crate::repositories::category_repository::CategoryRepository;
    use crate::repositories::item_repository::ItemRepository;
    use crate::services::balance_service::BalanceServiceImpl;
    use crate::test_support::{MockCategoryRepository, MockItemRepository};
    use chrono::Utc;

    async fn setup_with_data() -> (Arc<dyn BalanceService>, HouseholdContext) {
        let item_repo = Arc::new(MockItemRepository::new());
        let category_repo = Arc::new(MockCategoryRepository::new());
        let household_id = Uuid::new_v4();

        let drinks = Category {
            id: Uuid::new_v4(),
            household_id,
            name: "drinks".to_string(),
            color: "#3388ff".to_string(),
            goal_amount: 10.0,
            goal_unit: GoalUnit::Liters,
            created_at: Utc::now(),
        };
        category_repo.create(drinks.clone()).await.unwrap();

        item_repo
            .create(InventoryItem {
                id: Uuid::new_v4(),
                household_id,
                name: "oat milk".to_string(),
                quantity: 4,
                content_amount: 1.0,
                expiry_date: None,
                category_id: Some(drinks.id),
                storage_location_id: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .await
            .unwrap();

        let service: Arc<dyn BalanceService> =
            Arc::new(BalanceServiceImpl::new(item_repo, category_repo));
        (service, HouseholdContext { household_id })
    }

    #[tokio::test]
    async fn test_get_balance_handler_success() {
        let (service, household) = setup_with_data().await;

        let result = get_balance_handler(
            State(service),
            Extension(household),
            Query(BalanceQuery {
                storage_location_id: None,
            }),
        )
        .await;

        assert!(result.is_ok());
        let Json(summary) = result.unwrap();
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].current_amount, 4.0);
        assert_eq!(summary.rows[0].achievement_percent, 40.0);
        assert_eq!(summary.total, 4.0);
    }

    #[tokio::test]
    async fn test_get_balance_handler_unknown_location_filters_everything() {
        let (service, household) = setup_with_data().await;

        let result = get_balance_handler(
            State(service),
            Extension(household),
            Query(BalanceQuery {
                storage_location_id: Some(Uuid::new_v4()),
            }),
        )
        .await;

        assert!(result.is_ok());
        let Json(summary) = result.unwrap();
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.rows[0].current_amount, 0.0);
    }
}
