use axum::{
    extract::FromRef,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

pub mod alerts;
pub mod balance;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;
pub mod test_support;
pub mod validation;

use crate::handlers::alert_setting_handlers::{
    get_alert_settings_handler, update_alert_settings_handler,
};
use crate::handlers::auth_handlers::{login_handler, register_handler};
use crate::handlers::balance_handlers::get_balance_handler;
use crate::handlers::category_handlers::{
    create_category_handler, delete_category_handler, list_categories_handler,
    update_category_handler,
};
use crate::handlers::household_handlers::{
    create_household_handler, current_household_handler, join_household_handler,
};
use crate::handlers::item_handlers::{
    create_item_handler, delete_item_handler, duplicate_item_handler, get_item_handler,
    list_items_handler, update_item_handler,
};
use crate::handlers::memo_handlers::{
    create_memo_handler, delete_memo_handler, list_memos_handler, update_memo_handler,
};
use crate::handlers::storage_location_handlers::{
    create_location_handler, delete_location_handler, list_locations_handler,
    update_location_handler,
};
use crate::middleware::auth_middleware::auth_middleware;
use crate::middleware::household_middleware::household_middleware;
use crate::repositories::user_repository::UserRepository;
use crate::services::alert_setting_service::AlertSettingService;
use crate::services::auth_service::AuthService;
use crate::services::balance_service::BalanceService;
use crate::services::category_service::CategoryService;
use crate::services::household_service::HouseholdService;
use crate::services::item_service::ItemService;
use crate::services::memo_service::MemoService;
use crate::services::storage_location_service::StorageLocationService;

/// Shared application state: one service per resource, plus the user
/// repository the household guard needs
#[derive(Clone, FromRef)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub household_service: Arc<dyn HouseholdService>,
    pub item_service: Arc<dyn ItemService>,
    pub category_service: Arc<dyn CategoryService>,
    pub storage_location_service: Arc<dyn StorageLocationService>,
    pub memo_service: Arc<dyn MemoService>,
    pub alert_setting_service: Arc<dyn AlertSettingService>,
    pub balance_service: Arc<dyn BalanceService>,
    pub user_repository: Arc<dyn UserRepository>,
}

/// Build the full API router.
///
/// Three rings of routes: public (health, auth), authenticated (household
/// membership management) and household-scoped (everything touching
/// inventory data, which additionally requires membership).
pub fn build_router(state: AppState) -> Router {
    let household_routes = Router::new()
        .route("/api/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/api/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .route("/api/items/{id}/duplicate", post(duplicate_item_handler))
        .route(
            "/api/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/api/categories/{id}",
            put(update_category_handler).delete(delete_category_handler),
        )
        .route(
            "/api/storage-locations",
            get(list_locations_handler).post(create_location_handler),
        )
        .route(
            "/api/storage-locations/{id}",
            put(update_location_handler).delete(delete_location_handler),
        )
        .route("/api/memos", get(list_memos_handler).post(create_memo_handler))
        .route(
            "/api/memos/{id}",
            put(update_memo_handler).delete(delete_memo_handler),
        )
        .route(
            "/api/alert-settings",
            get(get_alert_settings_handler).put(update_alert_settings_handler),
        )
        .route("/api/balance", get(get_balance_handler))
        .layer(from_fn_with_state(
            state.user_repository.clone(),
            household_middleware,
        ));

    let authenticated_routes = Router::new()
        .route("/api/households", post(create_household_handler))
        .route("/api/households/join", post(join_household_handler))
        .route("/api/households/current", get(current_household_handler))
        .merge(household_routes)
        .layer(from_fn_with_state(
            state.auth_service.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .merge(authenticated_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
