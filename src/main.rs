use sqlx::postgres::PgPoolOptions;
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use inventory_tracker::alerts::AlertStatus;
use inventory_tracker::balance::{BalanceRow, BalanceSummary};
use inventory_tracker::handlers::ErrorResponse;
use inventory_tracker::models::alert_setting::{AlertSetting, AlertSettingRequest};
use inventory_tracker::models::auth::{AuthToken, LoginRequest};
use inventory_tracker::models::category::{Category, CategoryRequest, GoalUnit};
use inventory_tracker::models::household::{
    CreateHouseholdRequest, Household, JoinHouseholdRequest,
};
use inventory_tracker::models::item::{InventoryItem, ItemRequest, ItemWithAlert};
use inventory_tracker::models::memo::{Memo, MemoRequest};
use inventory_tracker::models::storage_location::{StorageLocation, StorageLocationRequest};
use inventory_tracker::models::user::{CreateUserRequest, User};
use inventory_tracker::repositories::alert_setting_repository::PostgresAlertSettingRepository;
use inventory_tracker::repositories::category_repository::PostgresCategoryRepository;
use inventory_tracker::repositories::household_repository::PostgresHouseholdRepository;
use inventory_tracker::repositories::item_repository::PostgresItemRepository;
use inventory_tracker::repositories::memo_repository::PostgresMemoRepository;
use inventory_tracker::repositories::storage_location_repository::PostgresStorageLocationRepository;
use inventory_tracker::repositories::user_repository::{PostgresUserRepository, UserRepository};
use inventory_tracker::services::alert_setting_service::{
    AlertSettingService, AlertSettingServiceImpl,
};
use inventory_tracker::services::auth_service::{AuthService, AuthServiceImpl};
use inventory_tracker::services::balance_service::{BalanceService, BalanceServiceImpl};
use inventory_tracker::services::category_service::{CategoryService, CategoryServiceImpl};
use inventory_tracker::services::household_service::{HouseholdService, HouseholdServiceImpl};
use inventory_tracker::services::item_service::{ItemService, ItemServiceImpl};
use inventory_tracker::services::memo_service::{MemoService, MemoServiceImpl};
use inventory_tracker::services::storage_location_service::{
    StorageLocationService, StorageLocationServiceImpl,
};
use inventory_tracker::{build_router, AppState};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        inventory_tracker::handlers::auth_handlers::register_handler,
        inventory_tracker::handlers::auth_handlers::login_handler,
        inventory_tracker::handlers::household_handlers::create_household_handler,
        inventory_tracker::handlers::household_handlers::join_household_handler,
        inventory_tracker::handlers::household_handlers::current_household_handler,
        inventory_tracker::handlers::item_handlers::list_items_handler,
        inventory_tracker::handlers::item_handlers::create_item_handler,
        inventory_tracker::handlers::item_handlers::get_item_handler,
        inventory_tracker::handlers::item_handlers::update_item_handler,
        inventory_tracker::handlers::item_handlers::delete_item_handler,
        inventory_tracker::handlers::item_handlers::duplicate_item_handler,
        inventory_tracker::handlers::category_handlers::list_categories_handler,
        inventory_tracker::handlers::category_handlers::create_category_handler,
        inventory_tracker::handlers::category_handlers::update_category_handler,
        inventory_tracker::handlers::category_handlers::delete_category_handler,
        inventory_tracker::handlers::storage_location_handlers::list_locations_handler,
        inventory_tracker::handlers::storage_location_handlers::create_location_handler,
        inventory_tracker::handlers::storage_location_handlers::update_location_handler,
        inventory_tracker::handlers::storage_location_handlers::delete_location_handler,
        inventory_tracker::handlers::memo_handlers::list_memos_handler,
        inventory_tracker::handlers::memo_handlers::create_memo_handler,
        inventory_tracker::handlers::memo_handlers::update_memo_handler,
        inventory_tracker::handlers::memo_handlers::delete_memo_handler,
        inventory_tracker::handlers::alert_setting_handlers::get_alert_settings_handler,
        inventory_tracker::handlers::alert_setting_handlers::update_alert_settings_handler,
        inventory_tracker::handlers::balance_handlers::get_balance_handler,
    ),
    components(
        schemas(
            User, CreateUserRequest, LoginRequest, AuthToken,
            Household, CreateHouseholdRequest, JoinHouseholdRequest,
            InventoryItem, ItemRequest, ItemWithAlert, AlertStatus,
            Category, CategoryRequest, GoalUnit,
            StorageLocation, StorageLocationRequest,
            Memo, MemoRequest,
            AlertSetting, AlertSettingRequest,
            BalanceRow, BalanceSummary,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "households", description = "Household membership"),
        (name = "items", description = "Inventory items with alert status"),
        (name = "categories", description = "Item categories and stock goals"),
        (name = "storage-locations", description = "Where items are kept"),
        (name = "memos", description = "Shared household notes"),
        (name = "alert-settings", description = "Alert threshold configuration"),
        (name = "balance", description = "Stock-vs-goal dashboard"),
    ),
    info(
        title = "Inventory Tracker API",
        version = "0.1.0",
        description = "REST API for tracking a household's food and supply inventory",
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get configuration from environment
    let database_url = env::var("DATABASE_URL")?;
    let jwt_secret = env::var("JWT_SECRET")?;
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    info!("connected to database");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("migrations completed");

    // Initialize repositories
    let user_repository: Arc<dyn UserRepository> =
        Arc::new(PostgresUserRepository::new(pool.clone()));
    let household_repository = Arc::new(PostgresHouseholdRepository::new(pool.clone()));
    let item_repository = Arc::new(PostgresItemRepository::new(pool.clone()));
    let category_repository = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let storage_location_repository =
        Arc::new(PostgresStorageLocationRepository::new(pool.clone()));
    let memo_repository = Arc::new(PostgresMemoRepository::new(pool.clone()));
    let alert_setting_repository = Arc::new(PostgresAlertSettingRepository::new(pool.clone()));

    // Initialize services
    let auth_service: Arc<dyn AuthService> =
        Arc::new(AuthServiceImpl::new(user_repository.clone(), jwt_secret));
    let household_service: Arc<dyn HouseholdService> = Arc::new(HouseholdServiceImpl::new(
        household_repository,
        user_repository.clone(),
    ));
    let alert_setting_service: Arc<dyn AlertSettingService> =
        Arc::new(AlertSettingServiceImpl::new(alert_setting_repository));
    let item_service: Arc<dyn ItemService> = Arc::new(ItemServiceImpl::new(
        item_repository.clone(),
        category_repository.clone(),
        storage_location_repository.clone(),
        alert_setting_service.clone(),
    ));
    let category_service: Arc<dyn CategoryService> =
        Arc::new(CategoryServiceImpl::new(category_repository.clone()));
    let storage_location_service: Arc<dyn StorageLocationService> = Arc::new(
        StorageLocationServiceImpl::new(storage_location_repository),
    );
    let memo_service: Arc<dyn MemoService> = Arc::new(MemoServiceImpl::new(memo_repository));
    let balance_service: Arc<dyn BalanceService> = Arc::new(BalanceServiceImpl::new(
        item_repository,
        category_repository,
    ));

    let state = AppState {
        auth_service,
        household_service,
        item_service,
        category_service,
        storage_location_service,
        memo_service,
        alert_setting_service,
        balance_service,
        user_repository,
    };

    // Build router with routes
    let app = build_router(state)
        // Merge Swagger UI
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        // Add CORS middleware
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("server running on http://{}", addr);
    info!("api docs at http://{}/api/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
