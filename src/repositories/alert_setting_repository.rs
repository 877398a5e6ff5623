use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::alert_setting::AlertSetting;
use crate::repositories::RepositoryError;

/// Trait defining alert setting repository operations. At most one row
/// exists per household.
#[async_trait]
pub trait AlertSettingRepository: Send + Sync {
    /// Find a household's alert setting
    async fn find_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Option<AlertSetting>, RepositoryError>;

    /// Insert a household's alert setting row
    async fn create(&self, setting: AlertSetting) -> Result<AlertSetting, RepositoryError>;

    /// Replace a household's thresholds
    async fn update(&self, setting: AlertSetting) -> Result<AlertSetting, RepositoryError>;
}

/// PostgreSQL implementation of AlertSettingRepository
pub struct PostgresAlertSettingRepository {
    pool: PgPool,
}

impl PostgresAlertSettingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlertSettingRepository for PostgresAlertSettingRepository {
    async fn find_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Option<AlertSetting>, RepositoryError> {
        let setting = sqlx::query_as::<_, AlertSetting>(
            r#"
            SELECT household_id, quantity_threshold, expiry_days, updated_at
            FROM alert_settings
            WHERE household_id = $1
            "#,
        )
        .bind(household_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(setting)
    }

    async fn create(&self, setting: AlertSetting) -> Result<AlertSetting, RepositoryError> {
        let setting = sqlx::query_as::<_, AlertSetting>(
            r#"
            INSERT INTO alert_settings (household_id, quantity_threshold, expiry_days)
            VALUES ($1, $2, $3)
            RETURNING household_id, quantity_threshold, expiry_days, updated_at
            "#,
        )
        .bind(setting.household_id)
        .bind(setting.quantity_threshold)
        .bind(setting.expiry_days)
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }

    async fn update(&self, setting: AlertSetting) -> Result<AlertSetting, RepositoryError> {
        let setting = sqlx::query_as::<_, AlertSetting>(
            r#"
            UPDATE alert_settings
            SET quantity_threshold = $2, expiry_days = $3, updated_at = now()
            WHERE household_id = $1
            RETURNING household_id, quantity_threshold, expiry_days, updated_at
            "#,
        )
        .bind(setting.household_id)
        .bind(setting.quantity_threshold)
        .bind(setting.expiry_days)
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }
}
