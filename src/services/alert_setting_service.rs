use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::alert_setting::{
    AlertSetting, AlertSettingRequest, DEFAULT_EXPIRY_DAYS, DEFAULT_QUANTITY_THRESHOLD,
};
use crate::repositories::alert_setting_repository::AlertSettingRepository;
use crate::repositories::RepositoryError;

/// Alert setting service errors
#[derive(Debug, thiserror::Error)]
pub enum AlertSettingError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<RepositoryError> for AlertSettingError {
    fn from(e: RepositoryError) -> Self {
        AlertSettingError::DatabaseError(e.to_string())
    }
}

/// Trait defining alert setting operations.
///
/// The default thresholds live here, at the boundary between configuration
/// storage and the alert evaluation: a household that never touched its
/// settings gets a row with the defaults the first time it is read.
#[async_trait]
pub trait AlertSettingService: Send + Sync {
    /// Get the household's thresholds, creating the default row on first access
    async fn get_or_create(&self, household_id: Uuid)
        -> Result<AlertSetting, AlertSettingError>;

    /// Replace the household's thresholds
    async fn update(
        &self,
        household_id: Uuid,
        request: AlertSettingRequest,
    ) -> Result<AlertSetting, AlertSettingError>;
}

/// Implementation of AlertSettingService
pub struct AlertSettingServiceImpl {
    alert_setting_repository: Arc<dyn AlertSettingRepository>,
}

impl AlertSettingServiceImpl {
    pub fn new(alert_setting_repository: Arc<dyn AlertSettingRepository>) -> Self {
        Self {
            alert_setting_repository,
        }
    }
}

#[async_trait]
impl AlertSettingService for AlertSettingServiceImpl {
    async fn get_or_create(
        &self,
        household_id: Uuid,
    ) -> Result<AlertSetting, AlertSettingError> {
        if let Some(setting) = self
            .alert_setting_repository
            .find_by_household(household_id)
            .await?
        {
            return Ok(setting);
        }

        let defaults = AlertSetting {
            household_id,
            quantity_threshold: DEFAULT_QUANTITY_THRESHOLD,
            expiry_days: DEFAULT_EXPIRY_DAYS,
            updated_at: Utc::now(),
        };

        match self.alert_setting_repository.create(defaults).await {
            Ok(setting) => Ok(setting),
            // Lost a race against a concurrent first access; the row exists now.
            Err(RepositoryError::ConstraintViolation(_)) => self
                .alert_setting_repository
                .find_by_household(household_id)
                .await?
                .ok_or_else(|| {
                    AlertSettingError::DatabaseError("Alert setting vanished".to_string())
                }),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(
        &self,
        household_id: Uuid,
        request: AlertSettingRequest,
    ) -> Result<AlertSetting, AlertSettingError> {
        // Ensure the row exists so updating settings that were never saved works
        let mut setting = self.get_or_create(household_id).await?;
        setting.quantity_threshold = request.quantity_threshold;
        setting.expiry_days = request.expiry_days;
        setting.updated_at = Utc::now();

        Ok(self.alert_setting_repository.update(setting).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockAlertSettingRepository;

    fn service() -> AlertSettingServiceImpl {
        AlertSettingServiceImpl::new(Arc::new(MockAlertSettingRepository::new()))
    }

    #[tokio::test]
    async fn test_first_access_creates_defaults() {
        let service = service();
        let household_id = Uuid::new_v4();

        let setting = service.get_or_create(household_id).await.unwrap();

        assert_eq!(setting.household_id, household_id);
        assert_eq!(setting.quantity_threshold, DEFAULT_QUANTITY_THRESHOLD);
        assert_eq!(setting.expiry_days, DEFAULT_EXPIRY_DAYS);
    }

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let service = service();
        let household_id = Uuid::new_v4();

        let first = service.get_or_create(household_id).await.unwrap();
        let second = service.get_or_create(household_id).await.unwrap();

        assert_eq!(first.quantity_threshold, second.quantity_threshold);
        assert_eq!(first.expiry_days, second.expiry_days);
    }

    #[tokio::test]
    async fn test_update_replaces_thresholds() {
        let service = service();
        let household_id = Uuid::new_v4();

        let updated = service
            .update(
                household_id,
                AlertSettingRequest {
                    quantity_threshold: 3,
                    expiry_days: 7,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.quantity_threshold, 3);
        assert_eq!(updated.expiry_days, 7);

        let read_back = service.get_or_create(household_id).await.unwrap();
        assert_eq!(read_back.quantity_threshold, 3);
        assert_eq!(read_back.expiry_days, 7);
    }

    #[tokio::test]
    async fn test_settings_are_per_household() {
        let service = service();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        service
            .update(
                a,
                AlertSettingRequest {
                    quantity_threshold: 9,
                    expiry_days: 90,
                },
            )
            .await
            .unwrap();

        let b_setting = service.get_or_create(b).await.unwrap();
        assert_eq!(b_setting.quantity_threshold, DEFAULT_QUANTITY_THRESHOLD);
        assert_eq!(b_setting.expiry_days, DEFAULT_EXPIRY_DAYS);
    }
}
