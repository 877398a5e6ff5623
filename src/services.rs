pub mod alert_setting_service;
pub mod auth_service;
pub mod balance_service;
pub mod category_service;
pub mod household_service;
pub mod item_service;
pub mod memo_service;
pub mod storage_location_service;
