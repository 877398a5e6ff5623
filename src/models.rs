pub mod alert_setting;
pub mod auth;
pub mod category;
pub mod household;
pub mod item;
pub mod memo;
pub mod storage_location;
pub mod user;

pub use alert_setting::{AlertSetting, AlertSettingRequest};
pub use auth::{AuthToken, LoginRequest};
pub use category::{Category, CategoryRequest, GoalUnit};
pub use household::{CreateHouseholdRequest, Household, JoinHouseholdRequest};
pub use item::{InventoryItem, ItemRequest, ItemWithAlert};
pub use memo::{Memo, MemoRequest};
pub use storage_location::{StorageLocation, StorageLocationRequest};
pub use user::{CreateUserRequest, User};
