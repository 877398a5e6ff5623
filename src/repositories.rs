pub mod alert_setting_repository;
pub mod category_repository;
pub mod household_repository;
pub mod item_repository;
pub mod memo_repository;
pub mod storage_location_repository;
pub mod user_repository;

/// Repository errors for database operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Resource not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::ConstraintViolation(db_err.to_string())
            }
            other => RepositoryError::DatabaseError(other.to_string()),
        }
    }
}
