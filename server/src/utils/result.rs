use super::error::AppError;

/// Result alias for handlers and middleware.
pub type AppResult<T> = Result<T, AppError>;
