//! Shared utilities: error types, result aliases, logging, time helpers.

pub mod error;
pub mod logger;
pub mod result;
pub mod time;

pub use error::AppError;
pub use result::AppResult;
