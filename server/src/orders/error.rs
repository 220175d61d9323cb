use thiserror::Error;

use crate::utils::AppError;

/// Everything that can go wrong between receiving an order payload and
/// committing it. Message texts are client-facing.
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("Invalid {entity} name: '{name}'")]
    InvalidReference { entity: &'static str, name: String },

    #[error("Duplicate ingredients are not allowed")]
    DuplicateIngredient,

    #[error("Order exceeds max ingredient limit for size '{size}' (max {max})")]
    CapacityExceeded { size: String, max: i64 },

    #[error("Insufficient stock for ingredient: {0}")]
    OutOfStock(String),

    #[error("Incompatibility found: {0} is incompatible with {1}")]
    IncompatiblePair(String, String),

    #[error("Missing dependency: {ingredient} requires {missing}")]
    MissingDependency { ingredient: String, missing: String },

    #[error("User {0} does not exist")]
    UnknownUser(i64),

    #[error("Order with ID {0} not found")]
    OrderNotFound(i64),

    #[error("Unauthorized: Order {order_id} does not belong to user {user_id}")]
    Unauthorized { order_id: i64, user_id: i64 },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl OrderError {
    pub fn invalid(entity: &'static str, name: impl Into<String>) -> Self {
        Self::InvalidReference {
            entity,
            name: name.into(),
        }
    }
}

impl From<sqlx::Error> for OrderError {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Unauthorized { .. } => AppError::unauthorized(e.to_string()),
            OrderError::Storage(_) => AppError::database(e.to_string()),
            other => AppError::validation(other.to_string()),
        }
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(
            OrderError::invalid("size", "giga").to_string(),
            "Invalid size name: 'giga'"
        );
        assert_eq!(
            OrderError::OutOfStock("tuna".into()).to_string(),
            "Insufficient stock for ingredient: tuna"
        );
        assert_eq!(
            OrderError::CapacityExceeded {
                size: "small".into(),
                max: 3
            }
            .to_string(),
            "Order exceeds max ingredient limit for size 'small' (max 3)"
        );
    }

    #[test]
    fn maps_to_http_error_classes() {
        let unauthorized: AppError = OrderError::Unauthorized {
            order_id: 7,
            user_id: 2,
        }
        .into();
        assert!(matches!(unauthorized, AppError::Unauthorized(_)));

        let storage: AppError = OrderError::Storage("disk".into()).into();
        assert!(matches!(storage, AppError::Database(_)));

        let validation: AppError = OrderError::DuplicateIngredient.into();
        assert!(matches!(validation, AppError::Validation(_)));
    }
}
