use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Raw `orders` row.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub id: i64,
    pub user_id: i64,
    pub dish_id: i64,
    pub size_id: i64,
    pub price: f64,
    pub created_at: i64,
}

/// Order as returned to clients: ids resolved to names, timestamp
/// formatted, ingredient names in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetails {
    pub id: i64,
    pub dish: String,
    pub size: String,
    pub ingredients: Vec<String>,
    pub price: f64,
    pub timestamp: String,
}

/// Order submission payload. Unknown fields are rejected outright so a
/// typo like `dsh_name` fails loudly instead of being silently dropped.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OrderCreate {
    #[validate(length(min = 1, message = "dish_name must not be empty"))]
    pub dish_name: String,
    #[validate(length(min = 1, message = "size_name must not be empty"))]
    pub size_name: String,
    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<OrderLineCreate>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OrderLineCreate {
    #[validate(length(min = 1, message = "ingredient_name must not be empty"))]
    pub ingredient_name: String,
}

impl OrderCreate {
    /// Ingredient names in submission order.
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .map(|line| line.ingredient_name.as_str())
            .collect()
    }
}

// ========== Tests ==========
