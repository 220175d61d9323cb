use serde::Serialize;
use sqlx::FromRow;

/// Dish size. `price` is the base price before ingredients and
/// `max_ingredients` caps how many ingredients an order may carry.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Size {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub max_ingredients: i64,
}
