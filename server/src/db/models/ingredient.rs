use serde::Serialize;
use sqlx::FromRow;

/// Catalog ingredient. `unlimited` ingredients ignore the stock counter
/// entirely; for the rest, `stock` is the number of portions left.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub unlimited: bool,
}

impl Ingredient {
    /// Whether one more portion can currently be served.
    pub fn has_stock(&self) -> bool {
        self.unlimited || self.stock >= 1
    }
}

/// A named ingredient pair, used for both incompatibility and dependency
/// listings in the menu payload. For dependencies the direction is
/// `ingredient1` requires `ingredient2`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct IngredientPair {
    pub ingredient1: String,
    pub ingredient2: String,
}
