use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: String,
}
