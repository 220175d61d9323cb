//! Catalog reads. Everything here is a plain SELECT; the in-memory
//! snapshot and rule graph are assembled in `crate::catalog`.

use sqlx::SqlitePool;

use crate::db::models::{Dish, Ingredient, IngredientPair, Size};

pub async fn list_sizes(pool: &SqlitePool) -> sqlx::Result<Vec<Size>> {
    sqlx::query_as("SELECT id, name, price, max_ingredients FROM size ORDER BY price")
        .fetch_all(pool)
        .await
}

pub async fn list_dishes(pool: &SqlitePool) -> sqlx::Result<Vec<Dish>> {
    sqlx::query_as("SELECT id, name, description FROM dish ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn list_ingredients(pool: &SqlitePool) -> sqlx::Result<Vec<Ingredient>> {
    sqlx::query_as("SELECT id, name, price, stock, unlimited FROM ingredient ORDER BY name")
        .fetch_all(pool)
        .await
}

/// Incompatible pairs by name, in stored orientation. The pair is
/// symmetric; clients and the rule graph both treat it as unordered.
pub async fn list_incompatibilities(pool: &SqlitePool) -> sqlx::Result<Vec<IngredientPair>> {
    sqlx::query_as(
        "SELECT a.name AS ingredient1, b.name AS ingredient2
         FROM ingredient_incompatibility x
         JOIN ingredient a ON a.id = x.ingredient_a
         JOIN ingredient b ON b.id = x.ingredient_b
         ORDER BY a.name, b.name",
    )
    .fetch_all(pool)
    .await
}

/// Dependency pairs by name: `ingredient1` requires `ingredient2`.
pub async fn list_dependencies(pool: &SqlitePool) -> sqlx::Result<Vec<IngredientPair>> {
    sqlx::query_as(
        "SELECT i.name AS ingredient1, r.name AS ingredient2
         FROM ingredient_dependency d
         JOIN ingredient i ON i.id = d.ingredient_id
         JOIN ingredient r ON r.id = d.required_ingredient_id
         ORDER BY i.name, r.name",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_incompatibility_ids(pool: &SqlitePool) -> sqlx::Result<Vec<(i64, i64)>> {
    sqlx::query_as("SELECT ingredient_a, ingredient_b FROM ingredient_incompatibility")
        .fetch_all(pool)
        .await
}

pub async fn list_dependency_ids(pool: &SqlitePool) -> sqlx::Result<Vec<(i64, i64)>> {
    sqlx::query_as("SELECT ingredient_id, required_ingredient_id FROM ingredient_dependency")
        .fetch_all(pool)
        .await
}
