//! Order workflow: validate against a fresh catalog snapshot, then commit
//! inside a transaction.
//!
//! The validator's stock pre-check is advisory. The transaction performs a
//! conditional decrement per limited ingredient and rolls back when a row
//! was drained between the snapshot read and the write, so concurrent
//! orders can never oversell.

use sqlx::{FromRow, SqlitePool};

use crate::catalog::CatalogSnapshot;
use crate::db::models::{OrderCreate, OrderDetails, OrderRow};
use crate::db::repository::user;
use crate::orders::{validate_and_price, OrderError};
use crate::utils::time::{format_timestamp, now_millis};

#[derive(FromRow)]
struct OrderJoinRow {
    id: i64,
    dish: String,
    size: String,
    price: f64,
    created_at: i64,
}

/// Validate and persist an order. Returns the new order id.
pub async fn create_order(
    pool: &SqlitePool,
    user_id: i64,
    order: &OrderCreate,
) -> Result<i64, OrderError> {
    if !user::exists(pool, user_id).await? {
        return Err(OrderError::UnknownUser(user_id));
    }

    let catalog = CatalogSnapshot::load(pool).await?;
    let priced = validate_and_price(order, &catalog)?;

    let mut tx = pool.begin().await?;

    let order_id = sqlx::query(
        "INSERT INTO orders (user_id, dish_id, size_id, price, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(priced.dish_id)
    .bind(priced.size_id)
    .bind(priced.price)
    .bind(now_millis())
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    for line in &priced.lines {
        sqlx::query("INSERT INTO order_line (order_id, ingredient_id) VALUES (?, ?)")
            .bind(order_id)
            .bind(line.ingredient_id)
            .execute(&mut *tx)
            .await?;

        if line.unlimited {
            continue;
        }

        // Conditional decrement: fails when another order drained the last
        // portion after our snapshot was taken.
        let updated = sqlx::query(
            "UPDATE ingredient SET stock = stock - 1
             WHERE id = ? AND unlimited = 0 AND stock >= 1",
        )
        .bind(line.ingredient_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(OrderError::OutOfStock(line.name.clone()));
        }
    }

    tx.commit().await?;
    tracing::info!(order_id, user_id, price = priced.price, "Order created");
    Ok(order_id)
}

/// Delete an order owned by `user_id`, restoring the stock its limited
/// ingredients consumed. Returns the deleted order id.
pub async fn delete_order(
    pool: &SqlitePool,
    order_id: i64,
    user_id: i64,
) -> Result<i64, OrderError> {
    let row: Option<OrderRow> = sqlx::query_as(
        "SELECT id, user_id, dish_id, size_id, price, created_at FROM orders WHERE id = ?",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
    let order = row.ok_or(OrderError::OrderNotFound(order_id))?;

    if order.user_id != user_id {
        return Err(OrderError::Unauthorized { order_id, user_id });
    }

    let mut tx = pool.begin().await?;

    sqlx::query(
        "UPDATE ingredient SET stock = stock + 1
         WHERE unlimited = 0
           AND id IN (SELECT ingredient_id FROM order_line WHERE order_id = ?)",
    )
    .bind(order_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM order_line WHERE order_id = ?")
        .bind(order_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!(order_id, user_id, "Order deleted");
    Ok(order_id)
}

/// All orders of a user, oldest first, resolved to client shape.
pub async fn find_by_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<OrderDetails>, OrderError> {
    if !user::exists(pool, user_id).await? {
        return Err(OrderError::UnknownUser(user_id));
    }

    let rows: Vec<OrderJoinRow> = sqlx::query_as(
        "SELECT o.id, d.name AS dish, s.name AS size, o.price, o.created_at
         FROM orders o
         JOIN dish d ON d.id = o.dish_id
         JOIN size s ON s.id = o.size_id
         WHERE o.user_id = ?
         ORDER BY o.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut orders = Vec::with_capacity(rows.len());
    for row in rows {
        orders.push(into_details(pool, row).await?);
    }
    Ok(orders)
}

/// One order by id, resolved to client shape.
pub async fn find_by_id(pool: &SqlitePool, order_id: i64) -> Result<OrderDetails, OrderError> {
    let row: Option<OrderJoinRow> = sqlx::query_as(
        "SELECT o.id, d.name AS dish, s.name AS size, o.price, o.created_at
         FROM orders o
         JOIN dish d ON d.id = o.dish_id
         JOIN size s ON s.id = o.size_id
         WHERE o.id = ?",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
    let row = row.ok_or(OrderError::OrderNotFound(order_id))?;
    into_details(pool, row).await
}

async fn into_details(pool: &SqlitePool, row: OrderJoinRow) -> Result<OrderDetails, OrderError> {
    let ingredients: Vec<String> = sqlx::query_scalar(
        "SELECT i.name FROM order_line l
         JOIN ingredient i ON i.id = l.ingredient_id
         WHERE l.order_id = ?
         ORDER BY l.rowid",
    )
    .bind(row.id)
    .fetch_all(pool)
    .await?;

    Ok(OrderDetails {
        id: row.id,
        dish: row.dish,
        size: row.size,
        ingredients,
        price: row.price,
        timestamp: format_timestamp(row.created_at),
    })
}

// ========== Tests ==========
