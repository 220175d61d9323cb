use sqlx::SqlitePool;

use crate::db::models::User;

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as(
        "SELECT id, name, email, password_hash, totp_secret FROM user WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, user_id: i64) -> sqlx::Result<Option<User>> {
    sqlx::query_as("SELECT id, name, email, password_hash, totp_secret FROM user WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn exists(pool: &SqlitePool, user_id: i64) -> sqlx::Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user WHERE id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}
