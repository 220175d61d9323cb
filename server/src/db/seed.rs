//! Boot-time account seeding.
//!
//! Menu data ships in the SQL migrations, but demo accounts cannot: argon2
//! hashes are salted per run, so they are provisioned here on first boot.

use sqlx::SqlitePool;

use super::models::User;
use crate::utils::AppError;

/// Base32 secret shared by the TOTP-enabled demo accounts.
pub const DEMO_TOTP_SECRET: &str = "LXBSMDTMSP2I5XFXIYRGFVWSFR";

const DEMO_PASSWORD: &str = "password";

struct DemoAccount {
    name: &'static str,
    email: &'static str,
    totp: bool,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        name: "Alice",
        email: "alice@piatto.test",
        totp: true,
    },
    DemoAccount {
        name: "Bob",
        email: "bob@piatto.test",
        totp: true,
    },
    DemoAccount {
        name: "Carol",
        email: "carol@piatto.test",
        totp: false,
    },
];

/// Insert the demo accounts if the user table is empty. Idempotent across
/// restarts.
pub async fn ensure_demo_users(pool: &SqlitePool) -> Result<(), AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if count > 0 {
        return Ok(());
    }

    for account in DEMO_ACCOUNTS {
        let hash = User::hash_password(DEMO_PASSWORD)
            .map_err(|e| AppError::internal(format!("Failed to hash seed password: {e}")))?;
        let secret = account.totp.then_some(DEMO_TOTP_SECRET);
        sqlx::query(
            "INSERT INTO user (name, email, password_hash, totp_secret) VALUES (?, ?, ?, ?)",
        )
        .bind(account.name)
        .bind(account.email)
        .bind(hash)
        .bind(secret)
        .execute(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    }

    tracing::info!("Seeded {} demo accounts", DEMO_ACCOUNTS.len());
    Ok(())
}
