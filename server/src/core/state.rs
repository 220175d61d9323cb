use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

use super::config::Config;
use crate::auth::SessionStore;
use crate::db::{seed, DbService};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub sessions: Arc<SessionStore>,
}

impl ServerState {
    /// Open the database, apply migrations, seed demo accounts and build
    /// the session store.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db = DbService::new(&config.database_path).await?;
        seed::ensure_demo_users(&db.pool).await?;

        let ttl = Duration::from_secs(config.session_ttl_minutes * 60);
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            sessions: Arc::new(SessionStore::new(ttl)),
        })
    }
}
