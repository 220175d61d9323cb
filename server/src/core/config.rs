use std::env;

/// Server configuration, loaded from environment variables with defaults
/// suited to local development.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port (`PORT`)
    pub http_port: u16,
    /// SQLite database file (`DATABASE_PATH`)
    pub database_path: String,
    /// Allowed CORS origin for the browser client (`CORS_ORIGIN`)
    pub cors_origin: String,
    /// Session lifetime in minutes (`SESSION_TTL_MINUTES`)
    pub session_ttl_minutes: u64,
    /// `development` or `production` (`ENVIRONMENT`)
    pub environment: String,
    /// Log level (`LOG_LEVEL`)
    pub log_level: String,
    /// Optional directory for rotated log files (`LOG_DIR`)
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            http_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "piatto.db".to_string()),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(720),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("LOG_DIR").ok(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

// ========== Tests ==========
