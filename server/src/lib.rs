//! Piatto Server - restaurant ordering backend
//!
//! # Architecture overview
//!
//! - **Catalog** (`catalog`): in-memory menu snapshot and ingredient rule graph
//! - **Orders** (`orders`): validation pipeline, pricing and error taxonomy
//! - **Database** (`db`): SQLite storage, migrations and repositories
//! - **Auth** (`auth`): session login with optional TOTP elevation
//! - **HTTP API** (`api`): RESTful interface
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/          # configuration, state, server loop
//! ├── auth/          # sessions, TOTP, middleware
//! ├── catalog/       # menu snapshot, rule graph
//! ├── orders/        # validation and pricing
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # pool, migrations, repositories
//! └── utils/         # errors, logging, time
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

pub use auth::{CurrentUser, SessionStore};
pub use crate::core::{Config, Server, ServerState};
pub use utils::logger::init_logger_with_file;
pub use utils::{AppError, AppResult};

/// Bring up logging from the loaded configuration.
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    ____  _       __  __
   / __ \(_)___ _/ /_/ /_____
  / /_/ / / __ `/ __/ __/ __ \
 / ____/ / /_/ / /_/ /_/ /_/ /
/_/   /_/\__,_/\__/\__/\____/
    "#
    );
}
