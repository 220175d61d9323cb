//! Logging Infrastructure
//!
//! Structured logging setup with console output and optional daily-rotated
//! file output for production deployments.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger, honoring `RUST_LOG` when set and falling back to
/// the configured level otherwise.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir points at an existing directory
    if let Some(dir) = log_dir {
        if Path::new(dir).exists() {
            let file_appender = tracing_appender::rolling::daily(dir, "piatto-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
