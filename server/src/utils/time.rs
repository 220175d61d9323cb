//! Time helpers. Timestamps are stored as UTC unix milliseconds and
//! formatted for clients at the response layer.

use chrono::DateTime;

/// Current UTC time as unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a unix-millisecond timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Out-of-range values format as an empty string rather than panicking.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

// ========== Tests ==========
