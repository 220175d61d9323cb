//! Session authentication with optional TOTP elevation.

pub mod middleware;
pub mod session;
pub mod totp;

pub use middleware::{require_auth, require_elevated, CurrentUser};
pub use session::{AuthLevel, Session, SessionStore};
