//! Repository layer: free async functions over the connection pool.
//!
//! Catalog and user reads surface `sqlx::Error` directly; the order
//! repository wraps storage failures into the order error taxonomy so the
//! whole workflow reports through a single type.

pub mod catalog;
pub mod order;
pub mod user;
