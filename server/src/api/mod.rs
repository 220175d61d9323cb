//! HTTP surface. Each resource contributes a router merged in
//! `core::server::build_router`; protected routers attach the auth
//! middleware themselves.

pub mod auth;
pub mod health;
pub mod menu;
pub mod orders;
