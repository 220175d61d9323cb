use axum::{routing::get, Router};

use crate::core::state::ServerState;

mod handler;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(handler::menu))
}
