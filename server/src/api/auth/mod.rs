use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::require_auth;
use crate::core::state::ServerState;

mod handler;

pub fn router(state: ServerState) -> Router<ServerState> {
    // TOTP verification only makes sense on an existing session.
    let protected = Router::new()
        .route("/api/login-totp", post(handler::verify_totp))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/api/login-local", post(handler::login))
        .route(
            "/api/login-local/current",
            get(handler::current).delete(handler::logout),
        )
        .merge(protected)
}
