use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::auth::{require_auth, require_elevated};
use crate::core::state::ServerState;

mod handler;


pub fn router(state: ServerState) -> Router<ServerState> {
    // Deleting an order needs a TOTP-elevated session; the rest of the
    // resource only needs a login.
    let elevated = Router::new()
        .route("/api/orders/{order_id}", delete(handler::remove))
        .route_layer(middleware::from_fn(require_elevated));

    Router::new()
        .route("/api/users/{user_id}/orders", get(handler::list_for_user))
        .route("/api/orders", post(handler::create))
        .merge(elevated)
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
