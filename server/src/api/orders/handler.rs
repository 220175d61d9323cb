use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::state::ServerState;
use crate::db::models::{OrderCreate, OrderDetails};
use crate::db::repository::order as order_repo;
use crate::utils::{AppError, AppResult};

/// Orders of the authenticated user. The path id is validated for shape
/// but the lookup is always scoped to the session owner, so one user can
/// never read another's history.
pub async fn list_for_user(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<OrderDetails>>> {
    if user_id < 1 {
        return Err(AppError::validation("User ID must be a positive integer"));
    }
    let orders = order_repo::find_by_user(&state.pool, user.user_id).await?;
    Ok(Json(orders))
}

pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Value>)> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let order_id = order_repo::create_order(&state.pool, user.user_id, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "orderId": order_id,
            "message": "Order validated and created successfully",
        })),
    ))
}

pub async fn remove(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(order_id): Path<i64>,
) -> AppResult<(StatusCode, Json<Value>)> {
    if order_id < 1 {
        return Err(AppError::validation("Order ID must be a positive integer"));
    }

    let deleted = order_repo::delete_order(&state.pool, order_id, user.user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "orderId": deleted,
            "message": "Order deleted successfully",
        })),
    ))
}
