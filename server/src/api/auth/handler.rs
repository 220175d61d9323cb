use std::time::Duration;

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::auth::middleware::session_id_from_headers;
use crate::auth::session::{clear_session_cookie, session_cookie, AuthLevel};
use crate::auth::{totp, CurrentUser};
use crate::core::state::ServerState;
use crate::db::repository::user as user_repo;
use crate::utils::{AppError, AppResult};

/// Flattens the timing difference between unknown users and wrong
/// passwords.
const LOGIN_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct TotpRequest {
    pub code: String,
}

fn wrong_credentials() -> AppError {
    AppError::unauthorized("Wrong credentials, please try again")
}

pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Response> {
    payload
        .validate()
        .map_err(|_| AppError::validation("Username and password are required"))?;

    tokio::time::sleep(LOGIN_DELAY).await;

    let user = user_repo::find_by_email(&state.pool, &payload.username)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(wrong_credentials)?;

    let verified = user
        .verify_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !verified {
        return Err(wrong_credentials());
    }

    let session_id = state.sessions.create(user.id, &user.name, user.can_totp());
    tracing::info!(user_id = user.id, "User logged in");

    Ok((
        [(SET_COOKIE, session_cookie(&session_id))],
        Json(json!({ "name": user.name })),
    )
        .into_response())
}

/// Current-session probe. Always 200; an anonymous caller gets a marker
/// message instead of an error so clients can poll it freely.
pub async fn current(State(state): State<ServerState>, headers: HeaderMap) -> Json<Value> {
    let session = session_id_from_headers(&headers).and_then(|id| state.sessions.get(&id));
    match session {
        Some(session) => Json(json!({
            "id": session.user_id,
            "name": session.name,
            "canDoTotp": session.can_totp,
            "isTotp": session.level == AuthLevel::Elevated,
        })),
        None => Json(json!({ "message": "Unauthenticated user!" })),
    }
}

pub async fn logout(State(state): State<ServerState>, headers: HeaderMap) -> Response {
    if let Some(id) = session_id_from_headers(&headers) {
        state.sessions.remove(&id);
    }
    (
        [(SET_COOKIE, clear_session_cookie())],
        Json(json!({ "message": "Logged out" })),
    )
        .into_response()
}

pub async fn verify_totp(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<TotpRequest>,
) -> AppResult<Json<Value>> {
    let failed = || {
        AppError::unauthorized(
            "TOTP authentication failed. Make sure you have a TOTP secret configured \
             or provided a valid code.",
        )
    };

    let user = user_repo::find_by_id(&state.pool, current_user.user_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(failed)?;
    let secret = user.totp_secret.as_deref().ok_or_else(failed)?;

    let now = chrono::Utc::now().timestamp() as u64;
    if !totp::verify(secret, &payload.code, now) {
        return Err(failed());
    }

    if !state.sessions.elevate(&current_user.session_id) {
        return Err(AppError::unauthorized("User Not authenticated"));
    }
    tracing::info!(user_id = user.id, "Session elevated via TOTP");
    Ok(Json(json!({ "message": "TOTP verified successfully" })))
}
