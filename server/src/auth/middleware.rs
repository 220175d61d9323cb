use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use super::session::{AuthLevel, SESSION_COOKIE};
use crate::core::state::ServerState;
use crate::utils::{AppError, AppResult};

/// Authenticated caller, injected into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session_id: String,
    pub user_id: i64,
    pub name: String,
    pub can_totp: bool,
    pub level: AuthLevel,
}

/// Extract the session cookie value, if present.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Reject requests without a live session; attach [`CurrentUser`] for the
/// handlers downstream.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let session_id = session_id_from_headers(req.headers())
        .ok_or_else(|| AppError::unauthorized("User Not authenticated"))?;
    let session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| AppError::unauthorized("User Not authenticated"))?;

    req.extensions_mut().insert(CurrentUser {
        session_id,
        user_id: session.user_id,
        name: session.name,
        can_totp: session.can_totp,
        level: session.level,
    });
    Ok(next.run(req).await)
}

/// Reject sessions that have not completed TOTP verification. Must run
/// inside a [`require_auth`] layer.
pub async fn require_elevated(req: Request, next: Next) -> AppResult<Response> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(|| AppError::unauthorized("User Not authenticated"))?;
    if user.level != AuthLevel::Elevated {
        return Err(AppError::unauthorized("Missing TOTP authentication"));
    }
    Ok(next.run(req).await)
}

// ========== Tests ==========
