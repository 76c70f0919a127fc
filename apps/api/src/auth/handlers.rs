use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};
use time::Duration;

use crate::errors::AppError;
use crate::state::AppState;

use super::ADMIN_COOKIE;

const SESSION_TTL: Duration = Duration::days(1);

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /api/auth/login
///
/// On success the session cookie is set HttpOnly + Secure + SameSite
/// Strict with a 24h expiry. A wrong password and a missing secret both
/// come back as opaque failures; only the server log distinguishes a
/// misconfiguration from a bad guess.
pub async fn handle_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    if state.config.admin_password.is_empty() || state.config.auth_token.is_empty() {
        // Fail closed: never compare against an empty secret.
        return Err(AppError::Config(
            "ADMIN_PASSWORD or AUTH_TOKEN is empty; denying all logins".to_string(),
        ));
    }

    if req.password != state.config.admin_password {
        return Err(AppError::InvalidPassword);
    }

    let session = Cookie::build((ADMIN_COOKIE, state.config.auth_token.clone()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(SESSION_TTL)
        .build();

    Ok((jar.add(session), Json(json!({ "success": true }))))
}

/// POST /api/auth/logout
///
/// Unconditional: clears the session cookie whether or not one was set.
pub async fn handle_logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let expired = Cookie::build((ADMIN_COOKIE, "")).path("/").build();
    (jar.remove(expired), Json(json!({ "success": true })))
}
