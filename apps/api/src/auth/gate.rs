use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::errors::AppError;
use crate::state::AppState;

use super::ADMIN_COOKIE;

/// Middleware guarding the admin API. The request proceeds iff the
/// session cookie exactly equals the configured token; anything else is
/// a 401 and the handler is never reached. An empty configured token
/// denies everything (fail closed on misconfiguration).
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = state.config.auth_token.as_str();
    let authorized =
        !token.is_empty() && jar.get(ADMIN_COOKIE).map(|c| c.value()) == Some(token);

    if !authorized {
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(request).await)
}
