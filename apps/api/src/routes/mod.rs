pub mod experiences;
pub mod health;
pub mod projects;
pub mod skills;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::auth;
use crate::state::AppState;

/// Query shape shared by the delete endpoints (`?id=...`).
#[derive(Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    let admin = Router::new()
        .route(
            "/skills",
            get(skills::list_admin)
                .post(skills::upsert)
                .delete(skills::delete),
        )
        .route(
            "/experiences",
            get(experiences::list_admin)
                .post(experiences::upsert)
                .delete(experiences::delete),
        )
        .route(
            "/projects",
            get(projects::list_admin)
                .post(projects::upsert)
                .delete(projects::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    Router::new()
        .route("/health", get(health::health_handler))
        // Public reads. The skills upsert has always been reachable
        // without a session and stays that way.
        .route("/api/skills", get(skills::list_public).post(skills::upsert))
        .route("/api/experiences", get(experiences::list_public))
        .route("/api/projects", get(projects::list_public))
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/logout", post(auth::handle_logout))
        .nest("/api/admin", admin)
        .with_state(state)
}
