use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::{display_ordering, Project, ProjectPatch};
use crate::state::AppState;

use super::DeleteQuery;

/// GET /api/projects — public read, bare array in display order.
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let mut projects = state.store.projects().await?;
    projects.sort_by(display_ordering);
    Ok(Json(projects))
}

/// GET /api/admin/projects — admin read in stored (insertion) order,
/// `{data, success}` envelope.
pub async fn list_admin(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let projects = state.store.projects().await?;
    Ok(Json(json!({ "data": projects, "success": true })))
}

/// POST /api/admin/projects
pub async fn upsert(
    State(state): State<AppState>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<Value>, AppError> {
    patch.validate()?;

    let mut projects = state.store.projects().await?;
    let existing = patch
        .id
        .as_deref()
        .and_then(|id| projects.iter().position(|p| p.id.as_deref() == Some(id)));

    match existing {
        Some(i) => projects[i] = patch.apply_to(&projects[i]),
        None => projects.push(patch.into_record()?),
    }

    state.store.save_projects(projects).await?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/admin/projects?id=...
pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<Value>, AppError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("Project ID is required".to_string()))?;

    let mut projects = state.store.projects().await?;
    let before = projects.len();
    projects.retain(|p| p.id.as_deref() != Some(id.as_str()));
    if projects.len() == before {
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    state.store.save_projects(projects).await?;
    Ok(Json(json!({ "success": true })))
}
