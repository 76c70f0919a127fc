use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::{Experience, ExperiencePatch};
use crate::state::AppState;

use super::DeleteQuery;

/// GET /api/experiences — public read, bare array.
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Experience>>, AppError> {
    Ok(Json(state.store.experiences().await?))
}

/// GET /api/admin/experiences — admin read, `{data, success}` envelope.
pub async fn list_admin(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let experiences = state.store.experiences().await?;
    Ok(Json(json!({ "data": experiences, "success": true })))
}

/// POST /api/admin/experiences
pub async fn upsert(
    State(state): State<AppState>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<Value>, AppError> {
    patch.validate()?;

    let mut experiences = state.store.experiences().await?;
    let existing = patch
        .id
        .as_deref()
        .and_then(|id| experiences.iter().position(|e| e.id.as_deref() == Some(id)));

    match existing {
        Some(i) => experiences[i] = patch.apply_to(&experiences[i])?,
        None => experiences.push(patch.into_record()?),
    }

    state.store.save_experiences(experiences).await?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/admin/experiences?id=...
pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<Value>, AppError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("Experience ID is required".to_string()))?;

    let mut experiences = state.store.experiences().await?;
    let before = experiences.len();
    experiences.retain(|e| e.id.as_deref() != Some(id.as_str()));
    if experiences.len() == before {
        return Err(AppError::NotFound("Experience not found".to_string()));
    }

    state.store.save_experiences(experiences).await?;
    Ok(Json(json!({ "success": true })))
}
