use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::{Skill, SkillPatch};
use crate::state::AppState;

use super::DeleteQuery;

/// GET /api/skills — public read, bare array.
pub async fn list_public(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(state.store.skills().await?))
}

/// GET /api/admin/skills — admin read, `{data, success}` envelope.
pub async fn list_admin(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let skills = state.store.skills().await?;
    Ok(Json(json!({ "data": skills, "success": true })))
}

/// POST /api/skills and /api/admin/skills
///
/// A matching id updates the stored record in place (shallow merge);
/// a missing or unmatched id appends the candidate as a new record.
pub async fn upsert(
    State(state): State<AppState>,
    Json(patch): Json<SkillPatch>,
) -> Result<Json<Value>, AppError> {
    patch.validate()?;

    let mut skills = state.store.skills().await?;
    let existing = patch
        .id
        .as_deref()
        .and_then(|id| skills.iter().position(|s| s.id.as_deref() == Some(id)));

    match existing {
        Some(i) => skills[i] = patch.apply_to(&skills[i])?,
        None => skills.push(patch.into_record()?),
    }

    state.store.save_skills(skills).await?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/admin/skills?id=...
pub async fn delete(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<Value>, AppError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("Skill ID is required".to_string()))?;

    let mut skills = state.store.skills().await?;
    let before = skills.len();
    skills.retain(|s| s.id.as_deref() != Some(id.as_str()));
    if skills.len() == before {
        return Err(AppError::NotFound("Skill not found".to_string()));
    }

    state.store.save_skills(skills).await?;
    Ok(Json(json!({ "success": true })))
}
