//! Axum route handlers for the Profile API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{Experience, ExperienceUpdate, Profile, ProfileField, Skill};
use crate::profile::preview::{build_preview, PreviewCard};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SetFieldRequest {
    pub field: ProfileField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub name: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.read().await.snapshot())
}

/// PATCH /api/v1/profile
pub async fn handle_set_field(
    State(state): State<AppState>,
    Json(req): Json<SetFieldRequest>,
) -> Json<Profile> {
    let mut store = state.profile.write().await;
    store.set_field(req.field, req.value);
    Json(store.snapshot())
}

/// DELETE /api/v1/profile
pub async fn handle_reset(State(state): State<AppState>) -> StatusCode {
    state.profile.write().await.reset();
    StatusCode::NO_CONTENT
}

/// GET /api/v1/profile/preview
pub async fn handle_preview(State(state): State<AppState>) -> Json<PreviewCard> {
    Json(build_preview(state.profile.read().await.profile()))
}

/// POST /api/v1/profile/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> (StatusCode, Json<Experience>) {
    let entry = state.profile.write().await.add_experience();
    (StatusCode::CREATED, Json(entry))
}

/// PATCH /api/v1/profile/experience/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ExperienceUpdate>,
) -> Result<Json<Experience>, AppError> {
    let mut store = state.profile.write().await;
    let entry = store.update_experience(id, update)?;
    Ok(Json(entry.clone()))
}

/// POST /api/v1/profile/experience/:id/web3
pub async fn handle_toggle_web3(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Experience>, AppError> {
    let mut store = state.profile.write().await;
    let entry = store.toggle_web3_native(id)?;
    Ok(Json(entry.clone()))
}

/// DELETE /api/v1/profile/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.profile.write().await.remove_experience(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/profile/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(req): Json<AddSkillRequest>,
) -> Result<(StatusCode, Json<Skill>), AppError> {
    let skill = state.profile.write().await.add_skill(&req.name)?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// DELETE /api/v1/profile/skills/:id
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.profile.write().await.remove_skill(id)?;
    Ok(StatusCode::NO_CONTENT)
}
