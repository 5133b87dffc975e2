//! Axum route handler for the Audit API.

use axum::{extract::State, Json};

use crate::audit::auditor::AuditReport;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/audit
///
/// Audits a snapshot of the current profile. The store lock is released
/// before the generation call. Returns 409 while another audit is in flight.
pub async fn handle_audit(State(state): State<AppState>) -> Result<Json<AuditReport>, AppError> {
    let profile = state.profile.read().await.snapshot();

    let report = state
        .auditor
        .audit_exclusive(&profile)
        .await
        .ok_or_else(|| AppError::Conflict("An audit is already in progress".to_string()))?;

    Ok(Json(report))
}
