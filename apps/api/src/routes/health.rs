use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and whether the
/// auditor has a credential.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let auditor = if state.config.has_api_key() {
        "configured"
    } else {
        "no_api_key"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "vibecode-api",
        "auditor": auditor,
        "audit_in_flight": state.auditor.is_busy(),
    }))
}
