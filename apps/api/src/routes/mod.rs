pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::audit::handlers as audit;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile)
                .patch(profile::handle_set_field)
                .delete(profile::handle_reset),
        )
        .route("/api/v1/profile/preview", get(profile::handle_preview))
        .route(
            "/api/v1/profile/experience",
            post(profile::handle_add_experience),
        )
        .route(
            "/api/v1/profile/experience/:id",
            patch(profile::handle_update_experience).delete(profile::handle_remove_experience),
        )
        .route(
            "/api/v1/profile/experience/:id/web3",
            post(profile::handle_toggle_web3),
        )
        .route("/api/v1/profile/skills", post(profile::handle_add_skill))
        .route(
            "/api/v1/profile/skills/:id",
            delete(profile::handle_remove_skill),
        )
        // Audit API
        .route("/api/v1/audit", post(audit::handle_audit))
        .with_state(state)
}
