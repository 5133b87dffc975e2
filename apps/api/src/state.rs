use std::sync::Arc;

use tokio::sync::RwLock;

use crate::audit::Auditor;
use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::profile::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single owned profile. All writes go through `ProfileStore`.
    pub profile: Arc<RwLock<ProfileStore>>,
    pub auditor: Arc<Auditor>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            profile: Arc::new(RwLock::new(ProfileStore::new())),
            auditor: Arc::new(Auditor::new(generator)),
            config,
        }
    }
}
