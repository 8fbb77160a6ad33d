use std::sync::Arc;

use crate::config::Config;
use crate::roadmap::catalog::RoadmapSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Role template source, chosen once at startup. Default: the embedded catalog.
    pub roadmaps: Arc<dyn RoadmapSource>,
}
