//! Shared state injected into request handlers.

use std::sync::Arc;

use crate::application::services::ExoplanetService;
use crate::domain::archive::ArchiveClient;

/// State shared by all handlers.
///
/// Holds no mutable data; cloning it only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub exoplanet_service: Arc<ExoplanetService<dyn ArchiveClient>>,
}

impl AppState {
    pub fn new(archive: Arc<dyn ArchiveClient>) -> Self {
        Self {
            exoplanet_service: Arc::new(ExoplanetService::new(archive)),
        }
    }
}
