use std::sync::Arc;

use crate::application::services::metadata_service::MetadataService;
use crate::application::services::text_service::TextService;
use crate::infrastructure::config::AppConfig;

mod bootstrap;

/// Read-only state shared by every request handler.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub text_service: Arc<TextService>,
    pub metadata_service: Arc<MetadataService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        tracing::info!(
            "Initializing application state for participant {}",
            config.participant_name
        );

        let config = Arc::new(config);
        let services = bootstrap::build_services(&config);

        Self {
            config,
            text_service: services.text_service,
            metadata_service: services.metadata_service,
        }
    }
}
