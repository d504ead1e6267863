use std::sync::Arc;

use business::application::client_config::get::GetClientConfigUseCaseImpl;
use business::domain::client_config::source::ConfigSource;
use logger::TracingLogger;

use crate::api::client_config::handler::ConfigHandler;

pub struct DependencyContainer {
    pub config_handler: Arc<ConfigHandler>,
}

impl DependencyContainer {
    /// Wires the handler over a source that stays read-only for the rest of
    /// the process.
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        let logger = Arc::new(TracingLogger::new("client_config"));

        let get_use_case = Arc::new(GetClientConfigUseCaseImpl { source, logger });

        Self {
            config_handler: Arc::new(ConfigHandler::new(get_use_case)),
        }
    }
}
