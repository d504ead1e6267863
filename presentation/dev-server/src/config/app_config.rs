use business::domain::client_config::source::ConfigSource;
use business::domain::errors::ConfigSourceError;

use super::server_config::ServerConfig;

pub struct AppConfig {
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigSourceError> {
        Ok(Self {
            server: ServerConfig::from_source(source)?,
        })
    }
}
