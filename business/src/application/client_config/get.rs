use std::sync::Arc;

use crate::domain::client_config::errors::ClientConfigError;
use crate::domain::client_config::model::{
    ClientConfig, ClientConfigKey, ClientConfigProps, EnvironmentCheck,
};
use crate::domain::client_config::source::ConfigSource;
use crate::domain::client_config::use_cases::get::GetClientConfigUseCase;
use crate::domain::logger::Logger;

pub struct GetClientConfigUseCaseImpl {
    pub source: Arc<dyn ConfigSource>,
    pub logger: Arc<dyn Logger>,
}

impl GetClientConfigUseCaseImpl {
    fn read(&self, key: ClientConfigKey) -> Result<Option<String>, ClientConfigError> {
        self.source.get(key.env_var()).map_err(|e| {
            self.logger
                .error(&format!("Failed to read {}: {}", key, e));
            ClientConfigError::from(e)
        })
    }
}

impl GetClientConfigUseCase for GetClientConfigUseCaseImpl {
    fn execute(&self) -> Result<ClientConfig, ClientConfigError> {
        let props = ClientConfigProps {
            api_key: self.read(ClientConfigKey::ApiKey)?,
            auth_domain: self.read(ClientConfigKey::AuthDomain)?,
            database_url: self.read(ClientConfigKey::DatabaseUrl)?,
            project_id: self.read(ClientConfigKey::ProjectId)?,
            storage_bucket: self.read(ClientConfigKey::StorageBucket)?,
        };

        // Presence only, values stay out of the logs
        let check = EnvironmentCheck::from(&props);
        self.logger.info(&format!("Environment check: {}", check));

        ClientConfig::new(props).inspect_err(|_| {
            self.logger.warn(&format!(
                "Client config unavailable: {} is not set",
                ClientConfigKey::ApiKey
            ));
        })
    }
}
