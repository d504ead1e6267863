use crate::domain::client_config::errors::ClientConfigError;
use crate::domain::client_config::model::ClientConfig;

pub trait GetClientConfigUseCase: Send + Sync {
    fn execute(&self) -> Result<ClientConfig, ClientConfigError>;
}
