#[derive(Debug, thiserror::Error)]
pub enum ClientConfigError {
    #[error("client_config.not_found")]
    NotFound,
    #[error("client_config.internal")]
    Source(#[from] crate::domain::errors::ConfigSourceError),
}
