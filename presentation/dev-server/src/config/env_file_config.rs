use std::path::PathBuf;
use std::sync::Arc;

use business::domain::client_config::source::ConfigSource;
use business::domain::errors::ConfigSourceError;
use environment::env_file;
use environment::layered::LayeredSource;
use environment::process::ProcessEnvSource;

const DEFAULT_ENV_FILE: &str = ".env";

/// Path of the local env file
///
/// Keys:
/// - ENV_FILE: Path to the env file (default: ".env")
pub fn env_file_path(source: &dyn ConfigSource) -> Result<PathBuf, ConfigSourceError> {
    Ok(source
        .get("ENV_FILE")?
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE)))
}

/// Build the configuration source for local development
///
/// Values already exported in the process environment win over the env
/// file. A missing env file is not an error.
pub fn init_config_source() -> Result<Arc<dyn ConfigSource>, ConfigSourceError> {
    let file_values = env_file::load_or_default(env_file_path(&ProcessEnvSource)?);
    tracing::debug!(entries = file_values.len(), "Loaded local env file");

    Ok(Arc::new(LayeredSource::new(ProcessEnvSource, file_values)))
}
