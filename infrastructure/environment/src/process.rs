use std::env::{self, VarError};

use business::domain::client_config::source::ConfigSource;
use business::domain::errors::ConfigSourceError;

/// Reads straight from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvSource;

impl ConfigSource for ProcessEnvSource {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigSourceError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigSourceError::not_unicode(key)),
        }
    }
}
