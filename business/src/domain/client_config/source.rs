use crate::domain::errors::ConfigSourceError;

/// Read-only key lookup capability.
///
/// Built once at process start and shared for the lifetime of the process.
/// Implementations live in the infrastructure layer (process environment,
/// env files, in-memory maps).
pub trait ConfigSource: Send + Sync {
    /// Returns `Ok(None)` when the key is not set.
    fn get(&self, key: &str) -> Result<Option<String>, ConfigSourceError>;
}
