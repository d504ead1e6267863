use business::domain::client_config::source::ConfigSource;
use business::domain::errors::ConfigSourceError;

/// Looks a key up in `primary` first and falls back to `fallback` when the
/// primary value is missing or empty.
///
/// The local dev server layers the process environment over values read
/// from an env file, so variables already exported always win.
#[derive(Debug, Clone)]
pub struct LayeredSource<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> LayeredSource<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> ConfigSource for LayeredSource<P, F>
where
    P: ConfigSource,
    F: ConfigSource,
{
    fn get(&self, key: &str) -> Result<Option<String>, ConfigSourceError> {
        match self.primary.get(key)? {
            Some(value) if !value.is_empty() => Ok(Some(value)),
            // An empty primary value survives only if the fallback has nothing
            primary => Ok(self.fallback.get(key)?.or(primary)),
        }
    }
}
