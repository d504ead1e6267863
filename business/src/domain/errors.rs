/// Configuration source errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ConfigSourceError {
    #[error("config_source.not_unicode: {key}")]
    NotUnicode { key: String },
}

impl ConfigSourceError {
    pub fn not_unicode(key: impl Into<String>) -> Self {
        ConfigSourceError::NotUnicode { key: key.into() }
    }
}
