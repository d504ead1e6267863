use super::errors::ClientConfigError;

/// The five settings a Firebase web client needs to connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientConfigKey {
    ApiKey,
    AuthDomain,
    DatabaseUrl,
    ProjectId,
    StorageBucket,
}

impl ClientConfigKey {
    /// Name of the environment variable holding this setting.
    pub fn env_var(self) -> &'static str {
        match self {
            ClientConfigKey::ApiKey => "FIREBASE_API_KEY",
            ClientConfigKey::AuthDomain => "FIREBASE_AUTH_DOMAIN",
            ClientConfigKey::DatabaseUrl => "FIREBASE_DATABASE_URL",
            ClientConfigKey::ProjectId => "FIREBASE_PROJECT_ID",
            ClientConfigKey::StorageBucket => "FIREBASE_STORAGE_BUCKET",
        }
    }
}

impl std::fmt::Display for ClientConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.env_var())
    }
}

/// Raw values as read from a configuration source, before validation.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigProps {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub database_url: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub auth_domain: Option<String>,
    pub database_url: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
}

impl ClientConfig {
    /// Only the API key is required. The remaining values pass through
    /// untouched, including empty strings.
    pub fn new(props: ClientConfigProps) -> Result<Self, ClientConfigError> {
        let api_key = props
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or(ClientConfigError::NotFound)?;

        Ok(Self {
            api_key,
            auth_domain: props.auth_domain,
            database_url: props.database_url,
            project_id: props.project_id,
            storage_bucket: props.storage_bucket,
        })
    }
}

/// Presence of each setting, safe to log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentCheck {
    pub has_api_key: bool,
    pub has_auth_domain: bool,
    pub has_database: bool,
    pub has_project_id: bool,
    pub has_storage: bool,
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl From<&ClientConfigProps> for EnvironmentCheck {
    fn from(props: &ClientConfigProps) -> Self {
        Self {
            has_api_key: is_present(&props.api_key),
            has_auth_domain: is_present(&props.auth_domain),
            has_database: is_present(&props.database_url),
            has_project_id: is_present(&props.project_id),
            has_storage: is_present(&props.storage_bucket),
        }
    }
}

impl std::fmt::Display for EnvironmentCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hasApiKey: {}, hasAuthDomain: {}, hasDatabase: {}, hasProjectId: {}, hasStorage: {}",
            self.has_api_key,
            self.has_auth_domain,
            self.has_database,
            self.has_project_id,
            self.has_storage
        )
    }
}
