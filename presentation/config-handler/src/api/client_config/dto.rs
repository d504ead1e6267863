use serde::{Deserialize, Serialize};

use business::domain::client_config::model::ClientConfig;

/// Client config as the Firebase web SDK expects it. Unset optional values
/// are left out of the JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigResponse {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(rename = "databaseURL", default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
}

impl From<ClientConfig> for ClientConfigResponse {
    fn from(config: ClientConfig) -> Self {
        Self {
            api_key: config.api_key,
            auth_domain: config.auth_domain,
            database_url: config.database_url,
            project_id: config.project_id,
            storage_bucket: config.storage_bucket,
        }
    }
}
