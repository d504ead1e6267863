use business::domain::client_config::source::ConfigSource;
use business::domain::errors::ConfigSourceError;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8888";

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from a configuration source
    ///
    /// Keys:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - PORT: Port to bind (default: "8888")
    ///
    /// Empty values count as unset.
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigSourceError> {
        let read = |key: &str, default: &str| -> Result<String, ConfigSourceError> {
            Ok(source
                .get(key)?
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string()))
        };

        Ok(Self {
            ip: read("SERVICE_IP", DEFAULT_IP)?,
            port: read("PORT", DEFAULT_PORT)?,
        })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    /// URL printed for humans once the server is up
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
