use http::StatusCode;
use serde::Deserialize;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const CONFIG_NOT_FOUND: &str = "Firebase configuration not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({ "error": self.error }).to_string()
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, ErrorBody);
}
