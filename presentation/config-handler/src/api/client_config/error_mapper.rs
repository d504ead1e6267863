use http::StatusCode;

use business::domain::client_config::errors::ClientConfigError;

use crate::api::error::{CONFIG_NOT_FOUND, ErrorBody, INTERNAL_SERVER_ERROR, IntoErrorResponse};

impl IntoErrorResponse for ClientConfigError {
    fn into_error_response(self) -> (StatusCode, ErrorBody) {
        let message = match &self {
            ClientConfigError::NotFound => CONFIG_NOT_FOUND,
            // Source details stay in the logs
            ClientConfigError::Source(_) => INTERNAL_SERVER_ERROR,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(message))
    }
}
