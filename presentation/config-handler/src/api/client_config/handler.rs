use std::sync::Arc;

use http::{Method, StatusCode};

use business::domain::client_config::use_cases::get::GetClientConfigUseCase;

use crate::api::client_config::dto::ClientConfigResponse;
use crate::api::error::{ErrorBody, INTERNAL_SERVER_ERROR, IntoErrorResponse, METHOD_NOT_ALLOWED};
use crate::api::message::{HandlerRequest, HandlerResponse};

/// Serves the Firebase web client config to browsers.
///
/// - `OPTIONS`: CORS preflight, `200` with an empty body
/// - `GET`: the client config, or a `500` when it is unavailable
/// - anything else: `405`
pub struct ConfigHandler {
    get_use_case: Arc<dyn GetClientConfigUseCase>,
}

impl ConfigHandler {
    pub fn new(get_use_case: Arc<dyn GetClientConfigUseCase>) -> Self {
        Self { get_use_case }
    }

    pub fn handle(&self, request: &HandlerRequest) -> HandlerResponse {
        if request.method == Method::OPTIONS {
            return HandlerResponse::empty(StatusCode::OK);
        }

        if request.method != Method::GET {
            return error_response(
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody::new(METHOD_NOT_ALLOWED),
            );
        }

        self.get_client_config()
    }

    fn get_client_config(&self) -> HandlerResponse {
        let config = match self.get_use_case.execute() {
            Ok(config) => config,
            Err(err) => {
                let (status, body) = err.into_error_response();
                return error_response(status, body);
            }
        };

        match serde_json::to_string(&ClientConfigResponse::from(config)) {
            Ok(body) => HandlerResponse::new(StatusCode::OK, body),
            Err(e) => {
                tracing::error!("Failed to serialize client config: {e}");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(INTERNAL_SERVER_ERROR),
                )
            }
        }
    }
}

fn error_response(status: StatusCode, body: ErrorBody) -> HandlerResponse {
    HandlerResponse::new(status, body.to_json())
}
