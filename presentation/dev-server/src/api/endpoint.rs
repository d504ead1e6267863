use std::sync::Arc;

use poem::middleware::Tracing;
use poem::web::Data;
use poem::{Endpoint, EndpointExt, Request, Response, handler};

use config_handler::api::client_config::handler::ConfigHandler;
use config_handler::api::message::HandlerRequest;

/// Forwards every request, whatever its path, to the config handler and
/// writes its status, headers and body back untouched.
#[handler]
fn serve(req: &Request, Data(config_handler): Data<&Arc<ConfigHandler>>) -> Response {
    let request = HandlerRequest::new(req.method().clone(), req.headers().clone());
    let result = config_handler.handle(&request);

    let mut response = Response::builder().status(result.status).body(result.body);
    *response.headers_mut() = result.headers;
    response
}

pub fn app(config_handler: Arc<ConfigHandler>) -> impl Endpoint {
    serve.data(config_handler).with(Tracing)
}
