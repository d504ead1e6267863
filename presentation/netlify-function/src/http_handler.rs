use lambda_http::{Body, Error, Request, Response};

use config_handler::api::client_config::handler::ConfigHandler;
use config_handler::api::message::HandlerRequest;

/// Translates a platform event into a handler request and back.
pub(crate) async fn function_handler(
    config_handler: &ConfigHandler,
    event: Request,
) -> Result<Response<Body>, Error> {
    let request = HandlerRequest::new(event.method().clone(), event.headers().clone());

    let response = config_handler.handle(&request).into_http().map(|body| {
        if body.is_empty() {
            Body::Empty
        } else {
            Body::from(body)
        }
    });

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use business::domain::client_config::source::ConfigSource;
    use config_handler::setup::dependency_injection::DependencyContainer;
    use environment::memory::MapSource;
    use lambda_http::http::{Method, StatusCode};

    fn config_handler(values: &[(&str, &str)]) -> Arc<ConfigHandler> {
        let source: Arc<dyn ConfigSource> =
            Arc::new(values.iter().copied().collect::<MapSource>());
        DependencyContainer::new(source).config_handler
    }

    fn event(method: Method) -> Request {
        lambda_http::http::Request::builder()
            .method(method)
            .uri("/.netlify/functions/firebase-config")
            .body(Body::Empty)
            .unwrap()
    }

    fn text(body: &Body) -> &str {
        match body {
            Body::Text(text) => text.as_str(),
            Body::Empty => "",
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_answer_preflight() {
        let handler = config_handler(&[]);

        let response = function_handler(&handler, event(Method::OPTIONS))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(text(response.body()), "");
    }

    #[tokio::test]
    async fn should_return_config_on_get() {
        let handler = config_handler(&[("FIREBASE_API_KEY", "k1")]);

        let response = function_handler(&handler, event(Method::GET))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(text(response.body()), r#"{"apiKey":"k1"}"#);
    }

    #[tokio::test]
    async fn should_reject_post() {
        let handler = config_handler(&[("FIREBASE_API_KEY", "k1")]);

        let response = function_handler(&handler, event(Method::POST))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(text(response.body()), r#"{"error":"Method not allowed"}"#);
    }
}
