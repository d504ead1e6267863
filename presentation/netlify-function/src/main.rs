use std::sync::Arc;

use config_handler::setup::dependency_injection::DependencyContainer;
use environment::process::ProcessEnvSource;
use lambda_http::{Error, run, service_fn};

mod http_handler;
use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_tracing();

    // The platform injects configuration as plain environment variables
    let container = DependencyContainer::new(Arc::new(ProcessEnvSource));
    let config_handler = container.config_handler;

    run(service_fn(|event| function_handler(&config_handler, event))).await
}
