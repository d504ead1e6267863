mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, env_file_config};
use config_handler::setup::dependency_injection::DependencyContainer;
use setup::server::Server;

/// Local Dev Server Entry Point
///
/// Serves the Firebase client config handler over plain HTTP so it can be
/// exercised outside the serverless host.
///
/// - config/: Server settings and the local env file
/// - setup/: Server setup
/// - api/: The catch-all endpoint forwarding to the shared handler
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    logger::init_tracing();

    // 2. Layer the process environment over the local env file
    let source = env_file_config::init_config_source()?;

    // 3. Load configuration
    let config = AppConfig::from_source(source.as_ref())?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(source);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
