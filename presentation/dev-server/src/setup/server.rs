use poem::{Server as PoemServer, listener::TcpListener};

use config_handler::setup::dependency_injection::DependencyContainer;

use crate::{api::endpoint::app, config::app_config::AppConfig};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = app(container.config_handler);

        tracing::info!(
            "Local server running at {} (bound to {})",
            config.server.local_url(),
            addr
        );
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
