use maps_proxy::proxy::ProxyServer;
use maps_proxy::{logger, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let config = Config::from_env();
    config.log();

    let (server, handle) = ProxyServer::start(config).await?;

    tokio::signal::ctrl_c().await?;
    info!("Received Ctrl+C, shutting down");

    server.stop();
    handle.await?;

    Ok(())
}
