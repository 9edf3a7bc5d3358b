use anyhow::Context;
use network_mcp::{Config, NetworkServer, NetworkService, SnapshotStore};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    network_mcp::tracing::init();

    let config = Config::load().context("Failed to load configuration")?;
    let data_path = config.data_path();
    let store = SnapshotStore::load(&data_path)
        .await
        .with_context(|| format!("Failed to load network data from {}", data_path.display()))?;

    tracing::info!("Starting network-mcp MCP server");

    let server = NetworkServer::new(NetworkService::new(store, &config));
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
