// ABOUTME: netbox-mcp binary - loads the catalog, then serves MCP on stdio.
// ABOUTME: Logs go to stderr; stdout is reserved for the protocol.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use netbox_mcp::catalog;
use netbox_mcp::client::ClientProvider;
use netbox_mcp::error::NetBoxMcpError;
use netbox_mcp::mcp::McpServer;
use netbox_mcp::registry::Registry;

#[tokio::main]
async fn main() -> Result<(), NetBoxMcpError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let registry = Registry::new();
    let loaded = catalog::load_all(&registry).await;
    let stats = registry.stats().await;
    tracing::info!(
        modules = loaded.len(),
        tools = stats.total_tools,
        prompts = stats.total_prompts,
        "catalog loaded"
    );

    let provider = Arc::new(ClientProvider::new());
    let server = McpServer::new(registry, provider);
    server.serve_stdio().await?;

    Ok(())
}
