//! Daemon entry point for the fmp-mcp server.
//!
//! Loads configuration from the environment, builds the FMP control plane,
//! and serves the MCP protocol over stdio or streamable HTTP.

mod config;

use fmp_core::client::FmpClient;
use fmp_core::control::FmpControlPlane;
use fmp_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

fn init_tracing() {
    // The stdio transport owns stdout; logs must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fmp_mcpd=info,fmp_core=info,fmp_mcp=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let config = ServerConfig::from_args()?;

    println!("Starting Financial Modeling Prep MCP Server...");
    if config.api_key.is_none() {
        println!("Warning: FMP_API_KEY environment variable not set!");
        println!("Please set your API key: export FMP_API_KEY='your_api_key_here'");
        warn!("FMP_API_KEY is not set; every lookup will report a configuration error");
    } else {
        println!("API key found, server ready!");
    }

    let client = FmpClient::new(config.fmp_config())?;
    let control = FmpControlPlane::new(client);

    if config.enable_stdio {
        info!("serving MCP over stdio");
        serve_stdio(control).await?;
    } else {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr);
        info!(addr = %http_config.addr, "serving MCP over streamable HTTP");
        serve_streamable_http(control, http_config).await?;
    }
    Ok(())
}
