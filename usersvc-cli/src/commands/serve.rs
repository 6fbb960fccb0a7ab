//! HTTP server command
//!
//! Runs the users API with a freshly seeded in-memory store.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use usersvc_server::{run_server, MemoryUserStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "USERSVC_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Don't mount the Swagger UI and OpenAPI document
    #[arg(long)]
    pub no_docs: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

impl ServeArgs {
    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            docs: !self.no_docs,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.config();
    tracing::info!("Starting usersvc on {}", args.bind);

    let store = Arc::new(MemoryUserStore::seeded());

    run_server(store, config)
        .await
        .with_context(|| format!("Server error on {}", args.bind))?;

    Ok(())
}
