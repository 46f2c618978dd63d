use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use workforced::{config::ServerConfig, rest, AppContext};

#[derive(Parser)]
#[command(
    name = "workforced",
    about = "Workforce task tracking daemon — lifecycle, audit trail, smart daily views",
    version
)]
struct Args {
    /// REST API port
    #[arg(long, env = "WORKFORCED_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "WORKFORCED_BIND")]
    bind_address: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "WORKFORCED_LOG")]
    log: Option<String>,

    /// Optional TOML config file with a [server] table
    #[arg(long, env = "WORKFORCED_CONFIG")]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServerConfig::new(args.port, args.bind_address, args.log, args.config.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(config.log.clone())
        .compact()
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), port = config.port, "workforced starting");

    let ctx = Arc::new(AppContext::new(config));
    rest::start_rest_server(ctx).await
}
