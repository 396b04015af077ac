//! Gridpilot server binary.
//!
//! # Usage
//!
//! ```bash
//! # Listen on the default robot port
//! gridpilot-server
//!
//! # Bind elsewhere with chattier logging
//! gridpilot-server --bind 127.0.0.1:4040 --log-level debug
//! ```

use clap::Parser;
use gridpilot_server::{Server, ServerConfig, DEFAULT_BIND};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Gridpilot robot-control server
#[derive(Parser, Debug)]
#[command(name = "gridpilot-server")]
#[command(about = "TCP server that pilots remote robots to their pickup point")]
#[command(version)]
struct Args {
    /// Address to bind to
    #[arg(short, long, default_value = DEFAULT_BIND)]
    bind: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    tracing::info!("gridpilot server starting");

    let config = ServerConfig { bind_address: args.bind };
    let server = Server::bind(&config).await?;

    tracing::info!("server listening on {}", server.local_addr()?);

    server.run().await?;

    tracing::info!("server shut down");

    Ok(())
}
