use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use pairhub_server::{DEFAULT_MAX_FRAME_BYTES, DEFAULT_PORT, HubConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pairhub")]
#[command(about = "Two-seat signaling, editor and chat relay hub", version)]
struct Cli {
    #[arg(long, env = "PAIRHUB_HOST", default_value = "0.0.0.0")]
    host: String,

    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Largest inbound WebSocket message accepted, in bytes.
    #[arg(long, env = "PAIRHUB_MAX_FRAME_BYTES", default_value_t = DEFAULT_MAX_FRAME_BYTES)]
    max_frame_bytes: usize,

    /// Tracing filter directive, e.g. `info` or `pairhub_server=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log: String,
}

impl Cli {
    fn hub_config(&self) -> HubConfig {
        HubConfig {
            host: self.host.clone(),
            port: self.port,
            max_frame_bytes: self.max_frame_bytes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log)
        .with_context(|| format!("Invalid log filter '{}'", cli.log))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.hub_config();
    let addr = config.socket_addr().context("Invalid listen address")?;

    println!("{}", "🚀 Starting pairhub...".green().bold());
    println!("   🔌 WebSocket: ws://{}/ws", addr);
    println!("   ❤️  Health:    http://{}/health", addr);

    pairhub_server::serve(config, shutdown_signal())
        .await
        .context("Hub terminated with an error")?;

    info!("Bye");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
