//! # revalidd
//!
//! Entry point for the conditional-cache negotiation server. With no
//! flags it binds 127.0.0.1:8899 and serves `/test` with validator
//! token `777`; a JSON config file can override any of that.

use clap::Parser;
use revalid_rs::ServerConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "revalidd")]
#[command(about = "Conditional-cache negotiation server (ETag / If-None-Match)")]
struct Cli {
    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => ServerConfig::load(&path).await?,
        None => ServerConfig::default(),
    };
    if let Some(port) = cli.port {
        config.port = port;
    }

    revalid_rs::run_server(config).await
}
