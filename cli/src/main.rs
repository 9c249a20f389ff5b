use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wtp_cli::{cli, commands};

// `ApiService` is `Rc`-based, so everything runs on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    commands::run(cli).await
}
