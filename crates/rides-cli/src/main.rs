use anyhow::Result;
use clap::Parser;
use tracing::info;

use rides_cli::{cli::Cli, load_config, logging, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    logging::init_logging(&config.logging)?;

    info!("Starting rides v{}", env!("CARGO_PKG_VERSION"));

    serve(config).await
}
