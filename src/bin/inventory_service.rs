use anyhow::Result;
use inventory_assistant::{config, server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = telemetry::init_tracing(&config.logs.level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!(
        "Starting inventory service with seed tshirts={} pants={}",
        config.inventory.seed.tshirts, config.inventory.seed.pants
    );

    server::inventory::run(config).await?;

    Ok(())
}
