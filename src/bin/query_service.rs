use anyhow::Result;
use inventory_assistant::{config, server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
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
        "Starting query service using {:?} model {}",
        config.llm.provider,
        config.llm.effective_model()
    );

    server::query::run(config).await?;

    Ok(())
}
