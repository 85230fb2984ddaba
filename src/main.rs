use clap::Parser;
use small_tools::utils::{logger, validation::Validate};
use small_tools::{CliConfig, DedupEngine, DedupPipeline, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = DedupPipeline::new(storage, config);
    let engine = DedupEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "Kept {} rows, output saved to: {}",
                report.kept,
                report.output_path
            );
            println!("Dropped {} duplicate rows", report.removed);
        }
        Err(e) => {
            tracing::error!("Deduplication failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
