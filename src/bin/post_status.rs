use clap::Parser;
use small_tools::utils::{logger, validation::Validate};
use small_tools::{StatusClient, StatusConfig};

#[derive(Debug, Parser)]
#[command(name = "post-status")]
#[command(about = "Post a single status update to the configured social-media API")]
struct Args {
    /// Text of the status update
    message: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let config = match StatusConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = StatusClient::new(config);

    match client.post_status(&args.message).await {
        Ok(posted) => {
            println!("✅ Status posted with id {}", posted.data.id);
        }
        Err(e) => {
            tracing::error!("Failed to post status: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
