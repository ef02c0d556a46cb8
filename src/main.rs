//! Farmagate - pharmacy-management back end
//!
//! Serves the inventory, sales, customer, and report APIs behind the
//! role-based authorization and redaction core.

use clap::Parser;
use farmagate::{utils, Backend, Config};
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "farmagate", version, about)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "FARMAGATE_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    utils::logging::init(&config.logging);

    let result = match Backend::new(config) {
        Ok(backend) => backend.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn load_config(args: &Args) -> farmagate::Result<Config> {
    match &args.config {
        Some(path) => Config::from_file(path).await,
        None => Config::from_env(),
    }
}
