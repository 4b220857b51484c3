//! shop - storefront command-line client
//!
//! # Examples
//!
//! ```bash
//! # Sign in (the session is stored under .shop/session/)
//! shop login --username alice --password secret
//!
//! # Browse and shop
//! shop home hot --pretty
//! shop cart add
//!
//! # Ask about a product
//! shop question ask 42 --content "Is it waterproof?"
//! ```

use shop_cli::{App, Cli, CliResult, StderrNotifier, initialize_logger};
use shop_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_unauthorized() {
                eprintln!();
                eprintln!("Your session may have expired. Log in again:");
                eprintln!("  shop login --username <name>");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    let mut config = Config::load()?;

    if let Some(server) = cli.server {
        config.api.base_url = server;
    }

    config.validate()?;

    let log_file = config.logging.file.as_ref().map(PathBuf::from);
    initialize_logger(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let mut app = App::from_config(&config, StderrNotifier)?;
    let value = app.execute(cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(output)
}
