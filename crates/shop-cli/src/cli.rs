use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shop")]
#[command(about = "Storefront command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
