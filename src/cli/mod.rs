pub mod commands;

use clap::Parser;

pub use commands::Commands;

/// Tally — aggregate, deduplicate and query analysis reports
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "📋 Tally — aggregate analysis reports",
    long_about = "Tally merges JSON issue reports from analysis tools, drops duplicate issues,\nand summarizes or groups what is left."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
