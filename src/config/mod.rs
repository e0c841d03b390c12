pub mod cli;
pub mod outline;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-kata")]
#[command(about = "FizzBuzz counting and classroom walkthrough rendering")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Classify values FizzBuzz-style (integers, decimals, text, or ranges like 1..20)
    Count {
        #[arg(required = true, allow_hyphen_values = true, allow_negative_numbers = true)]
        tokens: Vec<String>,

        /// Print a JSON array instead of a comma-separated line
        #[arg(long)]
        json: bool,
    },

    /// Render a walkthrough outline (TOML) to markup
    Render {
        /// Path to the outline file
        outline: String,

        /// Write the markup to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}
