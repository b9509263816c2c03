use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "irricalc",
    version,
    about = "Crop irrigation requirement calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute an irrigation schedule from a JSON request
    Calc {
        /// Request file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show baseline coefficients for a crop and soil
    Defaults {
        /// Crop name (configured default when omitted)
        #[arg(long)]
        crop: Option<String>,

        /// Soil name (configured default when omitted)
        #[arg(long)]
        soil: Option<String>,
    },
    /// Interactively write a config file
    Init,
    /// Validate the config file
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
