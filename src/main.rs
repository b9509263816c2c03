use anyhow::Context;
use clap::Parser;
use irricalc::cli::{Cli, Commands, OutputFormat};
use irricalc::config::Config;
use irricalc::models::CalculationInput;
use irricalc::{report, IrrigationEngine};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init => {
            Config::setup_interactive()?;
            Ok(())
        }
        Commands::Check => {
            Config::load(cli.config).context("Configuration check failed")?;
            println!("Configuration OK");
            Ok(())
        }
        Commands::Defaults { crop, soil } => {
            let engine = build_engine(cli.config)?;
            let defaults = engine.configured_defaults(crop.as_deref(), soil.as_deref());
            println!("{}", serde_json::to_string_pretty(&defaults)?);
            Ok(())
        }
        Commands::Calc { input, format } => {
            let engine = build_engine(cli.config)?;
            let payload = read_payload(input)?;
            let request = CalculationInput::from_json_with(&payload, engine.input_defaults())?;
            let result = engine.compute(&request);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => println!("{}", report::render_text(&request, &result)),
            }
            Ok(())
        }
    }
}

fn build_engine(config_path: Option<PathBuf>) -> anyhow::Result<IrrigationEngine> {
    let config = Config::load(config_path)?;
    let input_defaults = config.defaults.to_input_defaults();
    Ok(IrrigationEngine::new(config.tables).with_input_defaults(input_defaults))
}

fn read_payload(path: Option<PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(&p)
            .with_context(|| format!("Failed to read request from {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            Ok(buf)
        }
    }
}
