use clap::{Parser, Subcommand};
use mapmatcher::app::map_matcher::MapMatcherAppError;
use mapmatcher_core::config::MapMatcherConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mapmatcher")]
#[command(about = "Configuration-driven map matching with STMATCH or FMM")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a configuration file, printing the validated configuration as JSON
    Validate {
        /// Path to a .json, .json5 or .toml configuration file
        config: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Validate { config } => validate(config),
    };
    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn validate(config_path: PathBuf) -> Result<(), MapMatcherAppError> {
    let config = MapMatcherConfig::from_file_with_diagnostics(&config_path, |d| {
        log::info!("{d}");
    })?;
    let json = serde_json::to_string_pretty(&config)?;
    println!("{json}");
    Ok(())
}
