//! worldgeo CLI
//!
//! Runs one intent against a world database file and prints its outcomes.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use worldgeo_core::logging_facility::{self, Profile};
use worldgeo_engine::{Engine, EngineConfig, Intent, Outcome};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "worldgeo")]
#[command(about = "worldgeo - continents, countries and regions in SQLite", long_about = None)]
struct Cli {
    /// Store file to open
    #[arg(long, global = true, default_value = "world.db")]
    db: PathBuf,

    /// Engine settings (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    /// Print each outcome as a JSON object
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Continent operations
    Continent(commands::continent::ContinentArgs),
    /// Country operations
    Country(commands::country::CountryArgs),
    /// Region operations
    Region(commands::region::RegionArgs),
}

fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_toml_file(path)?,
        None => EngineConfig::default(),
    };

    let intent = match cli.command {
        Commands::Continent(args) => commands::continent::intent(args),
        Commands::Country(args) => commands::country::intent(args),
        Commands::Region(args) => commands::region::intent(args),
    };

    tracing::debug!(db = %cli.db.display(), json = cli.json, "worldgeo cli");
    let mut engine = Engine::new(config);
    let mut outcomes = engine.process(Intent::OpenStore { path: cli.db });
    if !outcomes.iter().any(Outcome::is_failure) {
        outcomes = engine.process(intent);
        engine.process(Intent::Quit);
    }

    for outcome in &outcomes {
        if cli.json {
            println!("{}", serde_json::to_string(outcome)?);
        } else {
            println!("{}", commands::render::outcome_line(outcome));
        }
    }

    Ok(!outcomes.iter().any(Outcome::is_failure))
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(match cli.log_format {
        LogFormat::Human => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
