//! SuperMaids CLI - load the cleaning company database and print its reports

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use supermaids::config::SupermaidsConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "supermaids")]
#[command(version)]
#[command(about = "SuperMaids cleaning company database - schema, sample data and canned reports")]
#[command(long_about = r#"
Creates the SuperMaids schema in a SQLite database, loads the sample
dataset and prints the five canned transactions:
  1. All clients and their requirements
  2. Equipment needed for requirement #1
  3. Employees assigned to requirement #1
  4. All requirements for client #4
  5. Employees AND equipment for requirement #1

Example usage:
  supermaids
  supermaids --database jobs.db query 4
  supermaids stats
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputMode::Human)]
    format: OutputMode,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset, seed and print all five transactions (default)
    Run {
        /// Keep existing tables instead of dropping them first
        #[arg(long)]
        no_reset: bool,
    },

    /// Reset the schema and load the sample data only
    Load,

    /// Print a single transaction from an already loaded database
    Query {
        /// Transaction number (1-5)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        number: u8,
    },

    /// Show row counts and check referential integrity
    Stats,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let command = cli.command.unwrap_or(Commands::Run { no_reset: false });
    let outcome = match command {
        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(supermaids::config::default_config_path);
            commands::run_init(&path, cli.database, force)
        }
        Commands::Run { no_reset } => resolve(cli.config.as_deref(), cli.database).and_then(
            |(config, database)| commands::run_all(&database, config.reset() && !no_reset, cli.format),
        ),
        Commands::Load => resolve(cli.config.as_deref(), cli.database)
            .and_then(|(_, database)| commands::run_load(&database, cli.format)),
        Commands::Query { number } => resolve(cli.config.as_deref(), cli.database)
            .and_then(|(_, database)| commands::run_query(&database, number, cli.format)),
        Commands::Stats => resolve(cli.config.as_deref(), cli.database)
            .and_then(|(_, database)| commands::run_stats(&database, cli.format)),
    };

    if let Err(e) = &outcome {
        if let Some(err @ supermaids::Error::Connection { .. }) = e.downcast_ref::<supermaids::Error>() {
            println!("Error connecting to database: {}", err);
            std::process::exit(1);
        }
    }
    outcome
}

/// Load the config file and pick the database path (flag beats file)
fn resolve(config: Option<&Path>, database: Option<PathBuf>) -> anyhow::Result<(SupermaidsConfig, PathBuf)> {
    let config = supermaids::config::load_config(config)?.unwrap_or_default();
    let database = database.unwrap_or_else(|| config.database_path());
    Ok((config, database))
}
