use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skirun_core::config::StoreConfig;
use skirun_core::ski_run::{SkiRun, SkiRunRepository};
use skirun_infrastructure::{ConfigService, XmlSkiRunRepository};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "skirun")]
#[command(about = "SkiRun CLI - manage ski run records stored in an XML file", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/skirun/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data file, overriding the config file
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty data file if none exists
    Init,
    #[command(flatten)]
    Store(StoreCommand),
}

#[derive(Subcommand)]
enum StoreCommand {
    /// List every ski run
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show the ski run with the given ID
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i32,
        #[arg(long)]
        json: bool,
    },
    /// Add a ski run
    Add {
        /// Negative IDs are allowed
        #[arg(allow_negative_numbers = true)]
        id: i32,
        name: String,
        /// Vertical drop in feet
        #[arg(allow_negative_numbers = true)]
        vertical: i32,
    },
    /// Replace the ski run(s) with the given ID
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i32,
        name: String,
        #[arg(allow_negative_numbers = true)]
        vertical: i32,
    },
    /// Delete every ski run with the given ID
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    /// List ski runs whose vertical drop is within [MIN, MAX]
    Query {
        #[arg(allow_negative_numbers = true)]
        min: i32,
        #[arg(allow_negative_numbers = true)]
        max: i32,
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let store_config = config_service.resolve_store_config(cli.data_file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Init => commands::init::run(store_config.data_file(), &mut out),
        Commands::Store(command) => run_store_command(command, store_config, &mut out),
    }
}

fn run_store_command(
    command: StoreCommand,
    store_config: StoreConfig,
    out: &mut impl Write,
) -> Result<()> {
    let mut store = XmlSkiRunRepository::open(store_config.clone()).with_context(|| {
        format!(
            "Failed to open ski run store at {:?} (run `skirun init` to create it)",
            store_config.data_file()
        )
    })?;

    match command {
        StoreCommand::List { json } => commands::runs::list(&store, json, out)?,
        StoreCommand::Get { id, json } => commands::runs::get(&store, id, json, out)?,
        StoreCommand::Add { id, name, vertical } => {
            commands::runs::add(&mut store, SkiRun::new(id, name, vertical), out)?
        }
        StoreCommand::Update { id, name, vertical } => {
            commands::runs::update(&mut store, SkiRun::new(id, name, vertical), out)?
        }
        StoreCommand::Delete { id } => commands::runs::delete(&mut store, id, out)?,
        StoreCommand::Query { min, max, json } => {
            commands::runs::query(&store, min, max, json, out)?
        }
    }

    store.dispose();
    Ok(())
}
