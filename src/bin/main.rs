//! edm-schema CLI - Inspect the schema resolved from an EDM metadata snapshot
//!
//! Usage:
//!   edm-schema --metadata <snapshot.json> tables
//!   edm-schema --metadata <snapshot.json> columns <table>
//!
//! Examples:
//!   edm-schema --metadata northwind.json tables
//!   edm-schema --metadata northwind.json key Products --format json
//!   edm-schema -vv --metadata northwind.json derived People

use clap::{Parser, Subcommand, ValueEnum};
use edm_schema::config::Settings;
use edm_schema::metadata::EdmMetadata;
use edm_schema::render;
use edm_schema::schema::{Model, Table};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "edm-schema")]
#[command(about = "Resolve tables, columns, associations and keys from EDM metadata")]
#[command(version)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the JSON metadata snapshot (overrides [metadata] snapshot).
    #[arg(short, long, global = true)]
    metadata: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tables bound from entity sets
    Tables,

    /// List tables derived from a table's entity type
    Derived {
        /// Table name
        table: String,
    },

    /// List the flattened columns of a table
    Columns {
        /// Table name
        table: String,
    },

    /// List the flattened associations of a table
    Associations {
        /// Table name
        table: String,
    },

    /// Show the primary key of a table
    Key {
        /// Table name
        table: String,
    },

    /// List entity and complex types
    Types,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One line per item
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose, &settings.logging.level);

    match run(&cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8, default_level: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = match &cli.metadata {
        Some(path) => path.clone(),
        None => settings
            .metadata
            .resolved_snapshot()?
            .ok_or("no metadata snapshot given (use --metadata or [metadata] snapshot)")?,
    };

    let metadata = EdmMetadata::from_json_file(&snapshot)?;
    let model = Model::with_options(&metadata, settings.model_options());
    tracing::debug!(snapshot = %snapshot.display(), "resolving schema");

    match &cli.command {
        Commands::Tables => {
            let tables = model.get_tables()?;
            emit(&cli.format, &tables, || render::render_tables(&tables))
        }
        Commands::Derived { table } => {
            let table = lookup(&model, table)?;
            let derived = model.get_derived_tables(&table);
            emit(&cli.format, &derived, || render::render_tables(&derived))
        }
        Commands::Columns { table } => {
            let table = lookup(&model, table)?;
            let columns = model.get_columns(&table)?;
            emit(&cli.format, &columns, || render::render_columns(&columns))
        }
        Commands::Associations { table } => {
            let table = lookup(&model, table)?;
            let associations = model.get_associations(&table)?;
            emit(&cli.format, &associations, || {
                render::render_associations(&associations)
            })
        }
        Commands::Key { table } => {
            let table = lookup(&model, table)?;
            let resolution = model.resolve_primary_key(&table)?;
            emit(&cli.format, &resolution, || render::render_key(&resolution))
        }
        Commands::Types => {
            #[derive(Serialize)]
            struct Types<'a> {
                entity_types: Vec<&'a edm_schema::metadata::EdmEntityType>,
                complex_types: Vec<&'a edm_schema::metadata::EdmComplexType>,
            }
            let types = Types {
                entity_types: model.get_entity_types().collect(),
                complex_types: model.get_complex_types().collect(),
            };
            emit(&cli.format, &types, || {
                render::render_types(model.get_entity_types(), model.get_complex_types())
            })
        }
    }
}

fn lookup(model: &Model<'_, EdmMetadata>, name: &str) -> Result<Table, Box<dyn std::error::Error>> {
    model
        .find_table(name)?
        .ok_or_else(|| format!("table '{}' not found", name).into())
}

fn emit<T: Serialize>(
    format: &OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => {
            let out = text();
            if !out.is_empty() {
                println!("{}", out);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
