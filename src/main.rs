use anyhow::Context;
use clap::{Parser, Subcommand};
use sdb_model::WireFormat;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "sdb")]
#[command(about = "Health data schema records and key tables")]
struct Cli {
    /// Output format (json or yaml); overrides SDB_OUTPUT_FORMAT
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<WireFormat>,

    /// Pretty-print JSON output; overrides SDB_PRETTY
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the key tables
    Tables,
    /// Print every key of a table
    Keys {
        /// Table name, e.g. StatusKeys
        table: String,
    },
    /// Print the value of one key
    Lookup {
        /// Table name, e.g. StatusKeys
        table: String,
        /// Mnemonic, e.g. Active
        mnemonic: String,
    },
    /// List every table key holding a value
    Reverse {
        /// UUID or format pattern
        value: String,
    },
    /// List the record types
    Types,
    /// Print an empty record
    New {
        /// Record type, e.g. Patient
        type_name: String,
    },
    /// Copy the fields of a record type out of a source document
    Project {
        /// Record type, e.g. Patient
        type_name: String,
        /// Source document (JSON or YAML); reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Strictly parse a $type-tagged document
    Check {
        /// Document (JSON or YAML); reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn parse_format(raw: &str) -> Result<WireFormat, String> {
    raw.parse().map_err(|e: sdb_model::ModelError| e.to_string())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// Entry point for the `sdb` tool.
///
/// Loads `.env`, initialises logging to stderr (`RUST_LOG`, default `sdb=info`), resolves
/// [`CliConfig`] and runs one command, printing its output to stdout.
///
/// # Environment Variables
/// - `SDB_OUTPUT_FORMAT`: `json` (default) or `yaml`
/// - `SDB_PRETTY`: pretty-print JSON output (default: false)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("sdb=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env(cli.format, cli.pretty)?;
    tracing::debug!(?config, "configuration resolved");

    let output = match cli.command {
        Commands::Tables => commands::tables(&config)?,
        Commands::Keys { table } => commands::keys(&config, &table)?,
        Commands::Lookup { table, mnemonic } => commands::lookup(&table, &mnemonic)?,
        Commands::Reverse { value } => commands::reverse(&config, &value)?,
        Commands::Types => commands::types(&config)?,
        Commands::New { type_name } => commands::new(&config, &type_name)?,
        Commands::Project { type_name, input } => {
            let source = read_input(input.as_deref())?;
            commands::project(&config, &type_name, &source)?
        }
        Commands::Check { input } => {
            let source = read_input(input.as_deref())?;
            commands::check(&source)?
        }
    };

    println!("{output}");
    Ok(())
}
