//! CLI tool for editing and inspecting record database files.
//!
//! Every command operates on one snapshot file: it is loaded, the command
//! is applied, and mutating commands write the result back.

mod input;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use record_db_core::config::StoreConfig;
use record_db_core::persistence::PersistenceManager;
use record_db_core::{Database, DbError, Field, FieldType};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the record database tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Database snapshot file
    #[arg(short, long, default_value = "records.db")]
    file: PathBuf,

    /// Maximum retry attempts for transient I/O errors
    #[arg(long, default_value_t = 3)]
    max_retries: u32,

    /// Delay between retry attempts in milliseconds
    #[arg(long, default_value_t = 100)]
    retry_delay_ms: u64,

    /// Do not fsync the snapshot before replacing the old file
    #[arg(long)]
    no_sync: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new empty database file
    Init { name: String },
    /// List tables
    Tables,
    /// Create an empty table
    CreateTable { table: String },
    /// Delete a table and all of its fields
    DeleteTable { table: String },
    /// Add a field to a table
    AddField {
        table: String,
        field: String,
        /// integer, real, char, string, file_path or integer_interval
        #[arg(value_name = "TYPE")]
        field_type: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Replace the value of a field
    UpdateField {
        table: String,
        field: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Remove a field from a table
    DeleteField { table: String, field: String },
    /// Print every field of a table
    Show { table: String },
    /// Print fields two tables share with equal values
    Intersect { first: String, second: String },
}

impl Args {
    fn store_config(&self) -> StoreConfig {
        StoreConfig {
            persistence_max_retries: self.max_retries,
            persistence_retry_delay_ms: self.retry_delay_ms,
            sync_on_save: !self.no_sync,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let output = run(&args)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Executes one command and returns the text to print.
fn run(args: &Args) -> Result<String> {
    let persistence = PersistenceManager::new(&args.store_config());
    let path = &args.file;
    tracing::debug!(command = ?args.command, file = %path.display(), "running command");

    let mut db = if let Command::Init { name } = &args.command {
        Database::new(name.as_str())
    } else {
        persistence
            .load(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
    };

    let (message, dirty) = match &args.command {
        Command::Init { name } => (format!("Database '{}' created", name), true),
        Command::Tables => (db.table_names().join("\n"), false),
        Command::CreateTable { table } => {
            db.create_table(table.as_str())?;
            (format!("Table '{}' created", table), true)
        }
        Command::DeleteTable { table } => {
            db.delete_table(table)?;
            (format!("Table '{}' deleted", table), true)
        }
        Command::AddField {
            table,
            field,
            field_type,
            value,
        } => {
            let ty: FieldType = field_type.parse()?;
            let value = input::parse_value(ty, value)?;
            db.add_field(table, Field::new(field.as_str(), value, ty)?)?;
            (format!("Field '{}' added to table '{}'", field, table), true)
        }
        Command::UpdateField {
            table,
            field,
            value,
        } => {
            let ty = db
                .get_table(table)?
                .get_field(field)
                .map(Field::field_type)
                .ok_or_else(|| DbError::FieldNotFound {
                    table: table.clone(),
                    field: field.clone(),
                })?;
            let value = input::parse_value(ty, value)?;
            db.update_field(table, field, value)?;
            (format!("Field '{}' updated", field), true)
        }
        Command::DeleteField { table, field } => {
            db.delete_field(table, field)?;
            (format!("Field '{}' deleted", field), true)
        }
        Command::Show { table } => (render::render_table(&db.show_table(table)?), false),
        Command::Intersect { first, second } => (
            render::render_intersection(&db.intersect_tables(first, second)?),
            false,
        ),
    };

    if dirty {
        persistence
            .save(&db, path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }
    Ok(message)
}
