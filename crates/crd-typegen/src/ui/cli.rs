use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};
use crate::generator::{DEFAULT_GENERIC_FALLBACK_TYPE, DEFAULT_METADATA_FALLBACK_TYPE};

#[derive(Parser, Debug)]
#[command(name = "crd-typegen")]
#[command(author, version, about = "Kubernetes CRD OpenAPI schema to TypeScript generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an OpenAPI schema document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript interfaces from an OpenAPI schema document
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the OpenAPI document (JSON, or YAML with a .yaml/.yml extension)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory where the generated modules will be written
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Type used for a resource's `metadata` field when its schema has no properties
  #[arg(long, value_name = "TYPE", default_value = DEFAULT_METADATA_FALLBACK_TYPE)]
  pub metadata_fallback_type: String,

  /// Type used for any other nested schema without properties
  #[arg(long, value_name = "TYPE", default_value = DEFAULT_GENERIC_FALLBACK_TYPE)]
  pub generic_fallback_type: String,

  /// Also write the flattened and reduced type tables as JSON to this file
  #[arg(long, value_name = "FILE")]
  pub dump_table: Option<PathBuf>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the top-level schemas and the types each one flattens into
  Schemas {
    /// Path to the OpenAPI document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
