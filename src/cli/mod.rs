//! CLI argument parsing for scalecalc
//!
//! Global flags locate the inputs (--config, --data, --subjects,
//! --validation, --state) and shape output (--format, --quiet, --verbose).

pub mod args;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::ToggleCommands;
pub use scalecalc_core::format::OutputFormat;

/// Scalecalc - subject scaling calculator
#[derive(Parser, Debug)]
#[command(name = "scalecalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./scalecalc.toml when present)
    #[arg(long, global = true, env = "SCALECALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Scaling dataset (JSON array of {subject, year, ...} rows)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Candidate subject names (JSON array of strings)
    #[arg(long, global = true)]
    pub subjects: Option<PathBuf>,

    /// Validation list restricting the subjects (JSON array of strings)
    #[arg(long, global = true)]
    pub validation: Option<PathBuf>,

    /// Saved selection state file
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the subject/year grid with checkbox states
    Show,

    /// Show the selection and availability of one cell
    Status {
        /// Subject display name
        subject: String,

        /// Academic year
        year: String,
    },

    /// List the current selections
    List,

    /// Toggle a cell, a whole year column or a whole subject row
    Toggle {
        #[command(subcommand)]
        command: ToggleCommands,
    },

    /// Clear every selection
    Clear,

    /// Drop saved selections that have no scaling data
    Prune,
}
