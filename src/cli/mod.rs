//! CLI argument parsing for convo-notes
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{ClassifyArgs, ConvertArgs, IndexArgs};
pub use output::OutputFormat;

/// convo-notes - convert AI conversation transcripts into knowledge-base notes
#[derive(Parser, Debug)]
#[command(name = "convo-notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (taxonomies, topic rules, note footer)
    #[arg(long, global = true, env = "CONVO_NOTES_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level convo-notes commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert transcripts into notes
    Convert(ConvertArgs),

    /// Classify a single transcript without writing anything
    Classify(ClassifyArgs),

    /// Build the fingerprint index of an output directory and report it
    Index(IndexArgs),
}
