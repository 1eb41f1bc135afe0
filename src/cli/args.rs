//! Subcommand argument structures

use clap::{ArgGroup, Args};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("input").required(true).args(["input_dir", "input_file"])))]
pub struct ConvertArgs {
    /// Directory of transcripts to convert
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Single transcript to convert
    #[arg(long)]
    pub input_file: Option<PathBuf>,

    /// Directory the notes are written to (created if missing)
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Glob matched against file names (default: `scan.pattern` from config, else *.md)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Only convert files directly inside --input-dir
    #[arg(long)]
    pub no_recursive: bool,

    /// Analyze and report without writing notes
    #[arg(long)]
    pub dry_run: bool,

    /// Convert duplicates and overwrite existing notes
    #[arg(long)]
    pub force: bool,

    /// Overwrite an existing note with the same file name
    #[arg(long)]
    pub no_skip: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Transcript to classify (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Note directory to index
    #[arg(long)]
    pub output_dir: PathBuf,
}
