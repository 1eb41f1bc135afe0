//! `convo-notes index` - build the fingerprint index of a note directory
//!
//! The index is never persisted; this command shows what a conversion run
//! would see when it starts.

use std::path::Path;

use serde::Serialize;

use convo_notes_core::error::{ConvoError, Result};
use convo_notes_core::fingerprint::Fingerprint;
use convo_notes_core::index::{build_index, IndexDiagnostic};

use crate::cli::{IndexArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};

#[derive(Serialize)]
struct IndexEntry<'a> {
    fingerprint: &'a Fingerprint,
    path: &'a Path,
}

#[derive(Serialize)]
struct IndexSummary<'a> {
    output_dir: &'a Path,
    notes_scanned: usize,
    fingerprints: usize,
    entries: Vec<IndexEntry<'a>>,
    diagnostics: &'a [IndexDiagnostic],
}

pub fn execute(ctx: &CommandContext, args: &IndexArgs) -> Result<()> {
    let dir = args.output_dir.as_path();
    if !dir.is_dir() {
        return Err(ConvoError::input_not_found("directory", dir));
    }

    let build = build_index(dir);
    trace_command!(ctx.cli, ctx.start, "build_index");

    let mut entries: Vec<IndexEntry> = build
        .index
        .iter()
        .map(|(fingerprint, path)| IndexEntry { fingerprint, path })
        .collect();
    entries.sort_by(|a, b| a.path.cmp(b.path));

    match ctx.cli.format {
        OutputFormat::Json => {
            let summary = IndexSummary {
                output_dir: dir,
                notes_scanned: build.scanned,
                fingerprints: build.index.len(),
                entries,
                diagnostics: &build.diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            println!(
                "Indexed {} note(s), {} unique conversation(s) in {}",
                build.scanned,
                build.index.len(),
                dir.display()
            );
            if !ctx.cli.quiet {
                for entry in &entries {
                    println!("  {}  {}", entry.fingerprint, entry.path.display());
                }
            }
            if !build.diagnostics.is_empty() {
                println!("Skipped {} unreadable file(s):", build.diagnostics.len());
                for diagnostic in &build.diagnostics {
                    println!("  {}: {}", diagnostic.path.display(), diagnostic.reason);
                }
            }
        }
    }

    Ok(())
}
