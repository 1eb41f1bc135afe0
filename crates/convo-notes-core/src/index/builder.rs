//! Index construction from an existing note corpus
//!
//! Building happens in two phases. [`scan_corpus`] walks the output
//! directory and reads every note, turning unreadable entries into
//! diagnostics instead of errors. [`fold_corpus`] then hashes each note's
//! conversation body into a [`FingerprintIndex`]. One bad file never stops
//! startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use walkdir::WalkDir;

use super::FingerprintIndex;
use crate::fingerprint::{extract_body, Fingerprint};
use crate::trace_time;

/// A corpus file that could not be indexed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDiagnostic {
    pub path: PathBuf,
    pub reason: String,
}

/// Readable notes and the diagnostics for everything else
#[derive(Debug, Default)]
pub struct CorpusScan {
    pub notes: Vec<(PathBuf, String)>,
    pub diagnostics: Vec<IndexDiagnostic>,
}

/// A built index plus what went wrong while building it
#[derive(Debug, Default)]
pub struct IndexBuild {
    pub index: FingerprintIndex,
    pub diagnostics: Vec<IndexDiagnostic>,
    /// Notes that were read and hashed
    pub scanned: usize,
}

fn is_note(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "md")
}

/// Phase one: read every `*.md` file below `dir`.
///
/// Entries are visited in file-name order so that, when two notes share a
/// fingerprint, the same one wins on every run.
pub fn scan_corpus(dir: &Path) -> CorpusScan {
    let mut scan = CorpusScan::default();

    if !dir.exists() {
        return scan;
    }

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                scan.diagnostics.push(IndexDiagnostic {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_note(entry.path()) {
            continue;
        }

        match fs::read_to_string(entry.path()) {
            Ok(content) => scan.notes.push((entry.into_path(), content)),
            Err(e) => scan.diagnostics.push(IndexDiagnostic {
                path: entry.into_path(),
                reason: e.to_string(),
            }),
        }
    }

    scan
}

/// Phase two: hash each note's conversation body. Later notes overwrite
/// earlier ones with the same fingerprint.
pub fn fold_corpus(scan: CorpusScan) -> IndexBuild {
    let scanned = scan.notes.len();
    let index = scan
        .notes
        .into_iter()
        .fold(FingerprintIndex::new(), |mut index, (path, content)| {
            index.insert(Fingerprint::of_body(extract_body(&content)), path);
            index
        });

    IndexBuild {
        index,
        diagnostics: scan.diagnostics,
        scanned,
    }
}

/// Build the fingerprint index for the notes under `dir`
#[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
pub fn build_index(dir: &Path) -> IndexBuild {
    let start = Instant::now();

    let build = fold_corpus(scan_corpus(dir));

    for diagnostic in &build.diagnostics {
        tracing::warn!(
            path = %diagnostic.path.display(),
            reason = %diagnostic.reason,
            "corpus_file_skipped"
        );
    }
    trace_time!(
        start,
        "build_index",
        entries = build.index.len(),
        skipped = build.diagnostics.len()
    );

    build
}
