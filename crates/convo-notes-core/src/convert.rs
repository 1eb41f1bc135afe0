//! Conversion of transcripts into knowledge-base notes
//!
//! A [`Converter`] owns the output directory's fingerprint index for the
//! length of a run. Each file goes read, duplicate check, analyze, assemble,
//! write, register; the check and the register happen under one lock.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use glob::Pattern;
use serde::Serialize;
use walkdir::WalkDir;

use crate::analysis::{Analysis, Analyzer};
use crate::config::ConverterConfig;
use crate::document::Document;
use crate::error::{ConvoError, Result};
use crate::fingerprint::Fingerprint;
use crate::index::{build_index, Guarded, IndexDiagnostic, SharedIndex};
use crate::note::NoteAssembler;
use crate::trace_time;

/// Per-run switches for [`Converter::convert_file`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Analyze and report, write nothing
    pub dry_run: bool,
    /// Leave an existing output file alone
    pub skip_existing: bool,
    /// Ignore the duplicate check and overwrite existing output
    pub force: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            dry_run: false,
            skip_existing: true,
            force: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Read,
    Render,
    Write,
}

/// What happened to one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Converted { output: PathBuf },
    WouldCreate { output: PathBuf },
    Duplicate { existing: PathBuf },
    Skipped { output: PathBuf },
    Failed { stage: FailureStage, reason: String },
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Converted { .. } => "converted",
            Outcome::WouldCreate { .. } => "would_create",
            Outcome::Duplicate { .. } => "duplicate",
            Outcome::Skipped { .. } => "skipped",
            Outcome::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub source: PathBuf,
    /// Absent when the file could not be read or was a duplicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedEntry {
    pub source: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateEntry {
    pub source: PathBuf,
    pub existing: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedEntry {
    pub source: PathBuf,
    pub stage: FailureStage,
    pub reason: String,
}

/// Totals for a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub dry_run: bool,
    /// Written notes, or in a dry run the notes that would be written
    pub converted: Vec<ConvertedEntry>,
    pub skipped: Vec<PathBuf>,
    pub duplicates: Vec<DuplicateEntry>,
    pub failed: Vec<FailedEntry>,
    /// Converted notes per domain label
    pub domain_counts: BTreeMap<String, usize>,
    pub interrupted: bool,
}

impl BatchReport {
    fn new(dry_run: bool) -> Self {
        BatchReport {
            dry_run,
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.converted.len() + self.skipped.len() + self.duplicates.len() + self.failed.len()
    }

    pub fn record(&mut self, report: &FileReport) {
        let source = report.source.clone();
        match &report.outcome {
            Outcome::Converted { output } | Outcome::WouldCreate { output } => {
                if let Some(analysis) = &report.analysis {
                    for domain in &analysis.domains {
                        *self.domain_counts.entry(domain.clone()).or_default() += 1;
                    }
                }
                self.converted.push(ConvertedEntry {
                    source,
                    output: output.clone(),
                });
            }
            Outcome::Skipped { .. } => self.skipped.push(source),
            Outcome::Duplicate { existing } => self.duplicates.push(DuplicateEntry {
                source,
                existing: existing.clone(),
            }),
            Outcome::Failed { stage, reason } => self.failed.push(FailedEntry {
                source,
                stage: *stage,
                reason: reason.clone(),
            }),
        }
    }
}

/// Converts transcripts into notes under one output directory
#[derive(Debug)]
pub struct Converter {
    output_dir: PathBuf,
    analyzer: Analyzer,
    assembler: NoteAssembler,
    index: SharedIndex,
    diagnostics: Vec<IndexDiagnostic>,
}

impl Converter {
    /// Create the output directory if needed and index the notes already in it
    pub fn new(output_dir: impl Into<PathBuf>, config: &ConverterConfig) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|e| {
            ConvoError::io_operation("create output directory", output_dir.display(), e)
        })?;

        let build = build_index(&output_dir);
        tracing::info!(
            output_dir = %output_dir.display(),
            notes = build.index.len(),
            diagnostics = build.diagnostics.len(),
            "index_ready"
        );

        Ok(Converter {
            output_dir,
            analyzer: Analyzer::from_config(config),
            assembler: NoteAssembler::from_config(config),
            index: SharedIndex::new(build.index),
            diagnostics: build.diagnostics,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn index(&self) -> &SharedIndex {
        &self.index
    }

    /// Corpus files that were skipped while building the index
    pub fn diagnostics(&self) -> &[IndexDiagnostic] {
        &self.diagnostics
    }

    /// Convert a single transcript. Per-file problems become outcomes, never
    /// errors.
    pub fn convert_file(&self, path: &Path, options: ConvertOptions) -> FileReport {
        let doc = match Document::read(path) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "read_failed");
                return FileReport {
                    source: path.to_path_buf(),
                    analysis: None,
                    outcome: Outcome::Failed {
                        stage: FailureStage::Read,
                        reason: e.to_string(),
                    },
                };
            }
        };

        // Only a new conversation is classified
        let fingerprint = Fingerprint::of_document(doc.content());
        let guarded = self
            .index
            .check_and_register(&fingerprint, options.force, || {
                let analysis = self.analyzer.analyze(&doc);
                let (outcome, written) = self.persist(&doc, &analysis, options);
                ((outcome, analysis), written)
            });

        let (outcome, analysis) = match guarded {
            Guarded::Duplicate { existing } => {
                tracing::info!(
                    path = %path.display(),
                    existing = %existing.display(),
                    fingerprint = %fingerprint,
                    "duplicate"
                );
                (Outcome::Duplicate { existing }, None)
            }
            Guarded::Done((outcome, analysis)) => (outcome, Some(analysis)),
        };

        FileReport {
            source: path.to_path_buf(),
            analysis,
            outcome,
        }
    }

    /// Render and write one note. Returns the outcome plus the path that
    /// was actually written, if any.
    fn persist(
        &self,
        doc: &Document,
        analysis: &Analysis,
        options: ConvertOptions,
    ) -> (Outcome, Option<PathBuf>) {
        let note = match self.assembler.assemble(doc, analysis) {
            Ok(note) => note,
            Err(e) => {
                let outcome = Outcome::Failed {
                    stage: FailureStage::Render,
                    reason: e.to_string(),
                };
                return (outcome, None);
            }
        };
        let output = self.output_dir.join(&note.file_name);

        if output.exists() && options.skip_existing && !options.force {
            tracing::debug!(output = %output.display(), "output_exists");
            return (Outcome::Skipped { output }, None);
        }

        if options.dry_run {
            return (Outcome::WouldCreate { output }, None);
        }

        match fs::write(&output, &note.markdown) {
            Ok(()) => {
                tracing::info!(
                    source = %doc.path().display(),
                    output = %output.display(),
                    "converted"
                );
                (
                    Outcome::Converted {
                        output: output.clone(),
                    },
                    Some(output),
                )
            }
            Err(e) => {
                tracing::warn!(output = %output.display(), error = %e, "write_failed");
                let outcome = Outcome::Failed {
                    stage: FailureStage::Write,
                    reason: e.to_string(),
                };
                (outcome, None)
            }
        }
    }

    /// Convert every file below `input_dir` whose name matches `pattern`.
    ///
    /// The file list is collected before the first conversion, so notes
    /// written into a nested output directory are never picked up as
    /// input. `interrupt` is checked between files; once set, the report is
    /// returned with `interrupted` and the remaining files untouched.
    #[tracing::instrument(
        skip(self, input_dir, options, interrupt, on_file),
        fields(input_dir = %input_dir.display())
    )]
    pub fn convert_directory(
        &self,
        input_dir: &Path,
        pattern: &str,
        recursive: bool,
        options: ConvertOptions,
        interrupt: &AtomicBool,
        mut on_file: impl FnMut(&FileReport),
    ) -> Result<BatchReport> {
        let start = Instant::now();
        let files = collect_inputs(input_dir, pattern, recursive)?;
        tracing::info!(files = files.len(), pattern, recursive, "inputs_collected");

        let mut report = BatchReport::new(options.dry_run);
        for path in files {
            if interrupt.load(Ordering::SeqCst) {
                tracing::warn!(processed = report.total(), "interrupted");
                report.interrupted = true;
                break;
            }

            let file_report = self.convert_file(&path, options);
            report.record(&file_report);
            on_file(&file_report);
        }

        trace_time!(start, "convert_directory");
        Ok(report)
    }
}

/// Files below `input_dir` whose file name matches `pattern`, sorted by path
pub fn collect_inputs(input_dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(ConvoError::input_not_found("directory", input_dir));
    }

    let matcher = Pattern::new(pattern).map_err(|e| ConvoError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut walker = WalkDir::new(input_dir).follow_links(true).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "walk_failed");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if matcher.matches(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
