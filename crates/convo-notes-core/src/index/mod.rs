//! Fingerprint index over the note corpus
//!
//! Maps each conversation fingerprint to the note that produced it. The
//! index is rebuilt from the output directory on every run and only grows
//! while a run is in progress.

pub mod builder;
mod shared;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::fingerprint::Fingerprint;

pub use builder::{build_index, IndexBuild, IndexDiagnostic};
pub use shared::SharedIndex;

/// Result of a guarded conversion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    /// The fingerprint was already claimed by `existing`
    Duplicate { existing: PathBuf },
    /// The fingerprint was free and `persist` ran
    Done(T),
}

#[derive(Debug, Clone, Default)]
pub struct FingerprintIndex {
    entries: HashMap<Fingerprint, PathBuf>,
}

impl FingerprintIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &Path)> {
        self.entries.iter().map(|(fp, path)| (fp, path.as_path()))
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&Path> {
        self.entries.get(fingerprint).map(PathBuf::as_path)
    }

    /// Path of an existing note with the same conversation body as `doc`
    pub fn is_duplicate(&self, doc: &Document) -> Option<&Path> {
        self.get(&Fingerprint::of_document(doc.content()))
    }

    /// Record `path` as the owner of `body`. A later registration of the
    /// same body replaces the earlier path.
    pub fn register(&mut self, body: &str, path: impl Into<PathBuf>) {
        self.insert(Fingerprint::of_body(body), path.into());
    }

    pub fn insert(&mut self, fingerprint: Fingerprint, path: PathBuf) {
        self.entries.insert(fingerprint, path);
    }

    /// Check `fingerprint`, run `persist`, and register whatever path it
    /// reports as written, as one step.
    ///
    /// With `force` the duplicate check is skipped. `persist` returns its
    /// own result plus the path it wrote, or `None` when it wrote nothing
    /// (dry run, skipped output, write failure); only a written path is
    /// registered.
    pub fn check_and_register<T>(
        &mut self,
        fingerprint: &Fingerprint,
        force: bool,
        persist: impl FnOnce() -> (T, Option<PathBuf>),
    ) -> Guarded<T> {
        if !force {
            if let Some(existing) = self.entries.get(fingerprint) {
                return Guarded::Duplicate {
                    existing: existing.clone(),
                };
            }
        }

        let (result, written) = persist();
        if let Some(path) = written {
            self.insert(fingerprint.clone(), path);
        }
        Guarded::Done(result)
    }
}
