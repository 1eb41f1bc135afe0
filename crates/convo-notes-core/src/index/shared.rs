use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{FingerprintIndex, Guarded};
use crate::fingerprint::Fingerprint;

/// A [`FingerprintIndex`] that several workers can convert against.
///
/// The lock is held from the duplicate check until the written path is
/// registered, so two workers holding the same conversation cannot both
/// pass the check.
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<Mutex<FingerprintIndex>>,
}

impl SharedIndex {
    pub fn new(index: FingerprintIndex) -> Self {
        SharedIndex {
            inner: Arc::new(Mutex::new(index)),
        }
    }

    // The index is append-only, so a panic mid-insert leaves it usable.
    fn lock(&self) -> MutexGuard<'_, FingerprintIndex> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<PathBuf> {
        self.lock().get(fingerprint).map(Path::to_path_buf)
    }

    /// See [`FingerprintIndex::check_and_register`]
    pub fn check_and_register<T>(
        &self,
        fingerprint: &Fingerprint,
        force: bool,
        persist: impl FnOnce() -> (T, Option<PathBuf>),
    ) -> Guarded<T> {
        self.lock().check_and_register(fingerprint, force, persist)
    }

    /// Take the index back once every worker is done with it
    pub fn into_inner(self) -> FingerprintIndex {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => shared
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}
