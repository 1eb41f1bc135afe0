//! Source documents handed to the pipeline

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{ConvoError, Result};

/// An exported transcript: its text, where it came from, and when it was
/// last modified.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    content: String,
    modified: DateTime<Local>,
}

impl Document {
    pub fn new(
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        modified: DateTime<Local>,
    ) -> Self {
        Document {
            path: path.into(),
            content: content.into(),
            modified,
        }
    }

    /// Read a UTF-8 document from disk. Undecodable files are errors.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).map_err(|e| ConvoError::io_operation("read", path.display(), e))?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ConvoError::io_operation("decode", path.display(), e))?;
        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| ConvoError::io_operation("stat", path.display(), e))?;

        Ok(Document {
            path: path.to_path_buf(),
            content,
            modified: DateTime::<Local>::from(modified),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn modified(&self) -> DateTime<Local> {
        self.modified
    }

    /// Final path component, or an empty string for paths without one
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
