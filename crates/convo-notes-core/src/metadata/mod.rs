//! Title and date extraction
//!
//! Each field is derived by a cascade of small heuristics. A cascade is a
//! plain slice of functions; the first to return `Some` wins.

pub mod date;
pub mod title;

use crate::document::Document;
use date::{DateHeuristic, DATE_CASCADE};
use title::{TitleHeuristic, FALLBACK_TITLE, TITLE_CASCADE};

/// Runs the title and date cascades
#[derive(Debug, Clone, Copy)]
pub struct MetadataExtractor {
    titles: &'static [TitleHeuristic],
    dates: &'static [DateHeuristic],
}

impl MetadataExtractor {
    pub fn new(titles: &'static [TitleHeuristic], dates: &'static [DateHeuristic]) -> Self {
        MetadataExtractor { titles, dates }
    }

    pub fn extract_title(&self, text: &str) -> String {
        self.titles
            .iter()
            .find_map(|heuristic| heuristic(text))
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }

    /// Date as `YYYY-MM-DD`; never fails because the modification time
    /// closes the cascade.
    pub fn extract_date(&self, doc: &Document) -> String {
        self.dates
            .iter()
            .find_map(|heuristic| heuristic(doc))
            .unwrap_or_else(|| date::from_modified(doc))
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new(TITLE_CASCADE, DATE_CASCADE)
    }
}
