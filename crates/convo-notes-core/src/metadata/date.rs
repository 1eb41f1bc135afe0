//! Conversation date detection

use std::sync::OnceLock;

use chrono::{DateTime, Local};
use regex::Regex;

use crate::document::Document;

/// Only the head of a transcript is searched for an in-text date
const CONTENT_SCAN_CHARS: usize = 500;

static ISO_RE: OnceLock<Regex> = OnceLock::new();
static SLASH_RE: OnceLock<Regex> = OnceLock::new();
static LONG_FORM_RE: OnceLock<Regex> = OnceLock::new();

fn iso_regex() -> &'static Regex {
    ISO_RE.get_or_init(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").expect("ISO date pattern is valid"))
}

fn slash_regex() -> &'static Regex {
    SLASH_RE.get_or_init(|| {
        Regex::new(r"(\d{1,2}/\d{1,2}/\d{4})").expect("slash date pattern is valid")
    })
}

fn long_form_regex() -> &'static Regex {
    LONG_FORM_RE.get_or_init(|| {
        Regex::new(
            r"(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}",
        )
        .expect("long-form date pattern is valid")
    })
}

/// A date spotted in the text, tagged with the notation it was written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentDate {
    /// `2024-03-15`
    Iso(String),
    /// `3/15/2024`
    Slash(String),
    /// `March 15, 2024`
    LongForm(String),
}

impl ContentDate {
    /// Value usable as a note date. Only ISO dates qualify; slash and
    /// long-form dates are recognized but not converted, so the cascade
    /// falls through to the file name and modification time for them.
    pub fn normalized(&self) -> Option<String> {
        match self {
            ContentDate::Iso(date) => Some(date.clone()),
            ContentDate::Slash(_) | ContentDate::LongForm(_) => None,
        }
    }
}

/// First date found in the head of `text`, trying ISO, slash and long-form
/// notations in that order
pub fn find_content_date(text: &str) -> Option<ContentDate> {
    let head: String = text.chars().take(CONTENT_SCAN_CHARS).collect();

    if let Some(m) = iso_regex().find(&head) {
        return Some(ContentDate::Iso(m.as_str().to_string()));
    }
    if let Some(m) = slash_regex().find(&head) {
        return Some(ContentDate::Slash(m.as_str().to_string()));
    }
    long_form_regex()
        .find(&head)
        .map(|m| ContentDate::LongForm(m.as_str().to_string()))
}

/// ISO date from the document text
pub fn from_content(doc: &Document) -> Option<String> {
    let found = find_content_date(doc.content())?;
    let normalized = found.normalized();
    if normalized.is_none() {
        tracing::debug!(path = %doc.path().display(), date = ?found, "non_iso_date_ignored");
    }
    normalized
}

/// ISO date embedded in the source file name
pub fn from_file_name(doc: &Document) -> Option<String> {
    iso_regex()
        .find(&doc.file_name())
        .map(|m| m.as_str().to_string())
}

/// Last-modified day of the source file, in local time
pub fn from_modified(doc: &Document) -> String {
    format_day(doc.modified())
}

pub(crate) fn format_day(when: DateTime<Local>) -> String {
    when.format("%Y-%m-%d").to_string()
}

/// Optional steps of the date cascade; [`from_modified`] always closes it
pub type DateHeuristic = fn(&Document) -> Option<String>;

pub const DATE_CASCADE: &[DateHeuristic] = &[from_content, from_file_name];
