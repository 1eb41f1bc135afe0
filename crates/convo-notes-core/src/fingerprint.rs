//! Content fingerprints for duplicate detection
//!
//! A fingerprint is the first 16 hex characters of the SHA-256 digest of a
//! document's conversation body. The body is the text following a
//! `## Conversation` heading and a blank line, up to the next horizontal rule
//! or the end of the text; documents without that heading are hashed whole.
//!
//! Truncating to 64 bits keeps file names and logs short at the cost of a
//! small collision risk. Two different bodies that collide are treated as
//! duplicates.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest
pub const FINGERPRINT_LEN: usize = 16;

static BODY_RE: OnceLock<Regex> = OnceLock::new();

fn body_regex() -> &'static Regex {
    BODY_RE.get_or_init(|| {
        Regex::new(r"(?s)## Conversation\n\n(.+?)(?:\n---|\z)")
            .expect("conversation body pattern is valid")
    })
}

/// Truncated SHA-256 digest of a conversation body
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Hash a body that has already been extracted
    pub fn of_body(body: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(body.as_bytes());
        let full_hex = hex::encode(hasher.finalize());
        Fingerprint(full_hex[..FINGERPRINT_LEN].to_string())
    }

    /// Extract the body from a full document and hash it
    pub fn of_document(text: &str) -> Self {
        Self::of_body(extract_body(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Return the conversation section of `text`, or all of `text` when there is
/// no `## Conversation` section.
pub fn extract_body(text: &str) -> &str {
    body_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |m| m.as_str())
}
