use crate::taxonomy::{default_activities, TaxonomyEntry, REFERENCE_ACTIVITY};

/// Single-label activity classifier
///
/// Entries are tried in declaration order and the first one with a keyword
/// hit wins, so reordering the taxonomy changes results for ambiguous text.
#[derive(Debug, Clone)]
pub struct ActivityClassifier {
    entries: Vec<TaxonomyEntry>,
}

impl ActivityClassifier {
    pub fn new(entries: Vec<TaxonomyEntry>) -> Self {
        ActivityClassifier {
            entries: entries.into_iter().map(TaxonomyEntry::normalized).collect(),
        }
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn classify(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        self.entries
            .iter()
            .find(|entry| entry.matches(&lowered))
            .map_or(REFERENCE_ACTIVITY, |entry| entry.label.as_str())
            .to_string()
    }
}

impl Default for ActivityClassifier {
    fn default() -> Self {
        Self::new(default_activities())
    }
}
