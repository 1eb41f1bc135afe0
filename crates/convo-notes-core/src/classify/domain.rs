use std::collections::BTreeSet;

use crate::taxonomy::{default_domains, TaxonomyEntry, GENERAL_DOMAIN};

/// Multi-label domain classifier
///
/// Every taxonomy entry with at least one keyword present contributes its
/// label. The result is sorted and never empty.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    entries: Vec<TaxonomyEntry>,
}

impl DomainClassifier {
    pub fn new(entries: Vec<TaxonomyEntry>) -> Self {
        DomainClassifier {
            entries: entries.into_iter().map(TaxonomyEntry::normalized).collect(),
        }
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn classify(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let matched: BTreeSet<&str> = self
            .entries
            .iter()
            .filter(|entry| entry.matches(&lowered))
            .map(|entry| entry.label.as_str())
            .collect();

        if matched.is_empty() {
            return vec![GENERAL_DOMAIN.to_string()];
        }

        matched.into_iter().map(str::to_string).collect()
    }
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new(default_domains())
    }
}
