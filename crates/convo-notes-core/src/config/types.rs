//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::taxonomy::{default_activities, default_domains, TaxonomyEntry};
use crate::topics::{default_rules, TopicRule};

/// Converter configuration
///
/// Every section is optional; an absent section keeps the built-in tables.
/// A present section replaces the built-in one wholesale, it is not merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Domain taxonomy, in declaration order
    #[serde(default = "default_domains")]
    pub domains: Vec<TaxonomyEntry>,

    /// Activity taxonomy; the first matching entry wins
    #[serde(default = "default_activities")]
    pub activities: Vec<TaxonomyEntry>,

    /// Topic detection rules, in evaluation order
    #[serde(default = "default_rules")]
    pub topics: Vec<TopicRule>,

    /// Note rendering options
    #[serde(default)]
    pub note: NoteConfig,

    /// Input discovery defaults for `convert --input-dir`
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            domains: default_domains(),
            activities: default_activities(),
            topics: default_rules(),
            note: NoteConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Last line of every generated note
    #[serde(default = "default_footer")]
    pub footer: String,
}

impl Default for NoteConfig {
    fn default() -> Self {
        NoteConfig {
            footer: default_footer(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Glob matched against file names
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Descend into subdirectories
    #[serde(default = "default_recursive")]
    pub recursive: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            pattern: default_pattern(),
            recursive: default_recursive(),
        }
    }
}

fn default_footer() -> String {
    "*Part of [[Core Cybersecurity Domains]] > [[Knowledge Base]]*".to_string()
}

fn default_pattern() -> String {
    "*.md".to_string()
}

fn default_recursive() -> bool {
    true
}
