//! Topic entity extraction
//!
//! Recognizes named frameworks, standards and tools by literal substrings.
//! Every rule runs against the whole text; one rule matching never stops
//! the others.

use serde::{Deserialize, Serialize};

/// A single detection rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TopicRule {
    /// Emit `label` when any `any` keyword is present and, if `requires` is
    /// non-empty, at least one `requires` keyword is present too.
    Pattern {
        label: String,
        any: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        requires: Vec<String>,
    },
    /// Emit the title-cased name of every tool found in the text
    Tools { names: Vec<String> },
}

impl TopicRule {
    pub fn pattern(label: &str, any: &[&str]) -> Self {
        TopicRule::Pattern {
            label: label.to_string(),
            any: to_owned(any),
            requires: Vec::new(),
        }
    }

    pub fn gated(label: &str, requires: &[&str], any: &[&str]) -> Self {
        TopicRule::Pattern {
            label: label.to_string(),
            any: to_owned(any),
            requires: to_owned(requires),
        }
    }

    pub fn tools(names: &[&str]) -> Self {
        TopicRule::Tools {
            names: to_owned(names),
        }
    }

    fn normalized(self) -> Self {
        match self {
            TopicRule::Pattern {
                label,
                any,
                requires,
            } => TopicRule::Pattern {
                label,
                any: lowercase_all(any),
                requires: lowercase_all(requires),
            },
            TopicRule::Tools { names } => TopicRule::Tools {
                names: lowercase_all(names),
            },
        }
    }

    fn apply(&self, lowered: &str, out: &mut Vec<String>) {
        match self {
            TopicRule::Pattern {
                label,
                any,
                requires,
            } => {
                let gate_open =
                    requires.is_empty() || requires.iter().any(|k| lowered.contains(k.as_str()));
                if gate_open && any.iter().any(|k| lowered.contains(k.as_str())) {
                    out.push(label.clone());
                }
            }
            TopicRule::Tools { names } => {
                out.extend(
                    names
                        .iter()
                        .filter(|name| lowered.contains(name.as_str()))
                        .map(|name| title_case(name)),
                );
            }
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn lowercase_all(items: Vec<String>) -> Vec<String> {
    items.into_iter().map(|s| s.to_lowercase()).collect()
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
/// (`burp suite` -> `Burp Suite`, `elk` -> `Elk`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Built-in rules, in evaluation order
pub fn default_rules() -> Vec<TopicRule> {
    vec![
        TopicRule::gated("NIST-RMF", &["nist"], &["rmf"]),
        TopicRule::gated("NIST-800-53", &["nist"], &["800-53"]),
        TopicRule::gated("NIST-CSF", &["nist"], &["csf", "cybersecurity framework"]),
        TopicRule::pattern("MITRE ATT&CK", &["mitre", "att&ck"]),
        TopicRule::pattern("CVSS", &["cvss"]),
        TopicRule::pattern("ISO 27001", &["iso 27001", "iso27001"]),
        TopicRule::tools(&[
            "wireshark",
            "nmap",
            "splunk",
            "metasploit",
            "burp suite",
            "snort",
            "suricata",
            "zeek",
            "elk",
            "siem",
        ]),
    ]
}

/// Ordered topic extractor
#[derive(Debug, Clone)]
pub struct TopicExtractor {
    rules: Vec<TopicRule>,
}

impl TopicExtractor {
    pub fn new(rules: Vec<TopicRule>) -> Self {
        TopicExtractor {
            rules: rules.into_iter().map(TopicRule::normalized).collect(),
        }
    }

    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }

    /// Labels in rule order. A label produced by more than one rule is kept
    /// once, at its first position.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut found = Vec::new();
        for rule in &self.rules {
            rule.apply(&lowered, &mut found);
        }

        let mut topics: Vec<String> = Vec::with_capacity(found.len());
        for label in found {
            if !topics.contains(&label) {
                topics.push(label);
            }
        }
        topics
    }
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new(default_rules())
    }
}
