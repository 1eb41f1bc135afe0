//! Keyword taxonomies for domain and activity classification
//!
//! A taxonomy is an ordered list of labelled keyword groups. Order matters
//! for the activity taxonomy, where the first matching entry wins, so entries
//! are kept in a `Vec` rather than a map.

use serde::{Deserialize, Serialize};

/// Label returned by the domain classifier when nothing matches
pub const GENERAL_DOMAIN: &str = "general";

/// Label returned by the activity classifier when nothing matches
pub const REFERENCE_ACTIVITY: &str = "reference";

/// One labelled group of keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    /// Label emitted when any keyword matches
    pub label: String,
    /// Substrings searched for in the lower-cased text
    pub keywords: Vec<String>,
    /// Knowledge-base page linked from notes carrying this label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl TaxonomyEntry {
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        TaxonomyEntry {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            page: None,
        }
    }

    pub fn with_page(mut self, page: &str) -> Self {
        self.page = Some(page.to_string());
        self
    }

    /// Keywords are matched against lower-cased text, so they are stored
    /// lower-cased too.
    pub(crate) fn normalized(mut self) -> Self {
        for keyword in &mut self.keywords {
            *keyword = keyword.to_lowercase();
        }
        self
    }

    /// True if any keyword occurs in `lowered`
    pub(crate) fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Security-focused domains, in declaration order
pub fn default_domains() -> Vec<TaxonomyEntry> {
    vec![
        TaxonomyEntry::new(
            "grc",
            &[
                "risk",
                "compliance",
                "governance",
                "audit",
                "nist",
                "iso",
                "regulatory",
                "framework",
                "control",
                "policy",
            ],
        )
        .with_page("Governance, Risk, and Compliance"),
        TaxonomyEntry::new(
            "risk-management",
            &[
                "risk assessment",
                "risk analysis",
                "vulnerability",
                "threat",
                "cvss",
                "rmf",
                "mitigation",
            ],
        )
        .with_page("Risk Management"),
        TaxonomyEntry::new(
            "threat-intelligence",
            &[
                "mitre",
                "att&ck",
                "threat",
                "apt",
                "threat actor",
                "threat landscape",
                "ioc",
                "indicators",
            ],
        )
        .with_page("Threat Intelligence and Hunting"),
        TaxonomyEntry::new(
            "security-operations",
            &[
                "siem",
                "soc",
                "log",
                "monitoring",
                "incident",
                "detection",
                "response",
                "forensics",
            ],
        )
        .with_page("Security Operations"),
        TaxonomyEntry::new(
            "network-security",
            &[
                "firewall",
                "vpn",
                "network",
                "wireshark",
                "nmap",
                "packet",
                "tcp",
                "ids",
                "ips",
            ],
        )
        .with_page("Network Security"),
        TaxonomyEntry::new(
            "cryptography",
            &[
                "encryption",
                "cryptography",
                "cipher",
                "hash",
                "ssl",
                "tls",
                "certificate",
                "pki",
                "rsa",
                "aes",
            ],
        )
        .with_page("Cryptography"),
        TaxonomyEntry::new(
            "application-security",
            &[
                "owasp",
                "xss",
                "sql injection",
                "web security",
                "secure coding",
                "sast",
                "dast",
            ],
        )
        .with_page("Application Security"),
        TaxonomyEntry::new(
            "cloud-security",
            &[
                "aws",
                "azure",
                "cloud",
                "kubernetes",
                "docker",
                "container",
                "serverless",
            ],
        )
        .with_page("Cloud Security"),
        TaxonomyEntry::new(
            "iam",
            &[
                "authentication",
                "authorization",
                "access control",
                "identity",
                "rbac",
                "mfa",
                "sso",
                "ldap",
            ],
        )
        .with_page("Identity and Access Management (IAM)"),
        TaxonomyEntry::new(
            "career",
            &[
                "resume",
                "interview",
                "job",
                "career",
                "certification",
                "learning",
                "portfolio",
                "skills",
            ],
        )
        .with_page("Career Development"),
    ]
}

/// Conversation activities. The order is part of the classification
/// contract: ambiguous text takes the earliest matching label.
pub fn default_activities() -> Vec<TaxonomyEntry> {
    vec![
        TaxonomyEntry::new(
            "learning",
            &[
                "how to",
                "what is",
                "explain",
                "tutorial",
                "guide",
                "learn",
                "understanding",
            ],
        ),
        TaxonomyEntry::new(
            "research",
            &[
                "research",
                "investigate",
                "analyze",
                "compare",
                "review",
                "study",
            ],
        ),
        TaxonomyEntry::new(
            "problem-solving",
            &[
                "error",
                "fix",
                "debug",
                "troubleshoot",
                "issue",
                "problem",
                "solution",
            ],
        ),
        TaxonomyEntry::new(
            "planning",
            &[
                "plan",
                "strategy",
                "roadmap",
                "goals",
                "project",
                "organize",
                "structure",
            ],
        ),
        TaxonomyEntry::new(
            "reference",
            &[
                "list",
                "reference",
                "documentation",
                "guide",
                "cheat sheet",
                "quick reference",
            ],
        ),
    ]
}
