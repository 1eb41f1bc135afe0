//! Which chat tool produced a transcript

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::topics::title_case;

/// Markers are only looked for near the top of the export
const SNIFF_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Perplexity,
    VscodeCopilot,
    VscodeExport,
    General,
}

impl SourceType {
    pub fn detect(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let head: String = lowered.chars().take(SNIFF_CHARS).collect();

        if head.contains("perplexity") {
            SourceType::Perplexity
        } else if head.contains("github copilot") {
            SourceType::VscodeCopilot
        } else if text.contains("```json") && lowered.contains("conversation") {
            SourceType::VscodeExport
        } else {
            SourceType::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Perplexity => "perplexity",
            SourceType::VscodeCopilot => "vscode_copilot",
            SourceType::VscodeExport => "vscode_export",
            SourceType::General => "general",
        }
    }

    /// Label for the note body (`vscode_copilot` -> `Vscode Copilot`)
    pub fn display_name(&self) -> String {
        title_case(&self.as_str().replace('_', " "))
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
