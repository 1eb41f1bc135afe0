//! Note assembly: frontmatter, tags, related links and the final markdown

pub mod frontmatter;

use std::sync::OnceLock;

use regex::Regex;
use sha2::{Digest, Sha256};

use crate::analysis::Analysis;
use crate::config::ConverterConfig;
use crate::document::Document;
use crate::error::Result;
pub use frontmatter::NoteFrontmatter;

const SAFE_TITLE_CHARS: usize = 50;
const SOURCE_HASH_LEN: usize = 8;

static BLANK_RUN_RE: OnceLock<Regex> = OnceLock::new();
static SPEAKER_RE: OnceLock<Regex> = OnceLock::new();
static UNSAFE_CHARS_RE: OnceLock<Regex> = OnceLock::new();
static SEPARATOR_RUN_RE: OnceLock<Regex> = OnceLock::new();

fn blank_run_regex() -> &'static Regex {
    BLANK_RUN_RE.get_or_init(|| Regex::new(r"\n{3,}").expect("blank run pattern is valid"))
}

fn speaker_regex() -> &'static Regex {
    SPEAKER_RE.get_or_init(|| {
        Regex::new(r"(?m)^(User|Assistant|Q|A):\s*").expect("speaker pattern is valid")
    })
}

fn unsafe_chars_regex() -> &'static Regex {
    UNSAFE_CHARS_RE
        .get_or_init(|| Regex::new(r"[^\w\s-]").expect("unsafe chars pattern is valid"))
}

fn separator_run_regex() -> &'static Regex {
    SEPARATOR_RUN_RE.get_or_init(|| Regex::new(r"[-\s]+").expect("separator pattern is valid"))
}

/// A rendered note, ready to be written
#[derive(Debug, Clone)]
pub struct AssembledNote {
    pub file_name: String,
    pub frontmatter: NoteFrontmatter,
    pub markdown: String,
}

/// Turns an [`Analysis`] into note markdown
#[derive(Debug, Clone)]
pub struct NoteAssembler {
    /// `(domain label, page name)` in taxonomy order
    domain_pages: Vec<(String, String)>,
    footer: String,
}

impl NoteAssembler {
    pub fn new(domain_pages: Vec<(String, String)>, footer: impl Into<String>) -> Self {
        NoteAssembler {
            domain_pages,
            footer: footer.into(),
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        let pages = config
            .domains
            .iter()
            .filter_map(|d| d.page.clone().map(|page| (d.label.clone(), page)))
            .collect();
        Self::new(pages, config.note.footer.clone())
    }

    /// Sorted, de-duplicated tag list
    pub fn tags(analysis: &Analysis) -> Vec<String> {
        let source = analysis.source_type.as_str();
        let mut tags = vec![
            "conversation".to_string(),
            source.to_string(),
            format!("activity/{}", analysis.activity),
        ];
        tags.extend(analysis.domains.iter().cloned());
        tags.push(format!("source/{}", source));

        tags.sort();
        tags.dedup();
        tags
    }

    /// Wiki links to domain pages, then to each topic
    pub fn related_links(&self, analysis: &Analysis) -> Vec<String> {
        let domain_links = analysis.domains.iter().filter_map(|domain| {
            self.domain_pages
                .iter()
                .find(|(label, _)| label == domain)
                .map(|(_, page)| format!("[[{}]]", page))
        });
        let topic_links = analysis.topics.iter().map(|topic| format!("[[{}]]", topic));

        domain_links.chain(topic_links).collect()
    }

    pub fn frontmatter(doc: &Document, analysis: &Analysis) -> NoteFrontmatter {
        let primary_domain = analysis
            .domains
            .first()
            .map_or(crate::taxonomy::GENERAL_DOMAIN, String::as_str);

        NoteFrontmatter {
            title: analysis.title.clone(),
            domain: format!("conversations/{}", primary_domain),
            note_type: NoteFrontmatter::NOTE_TYPE.to_string(),
            source: analysis.source_type.as_str().to_string(),
            source_file: doc.file_name(),
            created: analysis.date.clone(),
            tags: Self::tags(analysis),
            status: NoteFrontmatter::STATUS_CONVERTED.to_string(),
        }
    }

    pub fn assemble(&self, doc: &Document, analysis: &Analysis) -> Result<AssembledNote> {
        let frontmatter = Self::frontmatter(doc, analysis);

        let mut out = frontmatter.to_block()?;
        out.push('\n');
        out.push_str(&format!("# {}\n\n", analysis.title));
        out.push_str(&format!("**Date**: {}  \n", analysis.date));
        out.push_str(&format!(
            "**Source**: {}  \n\n",
            analysis.source_type.display_name()
        ));
        out.push_str("---\n\n");
        out.push_str("## Conversation\n\n");
        out.push_str(&clean_content(doc.content()));
        out.push_str("\n\n---\n\n");
        out.push_str("## Related Topics\n\n");
        for link in self.related_links(analysis) {
            out.push_str(&format!("- {}\n", link));
        }
        out.push_str("\n---\n");
        out.push_str(&self.footer);
        out.push('\n');

        Ok(AssembledNote {
            file_name: output_file_name(&analysis.date, &analysis.title, &doc.file_name()),
            frontmatter,
            markdown: out,
        })
    }
}

impl Default for NoteAssembler {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}

/// Collapse blank-line runs and bold the speaker labels
pub fn clean_content(text: &str) -> String {
    let collapsed = blank_run_regex().replace_all(text, "\n\n");
    let labelled = speaker_regex().replace_all(&collapsed, "**${1}**: ");
    labelled.trim().to_string()
}

/// `<date>_<safe title>_<source hash>.md`
///
/// The hash of the source file name keeps notes with the same title and
/// date from overwriting each other.
pub fn output_file_name(date: &str, title: &str, source_name: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = unsafe_chars_regex().replace_all(&lowered, "");
    let safe_title: String = separator_run_regex()
        .replace_all(&stripped, "_")
        .chars()
        .take(SAFE_TITLE_CHARS)
        .collect();

    let mut hasher = Sha256::new();
    hasher.update(source_name.as_bytes());
    let source_hash = hex::encode(hasher.finalize());

    format!(
        "{}_{}_{}.md",
        date,
        safe_title,
        &source_hash[..SOURCE_HASH_LEN]
    )
}
