//! Title heuristics, tried in order until one produces a title

use std::sync::OnceLock;

use regex::Regex;

/// Title used when every heuristic comes up empty
pub const FALLBACK_TITLE: &str = "Conversation";

const MAX_TITLE_CHARS: usize = 80;
const MIN_CANDIDATE_CHARS: usize = 20;
const HEADING_SCAN_LINES: usize = 20;
const LINE_SCAN_LINES: usize = 30;

/// Generic headings exporters emit that say nothing about the content
const PLACEHOLDER_TITLES: &[&str] = &["chat session", "conversation", "untitled"];

/// Openers that make a question useless as a title
const SMALL_TALK: &[&str] = &["how are you", "hello", "hi ", "test"];

/// Line starts that mark structure or metadata rather than prose
const STRUCTURAL_PREFIXES: &[&str] = &["---", "```", ">", "#", "Date:", "Source:"];

/// One step of the title cascade
pub type TitleHeuristic = fn(&str) -> Option<String>;

/// The cascade, in priority order
pub const TITLE_CASCADE: &[TitleHeuristic] = &[from_heading, from_question, from_first_line];

static QUESTION_RE: OnceLock<Regex> = OnceLock::new();
static EMPHASIS_RE: OnceLock<Regex> = OnceLock::new();

fn question_regex() -> &'static Regex {
    QUESTION_RE.get_or_init(|| {
        Regex::new(r"(?mi)^(?:User|Q|Question):\s*(.+?)(?:\n|$)")
            .expect("question pattern is valid")
    })
}

fn emphasis_regex() -> &'static Regex {
    EMPHASIS_RE.get_or_init(|| Regex::new(r"[*_`]").expect("emphasis pattern is valid"))
}

fn is_placeholder(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();
    PLACEHOLDER_TITLES.contains(&lowered.as_str())
}

fn truncate(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let head: String = title.chars().take(MAX_TITLE_CHARS).collect();
        format!("{}...", head)
    } else {
        title.to_string()
    }
}

/// First `# ` or `## ` heading among the leading lines
pub fn from_heading(text: &str) -> Option<String> {
    text.split('\n')
        .take(HEADING_SCAN_LINES)
        .filter_map(|line| {
            line.strip_prefix("# ")
                .or_else(|| line.strip_prefix("## "))
                .map(str::trim)
        })
        .find(|heading| !heading.is_empty() && !is_placeholder(heading))
        .map(str::to_string)
}

/// First substantial `User:` / `Q:` / `Question:` line
pub fn from_question(text: &str) -> Option<String> {
    question_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|question| {
            let lowered = question.to_lowercase();
            question.chars().count() > MIN_CANDIDATE_CHARS
                && !SMALL_TALK.iter().any(|skip| lowered.contains(skip))
        })
        .map(|question| truncate(&emphasis_regex().replace_all(question, "")))
}

/// First long prose line near the top of the document
pub fn from_first_line(text: &str) -> Option<String> {
    text.split('\n')
        .take(LINE_SCAN_LINES)
        .map(str::trim)
        .find(|line| {
            line.chars().count() > MIN_CANDIDATE_CHARS
                && !STRUCTURAL_PREFIXES.iter().any(|p| line.starts_with(p))
                && !is_placeholder(line)
        })
        .map(truncate)
}
