//! Turns a free-form model reply into a list of sentences.
//!
//! The model's output format is not contractual: it may number its lines,
//! bullet them with dashes, prefix them with a label and a colon, quote
//! them, or echo parts of the prompt back. Every line is handled on its
//! own and the survivors are returned in source order.

use common::model::generation::GenerationType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Prompt sections the model sometimes repeats back.
const ECHO_PREFIXES: [&str; 5] = ["키워드", "규칙", "예시", "대화", "정답"];

/// Bare hint lines longer than this are prose, not hints.
const MAX_BARE_HINT_CHARS: usize = 20;

static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\. ").expect("numbered-line regex is valid"));

const QUOTE_PAIRS: [(char, char); 4] = [('"', '"'), ('\'', '\''), ('“', '”'), ('‘', '’')];

/// Extracts the generated items from `text`.
pub fn parse_generated_lines(text: &str, kind: GenerationType) -> Vec<String> {
    text.lines()
        .filter_map(|line| parse_line(line.trim(), kind))
        .collect()
}

fn parse_line(line: &str, kind: GenerationType) -> Option<String> {
    if line.is_empty() || ECHO_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return None;
    }

    let candidate = if NUMBERED_RE.is_match(line) {
        line.split_once(". ").map(|(_, rest)| rest)?
    } else if let Some(rest) = line.strip_prefix('-') {
        rest
    } else if line.contains(':') && !starts_with_quote(line) {
        line.split_once(':').map(|(_, rest)| rest)?
    } else if kind != GenerationType::Hint || line.chars().count() <= MAX_BARE_HINT_CHARS {
        line
    } else {
        return None;
    };

    let cleaned = strip_quotes(candidate.trim()).trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

fn starts_with_quote(s: &str) -> bool {
    s.chars()
        .next()
        .is_some_and(|c| QUOTE_PAIRS.iter().any(|(open, _)| *open == c))
}

/// Removes one matching pair of surrounding quotes.
fn strip_quotes(s: &str) -> &str {
    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = s.strip_prefix(open).and_then(|r| r.strip_suffix(close)) {
            return inner;
        }
    }
    s
}
