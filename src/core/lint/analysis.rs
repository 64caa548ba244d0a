use regex::Regex;
use std::sync::LazyLock;

use crate::utils::text::strip_tags;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}[\p{L}'-]*").unwrap());
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+(?:\s|$)").unwrap());

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn edge_assertion(edge: Option<char>) -> &'static str {
    match edge {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"\B",
    }
}

/// Case-insensitive whole-term matcher.
///
/// A `\b` anchor only makes sense next to a word character, so edges that
/// start or end with punctuation (`#1`) use `\B` instead. Returns `None` for
/// blank terms.
pub fn term_pattern(term: &str) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let pattern = format!(
        "(?i){}{}{}",
        edge_assertion(term.chars().next()),
        regex::escape(term),
        edge_assertion(term.chars().last()),
    );
    Regex::new(&pattern).ok()
}

/// Letter-initial word tokens.
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Sentences of `content` with markup removed. Fragments with no visible
/// text are dropped.
pub fn split_sentences(content: &str) -> Vec<String> {
    let plain = strip_tags(content);
    SENTENCE_END
        .split(&plain)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// `value` rounded to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
