use regex::Regex;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Ellipsis appended by [`truncate_to_budget`].
pub const ELLIPSIS: &str = "...";

/// Marker appended by [`trim_words`] when words were dropped.
pub const MORE_MARKER: &str = "\u{2026}";

/// Cut `s` so that the result is exactly `max_chars` characters long,
/// ending in `...`. Strings already within budget are returned unchanged.
#[must_use]
pub fn truncate_to_budget(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// First `max_chars` characters of `s`, never splitting a code point.
#[must_use]
pub fn first_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Keep the first `num_words` whitespace-separated words, joined by single
/// spaces. Appends `…` when words were dropped.
#[must_use]
pub fn trim_words(text: &str, num_words: usize) -> String {
    let mut words = text.split_whitespace();
    let kept: Vec<&str> = words.by_ref().take(num_words).collect();
    let mut out = kept.join(" ");
    if words.next().is_some() {
        out.push_str(MORE_MARKER);
    }
    out
}

/// Remove HTML tags and comments.
#[must_use]
pub fn strip_tags(s: &str) -> String {
    TAG_PATTERN.replace_all(s, "").into_owned()
}

/// Single-line sanitization for stored guideline strings: tags removed,
/// whitespace runs collapsed, ends trimmed.
#[must_use]
pub fn sanitize_text(s: &str) -> String {
    let stripped = strip_tags(s);
    WHITESPACE_RUN
        .replace_all(stripped.trim(), " ")
        .into_owned()
}
