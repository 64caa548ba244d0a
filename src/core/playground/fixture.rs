use super::types::{ExcerptBudget, Fixture, FixtureSummary, PlaygroundTask};
use crate::utils::text::{first_chars, strip_tags, trim_words};

/// Words kept in the fixture summary returned with a report.
pub const SUMMARY_WORDS: usize = 100;

/// Plain-text slice of the fixture sized for `task`. Markup is removed
/// before the budget is applied.
pub fn extract_excerpt(fixture: &Fixture, task: &PlaygroundTask) -> String {
    let plain = strip_tags(&fixture.content);
    match task.excerpt_budget() {
        ExcerptBudget::Chars(limit) => first_chars(&plain, limit),
        ExcerptBudget::TitleAndWords(limit) => {
            format!("{}\n\n{}", fixture.title, trim_words(&plain, limit))
        }
        ExcerptBudget::Words(limit) => trim_words(&plain, limit),
    }
}

pub fn summarize(fixture: &Fixture, excerpt: &str) -> FixtureSummary {
    FixtureSummary {
        title: fixture.title.clone(),
        excerpt: trim_words(excerpt, SUMMARY_WORDS),
    }
}
