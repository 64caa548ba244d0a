use regex::Regex;
use std::sync::LazyLock;

use super::activation::infer_activated_checks;
use super::analysis::{count_words, round1, split_sentences, term_pattern};
use super::types::{CheckCategory, CopyRuleKind, LintIssue, LintReport, LintStats, LintSuggestion};
use crate::core::guidelines::{GuidelinesDocument, Readability};
use crate::utils::text::strip_tags;

/// One family of checks. Rules append to the shared report in the order the
/// checker runs them.
pub trait LintRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, content: &str, document: &GuidelinesDocument, report: &mut LintReport);
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

// ── Vocabulary ───────────────────────────────────────────────────

pub struct VocabularyRule;

impl LintRule for VocabularyRule {
    fn name(&self) -> &'static str {
        "vocabulary"
    }

    fn apply(&self, content: &str, document: &GuidelinesDocument, report: &mut LintReport) {
        let vocabulary = &document.vocabulary;

        for entry in &vocabulary.avoid {
            let term = entry.term.trim().to_lowercase();
            let Some(pattern) = term_pattern(&term) else {
                continue;
            };
            let count = pattern.find_iter(content).count();
            if count == 0 {
                continue;
            }
            report.issues.push(LintIssue::VocabularyAvoid {
                message: format!(
                    "Found \"{term}\" ({count} {})",
                    plural(count, "occurrence", "occurrences")
                ),
                term,
                count,
                note: entry.note.clone(),
            });
        }

        for entry in vocabulary.prefer.iter().filter(|entry| !entry.note.is_empty()) {
            let term = entry.term.trim().to_lowercase();
            let Some(pattern) = term_pattern(&term) else {
                continue;
            };
            if pattern.is_match(content) {
                continue;
            }
            report.suggestions.push(LintSuggestion::VocabularyPrefer {
                message: format!("Consider using \"{term}\""),
                term,
                note: entry.note.clone(),
            });
        }
    }
}

// ── Readability ──────────────────────────────────────────────────

/// Target average words per sentence for a readability level. Custom levels
/// use the general-audience ceiling.
pub fn sentence_ceiling(readability: Option<&Readability>) -> u32 {
    match readability {
        Some(Readability::Simple) => 12,
        Some(Readability::Expert) => 30,
        Some(Readability::General | Readability::Custom(_)) | None => 20,
    }
}

pub struct ReadabilityRule;

impl LintRule for ReadabilityRule {
    fn name(&self) -> &'static str {
        "readability"
    }

    #[allow(clippy::cast_precision_loss)]
    fn apply(&self, content: &str, document: &GuidelinesDocument, report: &mut LintReport) {
        let readability = document.voice_tone.readability.as_ref();
        let target_name = readability.map_or("general", Readability::as_str);
        let ceiling = sentence_ceiling(readability);

        let sentences = split_sentences(content);
        let words = count_words(&strip_tags(content));
        let average = if sentences.is_empty() {
            0.0
        } else {
            round1(words as f64 / sentences.len() as f64)
        };

        report.stats = LintStats {
            word_count: Some(words),
            sentence_count: Some(sentences.len()),
            avg_words_per_sentence: Some(average),
        };

        if average > f64::from(ceiling) {
            report.issues.push(LintIssue::Readability {
                message: format!(
                    "Average sentence length is {average} words. Target for \"{target_name}\" readability is around {ceiling} words."
                ),
                actual: average,
                target: ceiling,
            });
        }

        let long_limit = ceiling as usize * 2;
        let long = sentences
            .iter()
            .filter(|sentence| count_words(sentence) > long_limit)
            .count();
        if long > 0 {
            report.suggestions.push(LintSuggestion::LongSentences {
                message: format!(
                    "{long} {} very long and may be hard to read.",
                    plural(long, "sentence is", "sentences are")
                ),
                count: long,
            });
        }
    }
}

// ── Copy rule patterns ───────────────────────────────────────────

/// Phrases scanned for when a don't mentions urgency or pressure.
pub static URGENCY_PHRASES: &[&str] = &[
    "act now",
    "limited time",
    "don't miss",
    "hurry",
    "last chance",
    "expires soon",
    "urgent",
];

static SUPERLATIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["best", "#1", "number one", "top-rated", "unbeatable"]
        .iter()
        .filter_map(|term| term_pattern(term))
        .collect()
});

pub struct CopyRulePatterns;

impl LintRule for CopyRulePatterns {
    fn name(&self) -> &'static str {
        "copy_rules"
    }

    fn apply(&self, content: &str, document: &GuidelinesDocument, report: &mut LintReport) {
        let checks = infer_activated_checks(&document.copy_rules.donts);
        if checks.is_empty() {
            return;
        }

        if checks.contains(&CheckCategory::Urgency) {
            let lowered = content.to_lowercase();
            for phrase in URGENCY_PHRASES.iter().filter(|phrase| lowered.contains(*phrase)) {
                report.issues.push(LintIssue::CopyRule {
                    rule: CopyRuleKind::NoUrgency,
                    message: format!("Found urgency phrase: \"{phrase}\""),
                    pattern: (*phrase).to_string(),
                });
            }
        }

        if checks.contains(&CheckCategory::Superlatives) {
            for pattern in SUPERLATIVE_PATTERNS.iter() {
                if let Some(found) = pattern.find(content) {
                    let matched = found.as_str();
                    report.issues.push(LintIssue::CopyRule {
                        rule: CopyRuleKind::NoSuperlatives,
                        message: format!("Found superlative claim: \"{matched}\""),
                        pattern: matched.to_string(),
                    });
                }
            }
        }
    }
}
