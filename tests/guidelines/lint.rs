use content_guidelines::core::guidelines::{GuidelinesDocument, Readability, TermNote};
use content_guidelines::core::lint::{LintChecker, LintIssue, LintSuggestion, check};

use crate::support::{post_content, sample_document};

fn avoid(term: &str) -> GuidelinesDocument {
    let mut doc = GuidelinesDocument::default();
    doc.vocabulary.avoid = vec![TermNote::new(term, "")];
    doc
}

fn twenty_five_word_sentence() -> String {
    let words: Vec<&str> = std::iter::repeat_n("apple", 25).collect();
    format!("{}.", words.join(" "))
}

fn with_readability(readability: Readability) -> GuidelinesDocument {
    let mut doc = GuidelinesDocument::default();
    doc.voice_tone.readability = Some(readability);
    doc
}

fn with_donts(donts: &[&str]) -> GuidelinesDocument {
    let mut doc = GuidelinesDocument::default();
    doc.copy_rules.donts = donts.iter().map(|rule| (*rule).to_string()).collect();
    doc
}

#[test]
fn avoid_terms_respect_word_boundaries() {
    let doc = avoid("class");
    assert!(check("This is classy.", Some(&doc)).issues.is_empty());

    let report = check("This is a class act.", Some(&doc));
    assert_eq!(report.issues.len(), 1);
    match &report.issues[0] {
        LintIssue::VocabularyAvoid { term, count, .. } => {
            assert_eq!(term, "class");
            assert_eq!(*count, 1);
        }
        other => panic!("unexpected issue {other:?}"),
    }
}

#[test]
fn avoid_terms_count_every_case_insensitive_hit() {
    let report = check("Class dismissed. The class was first class.", Some(&avoid("class")));
    assert!(matches!(
        report.issues.as_slice(),
        [LintIssue::VocabularyAvoid { count: 3, .. }]
    ));
    assert!(!report.passed());
}

#[test]
fn prefer_terms_without_note_are_silent() {
    let mut doc = GuidelinesDocument::default();
    doc.vocabulary.prefer = vec![
        TermNote::new("weeknight", "Our core promise"),
        TermNote::new("supper", ""),
    ];
    let report = check("Dinner in twenty minutes.", Some(&doc));
    assert_eq!(report.suggestions.len(), 1);
    assert!(matches!(
        &report.suggestions[0],
        LintSuggestion::VocabularyPrefer { term, .. } if term == "weeknight"
    ));
    assert!(report.passed());
}

#[test]
fn readability_ceiling_depends_on_level() {
    let content = twenty_five_word_sentence();

    let report = check(&content, Some(&with_readability(Readability::Simple)));
    let readability: Vec<&LintIssue> = report
        .issues
        .iter()
        .filter(|issue| issue.code() == "readability")
        .collect();
    assert_eq!(readability.len(), 1);
    match readability[0] {
        LintIssue::Readability { actual, target, .. } => {
            assert!((actual - 25.0).abs() < f64::EPSILON);
            assert_eq!(*target, 12);
        }
        other => panic!("unexpected issue {other:?}"),
    }

    let report = check(&content, Some(&with_readability(Readability::Expert)));
    assert!(report.issues.iter().all(|issue| issue.code() != "readability"));
}

#[test]
fn stats_describe_the_content() {
    let content = post_content(&["Short one. Another short one!"]);
    let report = check(&content, Some(&GuidelinesDocument::default()));
    assert_eq!(report.stats.word_count, Some(5));
    assert_eq!(report.stats.sentence_count, Some(2));
    assert_eq!(report.stats.avg_words_per_sentence, Some(2.5));
}

#[test]
fn urgency_check_needs_a_trigger_rule() {
    let content = "Act now before the menu changes.";

    let report = check(content, Some(&with_donts(&["Avoid creating urgency"])));
    let codes: Vec<String> = report.issues.iter().map(LintIssue::code).collect();
    assert_eq!(codes, vec!["copy_rule/no_urgency"]);

    let report = check(content, Some(&with_donts(&["Be humble"])));
    assert!(report.issues.iter().all(|issue| !issue.code().starts_with("copy_rule")));
}

#[test]
fn superlative_check_reports_matched_text() {
    let report = check(
        "Simply the Best soup in town.",
        Some(&with_donts(&["No superlative claims"])),
    );
    assert!(matches!(
        report.issues.as_slice(),
        [LintIssue::CopyRule { pattern, .. }] if pattern == "Best"
    ));
}

#[test]
fn empty_input_gives_empty_report() {
    let doc = sample_document();
    for report in [check("", Some(&doc)), check("   ", Some(&doc)), check("A class act.", None)] {
        assert!(report.issues.is_empty());
        assert!(report.suggestions.is_empty());
        assert_eq!(
            serde_json::to_value(&report.stats).unwrap(),
            serde_json::json!({})
        );
    }
}

#[test]
fn checker_runs_rules_in_order() {
    let checker = LintChecker::default();
    assert_eq!(checker.rule_names(), vec!["vocabulary", "readability", "copy_rules"]);

    let mut doc = sample_document();
    doc.voice_tone.readability = Some(Readability::Simple);
    let content = format!("Act now, this class deal ends. {}", twenty_five_word_sentence());
    let codes: Vec<String> = checker
        .check(&content, Some(&doc))
        .issues
        .iter()
        .map(LintIssue::code)
        .collect();
    assert_eq!(
        codes,
        vec!["vocabulary_avoid", "readability", "copy_rule/no_urgency"]
    );
}
