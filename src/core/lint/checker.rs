use super::rules::{CopyRulePatterns, LintRule, ReadabilityRule, VocabularyRule};
use super::types::LintReport;
use crate::core::guidelines::GuidelinesDocument;

/// Runs a fixed list of rules over content.
pub struct LintChecker {
    rules: Vec<Box<dyn LintRule>>,
}

impl LintChecker {
    pub fn new(rules: Vec<Box<dyn LintRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Blank content or a missing document yields an empty report.
    pub fn check(&self, content: &str, document: Option<&GuidelinesDocument>) -> LintReport {
        let mut report = LintReport::default();
        let Some(document) = document else {
            return report;
        };
        if content.trim().is_empty() {
            return report;
        }
        for rule in &self.rules {
            rule.apply(content, document, &mut report);
        }
        tracing::debug!(
            issues = report.issues.len(),
            suggestions = report.suggestions.len(),
            "lint finished"
        );
        report
    }
}

impl Default for LintChecker {
    fn default() -> Self {
        Self::new(vec![
            Box::new(VocabularyRule),
            Box::new(ReadabilityRule),
            Box::new(CopyRulePatterns),
        ])
    }
}

/// Lint with the default rule set.
pub fn check(content: &str, document: Option<&GuidelinesDocument>) -> LintReport {
    LintChecker::default().check(content, document)
}
