use std::collections::BTreeSet;

use super::types::CheckCategory;

/// Keywords in a don't rule that switch a check on. Matched
/// case-insensitively as substrings.
static ACTIVATION_KEYWORDS: &[(CheckCategory, &[&str])] = &[
    (CheckCategory::Urgency, &["urgency", "pressure"]),
    (CheckCategory::Superlatives, &["best", "#1", "superlative"]),
];

/// Which pattern checks the site's don'ts ask for.
pub fn infer_activated_checks(donts: &[String]) -> BTreeSet<CheckCategory> {
    let lowered: Vec<String> = donts.iter().map(|rule| rule.to_lowercase()).collect();
    ACTIVATION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| {
            lowered
                .iter()
                .any(|rule| keywords.iter().any(|keyword| rule.contains(keyword)))
        })
        .map(|(category, _)| *category)
        .collect()
}
