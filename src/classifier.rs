//! Task classification by keyword-set overlap.

use crate::normalize::TokenSet;
use crate::taxonomy::{TaskEntry, Taxonomy};
use tracing::debug;

/// Task name reported when no taxonomy entry shares a word with the prompt.
pub const NO_MATCH_TASK: &str = "No specific task matched";

/// Outcome of classifying a prompt against a [`Taxonomy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Best entry and the number of prompt tokens it shares
    Matched { task: &'a TaskEntry, overlap: usize },
    /// No entry overlaps the prompt
    NoMatch,
}

impl<'a> Classification<'a> {
    pub fn task_name(&self) -> &'a str {
        match *self {
            Classification::Matched { task, .. } => &task.name,
            Classification::NoMatch => NO_MATCH_TASK,
        }
    }

    pub fn steps(&self) -> &'a [String] {
        match *self {
            Classification::Matched { task, .. } => &task.steps,
            Classification::NoMatch => &[],
        }
    }

    pub fn overlap(&self) -> usize {
        match *self {
            Classification::Matched { overlap, .. } => overlap,
            Classification::NoMatch => 0,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Matched { .. })
    }
}

/// Pick the entry whose name shares the most tokens with the prompt.
///
/// Entries are scanned in declaration order and only a strictly greater
/// overlap replaces the current best, so the earliest entry wins ties.
pub fn classify<'a>(taxonomy: &'a Taxonomy, prompt_tokens: &TokenSet) -> Classification<'a> {
    let mut best = Classification::NoMatch;
    let mut max_overlap = 0;

    if prompt_tokens.is_empty() {
        return best;
    }

    for (entry, name_tokens) in taxonomy.iter_with_name_tokens() {
        let overlap = name_tokens
            .iter()
            .filter(|token| prompt_tokens.contains(*token))
            .count();
        debug!("task {:?}: overlap {}", entry.name, overlap);

        if overlap > max_overlap {
            max_overlap = overlap;
            best = Classification::Matched {
                task: entry,
                overlap,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn test_api_integration_prompt() {
        let tokens = normalize("I need to integrate an API and parse JSON");
        let result = classify(Taxonomy::builtin(), &tokens);
        assert_eq!(result.task_name(), "API Integration");
        assert_eq!(result.steps().len(), 5);
        assert_eq!(result.overlap(), 1);
    }

    #[test]
    fn test_empty_prompt_is_sentinel() {
        let result = classify(Taxonomy::builtin(), &normalize(""));
        assert_eq!(result, Classification::NoMatch);
        assert_eq!(result.task_name(), NO_MATCH_TASK);
        assert!(result.steps().is_empty());
    }

    #[test]
    fn test_unrelated_prompt_is_sentinel() {
        let tokens = normalize("I need to show data from a server");
        let result = classify(Taxonomy::builtin(), &tokens);
        assert!(!result.is_match());
        assert_eq!(result.task_name(), "No specific task matched");
    }

    #[test]
    fn test_earlier_task_wins_tie() {
        let taxonomy = Taxonomy::new(vec![
            TaskEntry::new("Database Migration", &["Write migration"]),
            TaskEntry::new("Database Tuning", &["Add indexes"]),
        ])
        .unwrap();
        let result = classify(&taxonomy, &normalize("database help"));
        assert_eq!(result.task_name(), "Database Migration");
    }

    #[test]
    fn test_strictly_greater_overlap_replaces_best() {
        let taxonomy = Taxonomy::new(vec![
            TaskEntry::new("Database Migration", &[]),
            TaskEntry::new("Database Tuning", &[]),
        ])
        .unwrap();
        let result = classify(&taxonomy, &normalize("tuning the database"));
        assert_eq!(result.task_name(), "Database Tuning");
        assert_eq!(result.overlap(), 2);
    }

    #[test]
    fn test_steps_do_not_affect_classification() {
        // "json" only appears in API Integration steps, not its name
        let result = classify(Taxonomy::builtin(), &normalize("parse json"));
        assert!(!result.is_match());
    }

    #[test]
    fn test_punctuated_task_name_matches() {
        let result = classify(Taxonomy::builtin(), &normalize("platform specific widgets"));
        assert_eq!(result.task_name(), "Adapting to Platform-Specific Features");
        assert_eq!(result.overlap(), 2);
    }

    #[test]
    fn test_deterministic() {
        let tokens = normalize("performance testing and debugging");
        let first = classify(Taxonomy::builtin(), &tokens);
        for _ in 0..10 {
            assert_eq!(classify(Taxonomy::builtin(), &tokens), first);
        }
        // Testing is declared before Debugging and Performance Optimization
        assert_eq!(first.task_name(), "Testing");
    }
}
