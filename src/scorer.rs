//! Count-aware tag overlap and task vocabularies.

use crate::classifier::Classification;
use crate::normalize::{normalize, TokenMultiset, TokenSet};
use crate::taxonomy::TaskEntry;

/// Multiset intersection cardinality of `vocabulary` against `row_tags`.
///
/// Each distinct vocabulary token adds `min(vocab count, row count)`;
/// tokens absent from the row add nothing.
pub fn score(vocabulary: &TokenMultiset, row_tags: &TokenMultiset) -> usize {
    vocabulary
        .iter()
        .map(|(token, wanted)| wanted.min(row_tags.count(token)))
        .sum()
}

/// Tokens characterising a task, used to score catalog rows.
///
/// Built as a set: a token present in both the task name and a step, or in
/// several steps, still counts once. Scoring therefore caps every token at 1
/// regardless of how often a row repeats it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: TokenSet,
    counts: TokenMultiset,
}

impl Vocabulary {
    pub fn from_tokens(tokens: TokenSet) -> Self {
        let counts = TokenMultiset::from_set(&tokens);
        Self { tokens, counts }
    }

    /// Union of the task name tokens and every step's tokens.
    pub fn for_task(task: &TaskEntry) -> Self {
        let mut tokens = task.name_tokens();
        for step in &task.steps {
            tokens.extend(normalize(step));
        }
        Self::from_tokens(tokens)
    }

    /// Vocabulary of a classification; empty for the no-match sentinel.
    pub fn for_classification(classification: &Classification<'_>) -> Self {
        match classification {
            Classification::Matched { task, .. } => Self::for_task(task),
            Classification::NoMatch => Self::default(),
        }
    }

    /// Score a row's tag multiset against this vocabulary.
    pub fn score(&self, row_tags: &TokenMultiset) -> usize {
        score(&self.counts, row_tags)
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
