//! Prompt -> task -> ranked applications.

use crate::catalog::Catalog;
use crate::classifier::{classify, Classification};
use crate::normalize::{normalize, TokenSet};
use crate::ranker::{rank, RankedApp, DEFAULT_TOP_N};
use crate::scorer::Vocabulary;
use crate::taxonomy::Taxonomy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Request accepted on the binary's stdin.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    /// Caller-side identifier, only logged
    #[serde(default)]
    pub id: i64,

    /// Free-text description of what the user wants to do
    pub prompt: String,

    /// Overrides the configured number of applications
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// Result of identifying a task for a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Always "success" for a computed result
    pub status: String,

    /// Chosen task name, or "No specific task matched"
    pub task: String,

    pub steps: Vec<String>,

    /// Application names, best first
    pub top_apps: Vec<String>,
}

/// Intermediate values of one match, for diagnostics.
#[derive(Debug, Clone)]
pub struct Explanation<'a> {
    pub prompt_tokens: TokenSet,
    pub classification: Classification<'a>,
    pub vocabulary: Vocabulary,
    pub ranked: Vec<RankedApp>,
}

impl Explanation<'_> {
    pub fn into_result(self) -> MatchResult {
        MatchResult {
            status: "success".to_string(),
            task: self.classification.task_name().to_string(),
            steps: self.classification.steps().to_vec(),
            top_apps: self.ranked.into_iter().map(|app| app.name).collect(),
        }
    }
}

/// Matches prompts against a shared taxonomy and catalog.
///
/// Both are read-only; every call keeps its scores to itself, so one
/// matcher can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct TaskMatcher {
    taxonomy: Arc<Taxonomy>,
    catalog: Arc<Catalog>,
}

impl TaskMatcher {
    pub fn new(taxonomy: Arc<Taxonomy>, catalog: Arc<Catalog>) -> Self {
        Self { taxonomy, catalog }
    }

    /// Matcher over the built-in taxonomy.
    pub fn with_builtin_taxonomy(catalog: Arc<Catalog>) -> Self {
        Self::new(Arc::new(Taxonomy::builtin().clone()), catalog)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Classify `prompt` and rank the catalog for the chosen task.
    pub fn identify_task(&self, prompt: &str, top_n: usize) -> MatchResult {
        self.explain(prompt, top_n).into_result()
    }

    /// [`identify_task`](Self::identify_task) with the default of two apps.
    pub fn identify(&self, prompt: &str) -> MatchResult {
        self.identify_task(prompt, DEFAULT_TOP_N)
    }

    /// Run the pipeline and keep every intermediate value.
    pub fn explain(&self, prompt: &str, top_n: usize) -> Explanation<'_> {
        let prompt_tokens = normalize(prompt);
        debug!("Prompt tokens: {:?}", prompt_tokens);

        let classification = classify(&self.taxonomy, &prompt_tokens);
        let vocabulary = Vocabulary::for_classification(&classification);
        debug!(
            "Task {:?} (overlap {}), vocabulary {:?}",
            classification.task_name(),
            classification.overlap(),
            vocabulary.tokens()
        );

        let ranked = rank(self.catalog.rows(), &vocabulary, top_n);

        Explanation {
            prompt_tokens,
            classification,
            vocabulary,
            ranked,
        }
    }
}
