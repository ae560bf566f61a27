//! The fixed task taxonomy: task name -> ordered step descriptions.
//!
//! Declaration order matters, the classifier breaks ties in favour of the
//! task declared first.

use crate::error::TaxonomyError;
use crate::normalize::{normalize, TokenSet};
use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One task category and the steps that characterise it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskEntry {
    /// Unique task name, e.g. "API Integration"
    pub name: String,

    /// Step descriptions in declaration order
    #[serde(default)]
    pub steps: Vec<String>,
}

impl TaskEntry {
    pub fn new(name: impl Into<String>, steps: &[&str]) -> Self {
        Self {
            name: name.into(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Tokens of the task name: whitespace-split, each piece normalized.
    pub fn name_tokens(&self) -> TokenSet {
        self.name.split_whitespace().flat_map(normalize).collect()
    }
}

/// Immutable, ordered collection of [`TaskEntry`] with unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    entries: Vec<TaskEntry>,
    /// `entries[i].name_tokens()`, computed once
    name_tokens: Vec<TokenSet>,
}

lazy_static! {
    static ref BUILTIN: Taxonomy = Taxonomy::build(vec![
            TaskEntry::new("UI/UX Design", &["Implement responsive design"]),
            TaskEntry::new(
                "API Integration",
                &[
                    "Implement HTTP client",
                    "Parse JSON data",
                    "Handle errors and exceptions",
                    "Cache data",
                    "Implement pull-to-refresh",
                ],
            ),
            TaskEntry::new(
                "Testing",
                &["Write unit tests", "Implement widget tests", "Fix issues"],
            ),
            TaskEntry::new(
                "Debugging",
                &["Review logs", "Use breakpoints", "Apply fixes"],
            ),
            TaskEntry::new(
                "Performance Optimization",
                &[
                    "Minimize layout rebuilds",
                    "Use lazy loading",
                    "Optimize database queries",
                ],
            ),
            TaskEntry::new(
                "Maintaining Codebase",
                &[
                    "Refactor code for readability",
                    "Update dependencies",
                    "Resolve merge conflicts",
                ],
            ),
            TaskEntry::new(
                "Adapting to Platform-Specific Features",
                &["Implement platform channels"],
            ),
        ]);
}

impl Taxonomy {
    /// Build a taxonomy, rejecting empty or duplicate task names.
    pub fn new(entries: Vec<TaskEntry>) -> Result<Self, TaxonomyError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(TaxonomyError::EmptyName);
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(TaxonomyError::DuplicateTask(entry.name.clone()));
            }
        }
        Ok(Self::build(entries))
    }

    fn build(entries: Vec<TaskEntry>) -> Self {
        let name_tokens = entries.iter().map(TaskEntry::name_tokens).collect();
        Self {
            entries,
            name_tokens,
        }
    }

    /// The seven built-in development tasks.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }

    /// Parse a JSON array of `{"name": ..., "steps": [...]}` objects.
    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let entries: Vec<TaskEntry> =
            serde_json::from_str(json).map_err(|e| TaxonomyError::Parse(e.to_string()))?;
        Self::new(entries)
    }

    pub fn from_json_path(path: &Path) -> Result<Self, TaxonomyError> {
        let content = fs::read_to_string(path).map_err(|e| TaxonomyError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let taxonomy = Self::from_json(&content)?;
        debug!("Loaded {} tasks from {:?}", taxonomy.len(), path);
        Ok(taxonomy)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskEntry> {
        self.entries.iter()
    }

    /// Entries paired with their precomputed name tokens.
    pub fn iter_with_name_tokens(&self) -> impl Iterator<Item = (&TaskEntry, &TokenSet)> {
        self.entries.iter().zip(&self.name_tokens)
    }

    pub fn get(&self, name: &str) -> Option<&TaskEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_declaration_order() {
        let names: Vec<&str> = Taxonomy::builtin().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "UI/UX Design",
                "API Integration",
                "Testing",
                "Debugging",
                "Performance Optimization",
                "Maintaining Codebase",
                "Adapting to Platform-Specific Features",
            ]
        );
    }

    #[test]
    fn test_builtin_api_integration_steps() {
        let entry = Taxonomy::builtin().get("API Integration").unwrap();
        assert_eq!(entry.steps.len(), 5);
        assert_eq!(entry.steps[0], "Implement HTTP client");
        assert_eq!(entry.steps[4], "Implement pull-to-refresh");
    }

    #[test]
    fn test_name_tokens_use_shared_normalizer() {
        let entry = TaskEntry::new("Adapting to Platform-Specific Features", &[]);
        let name_tokens = entry.name_tokens();
        let tokens: Vec<&str> = name_tokens.iter().map(|s| s.as_str()).collect();
        assert_eq!(tokens, vec!["adapting", "features", "platform", "specific"]);

        let ui = TaskEntry::new("UI/UX Design", &[]);
        assert!(ui.name_tokens().contains("ux"));
    }

    #[test]
    fn test_name_tokens_precomputed_per_entry() {
        let taxonomy = Taxonomy::new(vec![
            TaskEntry::new("UI/UX Design", &[]),
            TaskEntry::new("Adapting to Platform-Specific Features", &[]),
        ])
        .unwrap();
        let pairs: Vec<_> = taxonomy.iter_with_name_tokens().collect();
        assert_eq!(pairs.len(), 2);
        for (entry, tokens) in pairs {
            assert_eq!(tokens, &entry.name_tokens());
        }

        for (entry, tokens) in Taxonomy::builtin().iter_with_name_tokens() {
            assert_eq!(tokens, &entry.name_tokens());
        }
    }

    #[test]
    fn test_duplicate_task_rejected() {
        let result = Taxonomy::new(vec![
            TaskEntry::new("Testing", &["Write unit tests"]),
            TaskEntry::new("Testing", &["Fix issues"]),
        ]);
        assert!(matches!(result, Err(TaxonomyError::DuplicateTask(name)) if name == "Testing"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Taxonomy::new(vec![TaskEntry::new("  ", &[])]);
        assert!(matches!(result, Err(TaxonomyError::EmptyName)));
    }

    #[test]
    fn test_from_json_preserves_order() {
        let taxonomy = Taxonomy::from_json(
            r#"[
                {"name": "Zeta Task", "steps": ["Do zeta"]},
                {"name": "Alpha Task"}
            ]"#,
        )
        .unwrap();
        let names: Vec<&str> = taxonomy.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta Task", "Alpha Task"]);
        assert!(taxonomy.get("Alpha Task").unwrap().steps.is_empty());
    }

    #[test]
    fn test_from_json_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Deploy", "steps": ["Ship it"]}}]"#).unwrap();
        let taxonomy = Taxonomy::from_json_path(file.path()).unwrap();
        assert_eq!(taxonomy.len(), 1);
    }

    #[test]
    fn test_from_json_path_missing_file() {
        let result = Taxonomy::from_json_path(Path::new("/nonexistent/taxonomy.json"));
        assert!(matches!(result, Err(TaxonomyError::Read { .. })));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Taxonomy::from_json("{not json"),
            Err(TaxonomyError::Parse(_))
        ));
    }
}
