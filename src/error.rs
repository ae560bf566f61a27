//! Error types for catalog/taxonomy acquisition and the request boundary.
//!
//! The matching core itself never fails: empty prompts, empty catalogs and
//! rows without tags all produce well-defined (possibly empty) results.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while materializing the application catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog not found at {0}")]
    NotFound(PathBuf),

    #[error("Failed to read catalog from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse catalog {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Catalog {0} has no application_name column")]
    MissingNameColumn(PathBuf),
}

/// Failures while building or loading the task taxonomy.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse taxonomy: {0}")]
    Parse(String),

    #[error("Duplicate task in taxonomy: {0}")]
    DuplicateTask(String),

    #[error("Taxonomy contains a task with an empty name")]
    EmptyName,
}

/// Top-level error for the `task-matcher` binary.
#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Failed to read stdin: {0}")]
    StdinRead(#[from] io::Error),

    #[error("Failed to parse request JSON: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("Home directory not found")]
    NoHomeDir,

    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Taxonomy unavailable: {0}")]
    Taxonomy(#[from] TaxonomyError),
}
