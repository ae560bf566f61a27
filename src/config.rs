//! Command-line configuration and default file locations.

use crate::error::MatcherError;
use crate::ranker::DEFAULT_TOP_N;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Default catalog file name
pub const CATALOG_FILE: &str = "application_data.csv";

/// Directory under ~/.cache/ holding the fallback catalog
pub const CACHE_DIR: &str = "task-matcher";

/// Match a request to a task and recommend applications for it.
///
/// Reads `{"id": .., "prompt": ".."}` from stdin (unless --prompt is given)
/// and writes the match result as JSON to stdout.
#[derive(Debug, Parser)]
#[command(name = "task-matcher", version, about)]
pub struct Cli {
    /// Catalog file (.csv or .json) with application_name and tags columns
    #[arg(long, env = "TASK_MATCHER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// JSON taxonomy file replacing the built-in task table
    #[arg(long, env = "TASK_MATCHER_TAXONOMY")]
    pub taxonomy: Option<PathBuf>,

    /// Number of applications to return
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Prompt text; skips reading a request from stdin
    #[arg(long)]
    pub prompt: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Catalog location: explicit flag/env, then the working directory, then
    /// the user cache directory.
    pub fn catalog_path(&self) -> Result<PathBuf, MatcherError> {
        if let Some(path) = &self.catalog {
            return Ok(path.clone());
        }
        let local = Path::new(CATALOG_FILE);
        if local.exists() {
            return Ok(local.to_path_buf());
        }
        default_catalog_path()
    }
}

/// `~/.cache/task-matcher/application_data.csv`
pub fn default_catalog_path() -> Result<PathBuf, MatcherError> {
    let home = dirs::home_dir().ok_or(MatcherError::NoHomeDir)?;
    Ok(home.join(".cache").join(CACHE_DIR).join(CATALOG_FILE))
}
