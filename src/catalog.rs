//! Application catalog: rows of `application_name` + free-text `tags`.
//!
//! Catalogs are loaded once, before any request, from CSV (header row
//! required, extra columns ignored) or from a JSON array of objects. Rows
//! are read-only afterwards.

use crate::error::CatalogError;
use crate::normalize::{normalize_multiset, TokenMultiset};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const NAME_COLUMN: &str = "application_name";
const TAGS_COLUMN: &str = "tags";

/// A single application in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub application_name: String,

    /// Comma/space delimited tags; `None` when the source had no value
    #[serde(default)]
    pub tags: Option<String>,
}

impl CatalogRow {
    pub fn new(application_name: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            tags: Some(tags.into()),
        }
    }

    /// Normalized tag multiset; empty when the row has no tags.
    pub fn tag_tokens(&self) -> TokenMultiset {
        self.tags
            .as_deref()
            .map(normalize_multiset)
            .unwrap_or_default()
    }
}

/// A row as it appears in a JSON catalog, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    application_name: Option<String>,
    #[serde(default)]
    tags: Option<String>,
}

/// Ordered, immutable snapshot of catalog rows.
#[derive(Debug, Clone)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Local>,
}

impl Catalog {
    pub fn from_rows(rows: Vec<CatalogRow>) -> Self {
        Self {
            rows,
            source: None,
            loaded_at: Local::now(),
        }
    }

    /// Load a catalog, choosing the format from the file extension
    /// (`.json` for JSON, anything else is read as CSV).
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_path(path)?
        } else {
            Self::from_csv_path(path)?
        };

        debug!("Loaded {} applications from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let rows = parse_csv(file, path)?;
        Ok(Self::with_source(rows, path))
    }

    pub fn from_json_path(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let raw: Vec<RawRow> =
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let rows = raw
            .into_iter()
            .enumerate()
            .filter_map(|(idx, row)| validate_row(idx, row.application_name, row.tags))
            .collect();
        Ok(Self::with_source(rows, path))
    }

    fn with_source(rows: Vec<CatalogRow>, path: &Path) -> Self {
        Self {
            source: Some(path.to_path_buf()),
            ..Self::from_rows(rows)
        }
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// File the catalog was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Local> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read CSV rows, locating columns by header name.
fn parse_csv<R: Read>(reader: R, path: &Path) -> Result<Vec<CatalogRow>, CatalogError> {
    let parse_err = |e: csv::Error| CatalogError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(parse_err)?.clone();
    let name_idx = headers
        .iter()
        .position(|h| h == NAME_COLUMN)
        .ok_or_else(|| CatalogError::MissingNameColumn(path.to_path_buf()))?;
    let tags_idx = headers.iter().position(|h| h == TAGS_COLUMN);
    if tags_idx.is_none() {
        warn!("Catalog {:?} has no tags column, every row scores 0", path);
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(parse_err)?;
        let name = record.get(name_idx).map(str::to_string);
        let tags = tags_idx
            .and_then(|i| record.get(i))
            .map(str::to_string);
        if let Some(row) = validate_row(idx, name, tags) {
            rows.push(row);
        }
    }

    debug!("Parsed {} rows from {:?}", rows.len(), path);
    Ok(rows)
}

/// Drop rows without a name; treat blank tags as missing.
fn validate_row(idx: usize, name: Option<String>, tags: Option<String>) -> Option<CatalogRow> {
    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            warn!("Skipping row {}: missing application_name", idx + 1);
            return None;
        }
    };
    Some(CatalogRow {
        application_name: name,
        tags: tags.filter(|t| !t.trim().is_empty()),
    })
}
