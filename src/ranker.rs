//! Top-N application ranking by tag overlap.

use crate::catalog::CatalogRow;
use crate::scorer::Vocabulary;
use rayon::prelude::*;
use serde::Serialize;

/// Default number of applications returned per request.
pub const DEFAULT_TOP_N: usize = 2;

/// A ranked catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedApp {
    pub name: String,
    pub score: usize,
    /// Position of the row in the catalog
    pub row_index: usize,
}

/// Score every row against `vocabulary` and keep the best `top_n`.
///
/// Scores are held in a vector local to this call, aligned with `rows`.
/// The sort is stable, so rows with equal scores keep catalog order. An
/// empty vocabulary yields no applications at all rather than the first
/// `top_n` rows with score 0.
pub fn rank(rows: &[CatalogRow], vocabulary: &Vocabulary, top_n: usize) -> Vec<RankedApp> {
    if vocabulary.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let scores: Vec<usize> = rows
        .par_iter()
        .map(|row| vocabulary.score(&row.tag_tokens()))
        .collect();

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    order.truncate(top_n);

    order
        .into_iter()
        .map(|idx| RankedApp {
            name: rows[idx].application_name.clone(),
            score: scores[idx],
            row_index: idx,
        })
        .collect()
}
