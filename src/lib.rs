//! Task Matcher - lexical task identification and application recommendation
//!
//! A free-text request is matched to one task of a fixed taxonomy by
//! keyword-set overlap with the task names. The chosen task's vocabulary
//! (name + steps) is then scored against each catalog application's tags and
//! the best applications are returned.
//!
//! # Pipeline
//! - [`normalize`]: lowercase, alphanumeric words, English stop words removed
//! - [`classifier`]: best task by name overlap, earliest task wins ties
//! - [`scorer`]: capped multiset overlap between vocabulary and row tags
//! - [`ranker`]: top-N rows by score, catalog order among equals
//! - [`pipeline`]: [`TaskMatcher::identify_task`] wires it together
//!
//! # Performance
//! - O(rows * vocabulary) per request, rows scored in parallel

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod ranker;
pub mod scorer;
pub mod taxonomy;

pub use catalog::{Catalog, CatalogRow};
pub use classifier::{classify, Classification, NO_MATCH_TASK};
pub use error::{CatalogError, MatcherError, TaxonomyError};
pub use normalize::{normalize, normalize_multiset, TokenMultiset, TokenSet};
pub use pipeline::{Explanation, MatchRequest, MatchResult, TaskMatcher};
pub use ranker::{rank, RankedApp, DEFAULT_TOP_N};
pub use scorer::{score, Vocabulary};
pub use taxonomy::{TaskEntry, Taxonomy};
