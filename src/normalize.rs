//! Text normalization shared by classification and ranking.
//!
//! Text is lowercased, split into alphanumeric runs (punctuation separates
//! words and is never a token itself) and filtered against the English
//! stop-word list. No stemming or lemmatization is applied.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Unique tokens of a text span; presence only.
pub type TokenSet = BTreeSet<String>;

lazy_static! {
    static ref RE_WORD: Regex = Regex::new(r"[\p{L}\p{N}]+").unwrap();

    /// Standard English stop words. Contractions are listed in their
    /// apostrophe-free split form since the tokenizer never yields `'`.
    static ref STOP_WORDS: HashSet<&'static str> = {
        let words = [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
            "you", "your", "yours", "yourself", "yourselves",
            "he", "him", "his", "himself", "she", "her", "hers", "herself",
            "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
            "what", "which", "who", "whom", "this", "that", "these", "those",
            "am", "is", "are", "was", "were", "be", "been", "being",
            "have", "has", "had", "having", "do", "does", "did", "doing",
            "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while",
            "of", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "to", "from",
            "up", "down", "in", "out", "on", "off", "over", "under",
            "again", "further", "then", "once", "here", "there", "when", "where",
            "why", "how", "all", "any", "both", "each", "few", "more", "most",
            "other", "some", "such", "no", "nor", "not", "only", "own", "same",
            "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
            "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
            "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn",
            "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn", "weren",
            "won", "wouldn",
        ];
        words.into_iter().collect()
    };
}

/// Returns true if `word` (already lowercase) is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Ordered tokens of `text`, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    RE_WORD
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Distinct tokens of `text`, for presence-only comparisons.
pub fn normalize(text: &str) -> TokenSet {
    tokenize(text).into_iter().collect()
}

/// Token counts of `text`, for count-aware comparisons.
pub fn normalize_multiset(text: &str) -> TokenMultiset {
    tokenize(text).into_iter().collect()
}

/// A count-preserving collection of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMultiset {
    counts: BTreeMap<String, usize>,
}

impl TokenMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every token of `set` with count 1.
    pub fn from_set(set: &TokenSet) -> Self {
        set.iter().cloned().collect()
    }

    pub fn insert(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Occurrences of `token`; 0 when absent.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of occurrences across all tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct tokens with their counts, in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &n)| (token.as_str(), n))
    }
}

impl FromIterator<String> for TokenMultiset {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut multiset = TokenMultiset::new();
        for token in iter {
            multiset.insert(token);
        }
        multiset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_stop_words() {
        let tokens = normalize("I need to Integrate an API and parse JSON");
        let expected: TokenSet = ["need", "integrate", "api", "parse", "json"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_punctuation_separates_words() {
        assert_eq!(
            tokenize("pull-to-refresh, UI/UX; http.client!"),
            vec!["pull", "refresh", "ui", "ux", "http", "client"]
        );
    }

    #[test]
    fn test_contractions_split_into_stop_words() {
        assert!(normalize("don't won't isn't").is_empty());
    }

    #[test]
    fn test_empty_and_punctuation_only_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("  ?!, -- ...").is_empty());
        assert!(normalize_multiset("").is_empty());
        assert!(normalize_multiset(",,,;").is_empty());
    }

    #[test]
    fn test_multiset_keeps_counts() {
        let tags = normalize_multiset("cache, Cache redis http");
        assert_eq!(tags.count("cache"), 2);
        assert_eq!(tags.count("redis"), 1);
        assert_eq!(tags.count("missing"), 0);
        assert_eq!(tags.distinct(), 3);
        assert_eq!(tags.total(), 4);
    }

    #[test]
    fn test_set_discards_duplicates() {
        let tokens = normalize("json json JSON");
        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains("json"));
    }

    #[test]
    fn test_from_set_counts_each_token_once() {
        let set = normalize("cache data cache");
        let multiset = TokenMultiset::from_set(&set);
        assert_eq!(multiset.count("cache"), 1);
        assert_eq!(multiset.total(), 2);
    }

    #[test]
    fn test_digits_are_tokens() {
        assert_eq!(tokenize("OAuth2 error 404"), vec!["oauth2", "error", "404"]);
    }
}
