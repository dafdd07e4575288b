use std::sync::LazyLock;

use regex::Regex;

use crate::types::Metadata;

static DISALLOWED_QUERY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z ,]").unwrap());

static TERM_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ ,]+").unwrap());

static FIELD_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_\s]").unwrap());

/// Hyphens become commas, then everything but ASCII letters, spaces and
/// commas is dropped.
pub fn normalize_query(raw: &str) -> String {
    let hyphens_split = raw.replace('-', ",");
    DISALLOWED_QUERY_CHARS
        .replace_all(&hyphens_split, "")
        .into_owned()
}

/// Split a normalized query on runs of spaces and commas.
///
/// Interior runs never produce empty terms, but a run at either edge leaves
/// an empty term there, and an empty input is a single empty term.
pub fn split_terms(normalized: &str) -> Vec<String> {
    TERM_DELIMITERS
        .split(normalized)
        .map(str::to_string)
        .collect()
}

/// Drop every character that is neither a word character nor whitespace.
pub fn strip_punctuation(text: &str) -> String {
    FIELD_PUNCTUATION.replace_all(text, "").into_owned()
}

/// A parsed free-text query. A record matches when any term occurs,
/// case-insensitively, anywhere in any of its fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let terms = split_terms(&normalize_query(raw))
            .into_iter()
            .map(|t| t.to_ascii_lowercase())
            .collect();
        Self { terms }
    }

    /// Lowercased search terms, in query order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Test one field's rendered text. Punctuation is stripped from the
    /// text first; the terms hold ASCII letters only and are used as-is.
    pub fn matches_text(&self, text: &str) -> bool {
        let haystack = strip_punctuation(text).to_ascii_lowercase();
        self.terms.iter().any(|term| haystack.contains(term.as_str()))
    }

    pub fn matches(&self, metadata: &Metadata) -> bool {
        metadata.texts().any(|text| self.matches_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_term_matches_any_text() {
        let query = SearchQuery::parse("");
        assert_eq!(query.terms(), [""]);
        assert!(query.matches_text(""));
        assert!(query.matches_text("anything"));
    }

    #[test]
    fn terms_are_lowercased() {
        let query = SearchQuery::parse("Rust LANG");
        assert_eq!(query.terms(), ["rust", "lang"]);
    }
}
