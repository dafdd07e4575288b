use crate::query::SearchQuery;
use crate::types::Metadata;

/// Keep the records matching any term of `query`, in input order.
///
/// Multi-word queries are an OR over their words: `"weather news"` keeps a
/// record titled "Breaking News". An empty query keeps every record with at
/// least one field set.
pub fn filter<'a>(metadata: &'a [Metadata], query: &str) -> Vec<&'a Metadata> {
    filter_with(metadata, &SearchQuery::parse(query))
}

/// Same as [`filter`] with an already parsed query.
pub fn filter_with<'a>(metadata: &'a [Metadata], query: &SearchQuery) -> Vec<&'a Metadata> {
    let results: Vec<&Metadata> = metadata.iter().filter(|m| query.matches(m)).collect();
    tracing::debug!(
        "filter kept {} of {} records for {} terms",
        results.len(),
        metadata.len(),
        query.terms().len()
    );
    results
}
