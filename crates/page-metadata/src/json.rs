//! Entry points for callers holding untyped JSON.
//!
//! Values of the wrong shape are not errors: a non-string document yields an
//! empty record and a non-array collection or non-string query yields no
//! results.

use serde::Deserialize;
use serde_json::Value;

use crate::extraction::extract;
use crate::query::SearchQuery;
use crate::types::Metadata;

/// Extract from `html` when it is a string, otherwise return the all-null record.
pub fn extract_value(html: &Value) -> Metadata {
    match html {
        Value::String(s) => extract(s),
        _ => Metadata::default(),
    }
}

/// Filter a JSON array of records by a JSON string query.
///
/// Elements that cannot be read as a [`Metadata`] record never match.
/// Matches are returned by reference, in array order.
pub fn filter_value<'a>(metadata: &'a Value, query: &Value) -> Vec<&'a Value> {
    let (Value::Array(records), Value::String(query)) = (metadata, query) else {
        return Vec::new();
    };

    let query = SearchQuery::parse(query);
    records
        .iter()
        .filter(|value| match Metadata::deserialize(*value) {
            Ok(record) => query.matches(&record),
            Err(e) => {
                tracing::trace!("skipping element that is not a metadata record: {}", e);
                false
            }
        })
        .collect()
}
