//! Link-preview metadata for HTML pages.
//!
//! [`extract`] scrapes url, site name, title, description, keywords and
//! author from a document's head tags with a table of case-insensitive
//! patterns; it is a best-effort scraper, not an HTML parser. [`filter`]
//! selects the records whose fields mention any word of a free-text query.
//! Both are pure functions that never fail: missing data is `None`, and no
//! match is an empty result.

pub mod extraction;
pub mod filter;
pub mod json;
pub mod query;
pub mod types;

pub use extraction::{extract, MetadataExtractor, TagPattern, TagSource};
pub use filter::{filter, filter_with};
pub use query::SearchQuery;
pub use types::{Metadata, MetadataField};
