use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Metadata, MetadataField};

/// A captured value runs to the last closing delimiter on its line.
const LINE_VALUE: &str = r"([^\r\n\x{2028}\x{2029}]*)";

/// Where in the document a field's value lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagSource<'a> {
    /// `<meta property="..." content="VALUE"`
    MetaProperty(&'a str),
    /// `<meta name="..." content="VALUE"`
    MetaName(&'a str),
    /// `<tag>VALUE</tag>`
    Element(&'a str),
}

impl TagSource<'_> {
    fn pattern(&self) -> String {
        match self {
            TagSource::MetaProperty(property) => meta_pattern("property", property),
            TagSource::MetaName(name) => meta_pattern("name", name),
            TagSource::Element(tag) => {
                let tag = regex::escape(tag);
                format!(r"(?i)<{tag}>{LINE_VALUE}</{tag}>")
            }
        }
    }
}

fn meta_pattern(attribute: &str, value: &str) -> String {
    format!(
        r#"(?i)<meta\s+{attribute}="{}"\s+content="{LINE_VALUE}""#,
        regex::escape(value)
    )
}

/// Built-in tag table. Order matters: a later hit for the same field
/// overwrites an earlier one, so `name="description"` wins over
/// `og:description`.
pub const BUILTIN_TAGS: &[(MetadataField, TagSource<'static>)] = &[
    (MetadataField::Url, TagSource::MetaProperty("og:url")),
    (MetadataField::SiteName, TagSource::MetaProperty("og:site_name")),
    (MetadataField::Title, TagSource::Element("title")),
    (MetadataField::Description, TagSource::MetaProperty("og:description")),
    (MetadataField::Description, TagSource::MetaName("description")),
    (MetadataField::Keywords, TagSource::MetaName("keywords")),
    (MetadataField::Author, TagSource::MetaName("author")),
];

static DEFAULT_EXTRACTOR: LazyLock<MetadataExtractor> = LazyLock::new(MetadataExtractor::default);

/// A case-insensitive, first-match search for one field's value.
#[derive(Clone, Debug)]
pub struct TagPattern {
    field: MetadataField,
    regex: Regex,
}

impl TagPattern {
    pub fn new(field: MetadataField, source: TagSource<'_>) -> Result<Self, regex::Error> {
        let regex = Regex::new(&source.pattern())?;
        Ok(Self { field, regex })
    }

    pub fn field(&self) -> MetadataField {
        self.field
    }

    /// Value captured by the first match in `html`, if any.
    pub fn capture<'h>(&self, html: &'h str) -> Option<&'h str> {
        self.regex
            .captures(html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

/// Applies an ordered table of [`TagPattern`]s to a document.
#[derive(Clone, Debug)]
pub struct MetadataExtractor {
    patterns: Vec<TagPattern>,
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        let patterns = BUILTIN_TAGS
            .iter()
            .map(|&(field, source)| TagPattern::new(field, source).unwrap())
            .collect();
        Self::new(patterns)
    }
}

impl MetadataExtractor {
    pub fn new(patterns: Vec<TagPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[TagPattern] {
        &self.patterns
    }

    /// Scrape every field the table knows about. Fields whose tag is
    /// missing stay `None`.
    pub fn extract(&self, html: &str) -> Metadata {
        let mut metadata = Metadata::default();
        if html.is_empty() {
            return metadata;
        }

        let mut found = 0usize;
        for pattern in &self.patterns {
            if let Some(value) = pattern.capture(html) {
                metadata.set(pattern.field, value);
                found += 1;
            }
        }

        tracing::debug!(
            "extracted {} tag values from {} bytes of html",
            found,
            html.len()
        );
        metadata
    }
}

/// Extract url, site name, title, description, keywords and author from an
/// HTML document using the built-in tag table.
pub fn extract(html: &str) -> Metadata {
    DEFAULT_EXTRACTOR.extract(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_property_pattern_escapes_value() {
        let pattern = TagSource::MetaProperty("og:url").pattern();
        assert!(pattern.starts_with("(?i)<meta"));
        assert!(pattern.contains(r#"property="og:url""#));

        let dotted = TagSource::MetaName("a.b").pattern();
        assert!(dotted.contains(r#"name="a\.b""#));
    }

    #[test]
    fn element_pattern_wraps_both_tags() {
        let pattern = TagSource::Element("title").pattern();
        assert!(pattern.starts_with("(?i)<title>"));
        assert!(pattern.ends_with("</title>"));
    }

    #[test]
    fn builtin_table_compiles() {
        let extractor = MetadataExtractor::default();
        assert_eq!(extractor.patterns().len(), BUILTIN_TAGS.len());
    }
}
