use serde::{Deserialize, Serialize};

/// Link-preview metadata scraped from a page's `<head>`.
///
/// Every field is independent: `None` means the tag was absent, `Some("")`
/// means the tag was present with empty content.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub url: Option<String>,
    pub site_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub author: Option<String>,
}

/// The six fields of a [`Metadata`] record, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Url,
    SiteName,
    Title,
    Description,
    Keywords,
    Author,
}

impl MetadataField {
    pub const ALL: [MetadataField; 6] = [
        MetadataField::Url,
        MetadataField::SiteName,
        MetadataField::Title,
        MetadataField::Description,
        MetadataField::Keywords,
        MetadataField::Author,
    ];

    /// JSON key of the field.
    pub fn name(self) -> &'static str {
        match self {
            MetadataField::Url => "url",
            MetadataField::SiteName => "siteName",
            MetadataField::Title => "title",
            MetadataField::Description => "description",
            MetadataField::Keywords => "keywords",
            MetadataField::Author => "author",
        }
    }
}

impl Metadata {
    /// True when no field holds a value.
    pub fn is_empty(&self) -> bool {
        MetadataField::ALL.iter().all(|&f| self.get(f).is_none())
    }

    /// Render a field as text, or `None` when it is unset.
    /// Keywords render comma-joined: `["a", "b"]` becomes `"a,b"`.
    pub fn get(&self, field: MetadataField) -> Option<String> {
        match field {
            MetadataField::Url => self.url.clone(),
            MetadataField::SiteName => self.site_name.clone(),
            MetadataField::Title => self.title.clone(),
            MetadataField::Description => self.description.clone(),
            MetadataField::Keywords => self.keywords.as_ref().map(|k| k.join(",")),
            MetadataField::Author => self.author.clone(),
        }
    }

    /// Store a raw captured value. Keywords are split on commas.
    pub fn set(&mut self, field: MetadataField, raw: &str) {
        let value = Some(raw.to_string());
        match field {
            MetadataField::Url => self.url = value,
            MetadataField::SiteName => self.site_name = value,
            MetadataField::Title => self.title = value,
            MetadataField::Description => self.description = value,
            MetadataField::Keywords => self.keywords = Some(split_keywords(raw)),
            MetadataField::Author => self.author = value,
        }
    }

    /// Rendered text of every set field, in field order.
    pub fn texts(&self) -> impl Iterator<Item = String> + '_ {
        MetadataField::ALL.iter().filter_map(|&f| self.get(f))
    }
}

/// Split keyword content on commas, keeping each piece verbatim.
/// Empty content yields no keywords rather than one empty keyword.
pub fn split_keywords(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}
