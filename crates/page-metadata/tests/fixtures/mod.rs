#![allow(dead_code)]

use page_metadata::Metadata;

/// A realistic article head with every recognised tag, one per line.
pub const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Rust 1.80 released</title>
<meta property="og:url" content="https://blog.example.org/rust-1-80">
<meta property="og:site_name" content="Example Blog">
<meta property="og:description" content="Open Graph summary">
<meta name="description" content="LazyLock lands in the standard library.">
<meta name="keywords" content="rust,release,lazylock">
<meta name="author" content="Ferris Crab">
</head>
<body><h1>Rust 1.80</h1></body>
</html>"#;

/// Build a record with only a title.
pub fn titled(title: &str) -> Metadata {
    Metadata {
        title: Some(title.to_string()),
        ..Metadata::default()
    }
}

/// Build a record with only an author.
pub fn authored(author: &str) -> Metadata {
    Metadata {
        author: Some(author.to_string()),
        ..Metadata::default()
    }
}

/// Build a record with only keywords.
pub fn keyworded(keywords: &[&str]) -> Metadata {
    Metadata {
        keywords: Some(keywords.iter().map(|k| k.to_string()).collect()),
        ..Metadata::default()
    }
}

/// A small library of saved pages.
pub fn library() -> Vec<Metadata> {
    vec![
        Metadata {
            url: Some("https://news.example.com/storm".to_string()),
            site_name: Some("Example News".to_string()),
            title: Some("Breaking News".to_string()),
            description: Some("A storm is coming.".to_string()),
            keywords: Some(vec!["weather".to_string(), "storm".to_string()]),
            author: None,
        },
        authored("J. R. R. Tolkien"),
        titled("Cooking with cast iron"),
        keyworded(&["gardening", "tomatoes"]),
        Metadata::default(),
    ]
}
