//! Schema link extraction from the Showcase download page.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FetchError, Result};

/// Substring identifying a link to a schema description page.
pub const SCHEMA_LINK_MARKER: &str = "schema.cgi?id=";

static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").expect("Invalid anchor regex"));

static HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
        .expect("Invalid href regex")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digit regex"));

/// A schema linked from the download page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaLink {
    pub schema_id: u32,
    /// File-name-safe form of the link text.
    pub description: String,
    pub href: String,
}

/// Every schema link on the page, in document order.
///
/// # Errors
///
/// Returns [`FetchError::MissingSchemaId`] when a schema link carries no
/// number.
pub fn parse_schema_links(html: &str) -> Result<Vec<SchemaLink>> {
    let mut links = Vec::new();
    for anchor in ANCHOR.captures_iter(html) {
        let Some(href) = href(&anchor[1]) else {
            continue;
        };
        if !href.contains(SCHEMA_LINK_MARKER) {
            continue;
        }
        let schema_id = DIGITS
            .find(&href)
            .and_then(|digits| digits.as_str().parse::<u32>().ok())
            .ok_or_else(|| FetchError::MissingSchemaId { href: href.clone() })?;
        links.push(SchemaLink {
            schema_id,
            description: describe(&visible_text(&anchor[2])),
            href,
        });
    }
    Ok(links)
}

/// Lowercase `text` and join its whitespace-separated words with `_`.
pub fn describe(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn href(attributes: &str) -> Option<String> {
    let captures = HREF.captures(attributes)?;
    let raw = captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))?;
    Some(decode_entities(raw.as_str()))
}

fn visible_text(inner_html: &str) -> String {
    decode_entities(&TAG.replace_all(inner_html, ""))
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_link_text() {
        assert_eq!(describe("Data field properties"), "data_field_properties");
        assert_eq!(
            describe("  Values for simple real (floating-point)\n encodings "),
            "values_for_simple_real_(floating-point)_encodings"
        );
        assert_eq!(describe(""), "");
    }

    #[test]
    fn extracts_schema_links_only() {
        let html = r#"
            <a href="index.cgi">Home</a>
            <a class="basic" href="schema.cgi?id=1">Data field properties</a>
            <A HREF='schema.cgi?id=2'>Encoding <b>dictionaries</b></A>
            <a name="anchor">No link</a>
        "#;

        let links = parse_schema_links(html).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].schema_id, 1);
        assert_eq!(links[0].description, "data_field_properties");
        assert_eq!(links[1].schema_id, 2);
        assert_eq!(links[1].description, "encoding_dictionaries");
    }

    #[test]
    fn first_digit_run_is_the_id() {
        let html = r#"<a href="/v2/schema.cgi?id=5">Categories</a>"#;
        let links = parse_schema_links(html).unwrap();
        assert_eq!(links[0].schema_id, 2);
    }

    #[test]
    fn decodes_entities() {
        let html = r#"<a href="schema.cgi?id=7&amp;x=1">Fields &amp; records</a>"#;
        let links = parse_schema_links(html).unwrap();
        assert_eq!(links[0].href, "schema.cgi?id=7&x=1");
        assert_eq!(links[0].description, "fields_&_records");
    }

    #[test]
    fn schema_link_without_id_fails() {
        let html = r#"<a href="schema.cgi?id=">Broken</a>"#;
        let err = parse_schema_links(html).unwrap_err();
        assert!(matches!(err, FetchError::MissingSchemaId { .. }));
    }
}
