// src/page.rs
//! The rendered page an invocation extracts from: its location plus the HTML
//! as the browser rendered it (a "Save page as…" snapshot).
//!
//! Location precedence, first hit wins:
//! 1. an explicit URL given by the operator
//! 2. the browser's `<!-- saved from url=(NNNN)… -->` marker
//! 3. `<link rel="canonical">`
//! 4. `<meta property="og:url">`
//!
//! Nothing found leaves the location empty. The job's cursor is never used
//! here: the location is the dedup key and must describe the page itself.

use std::{fs, path::Path};

use scraper::{Html, Selector};

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub location: String,
    pub html: String,
}

impl PageContext {
    pub fn new(location: impl Into<String>, html: impl Into<String>) -> Self {
        Self { location: location.into(), html: html.into() }
    }

    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }

    /// Build a context from a snapshot, resolving its location.
    pub fn from_html(html: String, explicit: Option<&str>) -> Self {
        let location = resolve_location(&html, explicit);
        Self { location, html }
    }

    /// Read a saved page from disk.
    pub fn from_file(path: &Path, explicit: Option<&str>) -> Result<Self> {
        let html = fs::read_to_string(path).map_err(|source| Error::PageRead {
            path: path.to_path_buf(),
            source,
        })?;
        logd!("Page: Read {} ({} bytes)", path.display(), html.len());
        Ok(Self::from_html(html, explicit))
    }
}

pub fn resolve_location(html: &str, explicit: Option<&str>) -> String {
    let explicit = explicit.map(str::trim).filter(|s| !s.is_empty());
    if let Some(url) = explicit {
        return s!(url);
    }
    if let Some(url) = saved_from_marker(html) {
        return url;
    }
    if let Some(url) = linked_location(html) {
        return url;
    }
    logd!("Page: No location in snapshot");
    s!()
}

/// `<!-- saved from url=(0042)https://… -->`, written by Chromium and IE-era browsers.
fn saved_from_marker(html: &str) -> Option<String> {
    const MARK: &str = "saved from url=(";
    let mut end = html.len().min(4096);
    while !html.is_char_boundary(end) {
        end -= 1;
    }
    let head = &html[..end];
    let at = head.find(MARK)? + MARK.len();
    let rest = &head[at..];
    let close = rest.find(')')?;
    let len: usize = rest[..close].trim().parse().ok()?;
    let url_start = &rest[close + 1..];
    let url: String = url_start
        .chars()
        .take(len)
        .take_while(|c| !c.is_whitespace())
        .collect();
    let url = url.trim_end_matches("-->").trim();
    if url.is_empty() { None } else { Some(s!(url)) }
}

fn linked_location(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let candidates = [
        ("link[rel='canonical']", "href"),
        ("meta[property='og:url']", "content"),
    ];
    for (css, attr) in candidates {
        let Ok(sel) = Selector::parse(css) else { continue };
        let found = doc
            .select(&sel)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .find(|v| !v.is_empty());
        if let Some(v) = found {
            return Some(s!(v));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_wins() {
        let html = r#"<!-- saved from url=(0009)https://x --><html></html>"#;
        assert_eq!(resolve_location(html, Some(" https://e ")), "https://e");
    }

    #[test]
    fn saved_from_marker_is_read() {
        let html = "<!DOCTYPE html>\n<!-- saved from url=(0021)https://maps.test/p/1 -->\n<html></html>";
        assert_eq!(resolve_location(html, None), "https://maps.test/p/1");
    }

    #[test]
    fn canonical_then_og_url() {
        let both = r#"<html><head>
            <meta property="og:url" content="https://og">
            <link rel="canonical" href="https://canon">
        </head></html>"#;
        assert_eq!(resolve_location(both, None), "https://canon");

        let og = r#"<html><head><meta property="og:url" content="https://og"></head></html>"#;
        assert_eq!(resolve_location(og, None), "https://og");
    }

    #[test]
    fn unresolved_location_stays_empty() {
        let page = PageContext::from_html(s!("<html><h1>Acme</h1></html>"), Some("  "));
        assert_eq!(page.location, "");
        assert!(!page.has_location());
    }
}
