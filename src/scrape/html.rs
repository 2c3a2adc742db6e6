//! Selection helpers over `scraper`
//!
//! A missing element or attribute always reads as an empty string; callers
//! decide whether emptiness matters.

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::scrape::error::ScrapeError;

/// Parses an HTML body, rejecting bodies that carry no markup at all
pub fn parse_document(html: &str) -> Result<Html, ScrapeError> {
    if html.trim().is_empty() {
        return Err(ScrapeError::MalformedDocument(
            "response body is empty".to_string(),
        ));
    }
    Ok(Html::parse_document(html))
}

/// Concatenated text of every element under `element` matching `selector`, trimmed
pub fn select_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|e| e.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Attribute of the first element under `element` matching `selector`, trimmed
pub fn select_attr(element: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    element
        .select(selector)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Attribute of `element` itself, trimmed
pub fn attr(element: ElementRef<'_>, attr: &str) -> String {
    element
        .value()
        .attr(attr)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Resolves `href` against `base`, leaving it untouched when either cannot be parsed
pub fn resolve_url(base: &str, href: &str) -> String {
    if href.is_empty() {
        return String::new();
    }
    Url::parse(base)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}
