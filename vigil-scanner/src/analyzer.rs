use crate::result::PageSignals;
use scraper::node::Node;
use scraper::{Html, Selector};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use url::Url;

/// Extract page signals from body text.
///
/// The input is assumed to be HTML but anything is tolerated: malformed
/// markup or non-HTML bodies degrade to default signals (empty title, zero
/// counts) and never produce an error. No scripts are executed.
pub fn analyze_page(body: &str, base_url: &Url) -> PageSignals {
    let document = Html::parse_document(body);
    let (image_count, images_missing_alt) = count_images(&document);

    let signals = PageSignals {
        title: extract_title(&document),
        meta_description: extract_meta_description(&document),
        word_count: visible_text(&document).split_whitespace().count(),
        headings: count_headings(&document),
        image_count,
        images_missing_alt,
        links: extract_links(&document, base_url),
    };

    debug!(
        "Analyzed page: {} words, {} images, {} links",
        signals.word_count,
        signals.image_count,
        signals.links.len()
    );

    signals
}

fn extract_title(document: &Html) -> String {
    let selector = Selector::parse("title").unwrap();
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn extract_meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse("meta[name='description']").unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Collect text nodes, excluding anything under script, style or noscript.
fn visible_text(document: &Html) -> String {
    let mut out = String::new();

    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(el) => matches!(el.name(), "script" | "style" | "noscript"),
                _ => false,
            });

            if !hidden {
                out.push_str(&text.text);
                out.push(' ');
            }
        }
    }

    out
}

fn count_headings(document: &Html) -> BTreeMap<String, usize> {
    let mut headings = BTreeMap::new();

    for level in 1..=6 {
        let name = format!("h{}", level);
        let selector = Selector::parse(&name).unwrap();
        let count = document.select(&selector).count();
        if count > 0 {
            headings.insert(name, count);
        }
    }

    headings
}

/// Returns (total images, images missing a non-empty alt attribute).
fn count_images(document: &Html) -> (usize, usize) {
    let selector = Selector::parse("img").unwrap();

    let mut total = 0;
    let mut missing_alt = 0;

    for img in document.select(&selector) {
        total += 1;
        let has_alt = img
            .value()
            .attr("alt")
            .map(|alt| !alt.trim().is_empty())
            .unwrap_or(false);
        if !has_alt {
            missing_alt += 1;
        }
    }

    (total, missing_alt)
}

fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let selector = Selector::parse("a[href]").unwrap();

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href")
            && let Some(absolute) = resolve_link(base_url, href)
            && seen.insert(absolute.clone())
        {
            links.push(absolute);
        }
    }

    links
}

fn resolve_link(base: &Url, href: &str) -> Option<String> {
    // Skip empty, fragment-only, javascript:, mailto:, tel:, etc.
    if href.is_empty()
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with('#')
    {
        return None;
    }

    let mut resolved = base.join(href).ok()?;
    resolved.set_fragment(None);

    match resolved.scheme() {
        "http" | "https" => Some(resolved.to_string()),
        _ => None,
    }
}
