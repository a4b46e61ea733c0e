// src/extractors/links.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// --- CSS Selectors (Lazy Static) ---
static HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6").expect("Failed to compile HEADING_SELECTOR")
});

// Cells holding a distribution's logo and link
static ICON_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.icon").expect("Failed to compile ICON_CELL_SELECTOR"));

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Failed to compile LINK_SELECTOR"));

/// Collects the link targets of every icon cell in the first table after the
/// heading whose `id` is `anchor`.
///
/// A missing heading or table yields an empty list. Root-relative targets are
/// prefixed with `origin`; everything else is returned as written.
pub fn extract_links(document: &Html, anchor: &str, origin: &str) -> Vec<String> {
    let Some(heading) = find_heading(document, anchor) else {
        tracing::warn!("No heading with id '{}' found on the page", anchor);
        return Vec::new();
    };

    let Some(table) = next_table_after(heading) else {
        tracing::warn!("No table follows heading '{}'", anchor);
        return Vec::new();
    };

    let links: Vec<String> = table
        .select(&ICON_CELL_SELECTOR)
        .filter_map(|cell| cell.select(&LINK_SELECTOR).next())
        .filter_map(|link| link.value().attr("href"))
        .map(|href| resolve_href(href, origin))
        .collect();

    tracing::debug!("Heading '{}' yielded {} links", anchor, links.len());
    links
}

/// Rewrites a root-relative `href` ("/distros/x.html") against `origin`.
pub fn resolve_href(href: &str, origin: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}

fn find_heading<'a>(document: &'a Html, anchor: &str) -> Option<ElementRef<'a>> {
    document
        .select(&HEADING_SELECTOR)
        .find(|heading| heading.value().id() == Some(anchor))
}

/// First `<table>` after `heading` in document order, skipping the heading's own subtree.
fn next_table_after(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let mut cursor = Some(*heading);

    while let Some(node) = cursor {
        for sibling in node.next_siblings() {
            let table = sibling
                .descendants()
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "table");
            if table.is_some() {
                return table;
            }
        }
        cursor = node.parent();
    }

    None
}
