// src/extractors/category.rs
use crate::extractors::links::extract_links;
use scraper::Html;

/// A section of the distribution list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ForPc,
    Small,
    Historical,
}

impl Category {
    /// `id` of the heading that introduces this category's table.
    pub fn anchor(self) -> &'static str {
        match self {
            Category::ForPc => "for-pc",
            Category::Small => "small-distros",
            Category::Historical => "historical",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Category::ForPc => "Free GNU/Linux distributions for PCs:",
            Category::Small => "Free GNU/Linux distributions for small devices:",
            Category::Historical => "Historical free GNU/Linux distributions:",
        }
    }
}

/// Which categories to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    ForPc,
    Small,
    Historical,
    All,
}

impl Selection {
    /// Name used in output file prefixes.
    pub fn name(self) -> &'static str {
        match self {
            Selection::ForPc => "for-pc",
            Selection::Small => "small",
            Selection::Historical => "historical",
            Selection::All => "all",
        }
    }
}

/// Caption line followed by the category's links, one per line.
pub fn format_category(document: &Html, category: Category, origin: &str) -> String {
    let links = extract_links(document, category.anchor(), origin);
    tracing::info!("{:?}: {} distributions", category, links.len());

    std::iter::once(category.caption().to_string())
        .chain(links)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn for_pc_distros(document: &Html, origin: &str) -> String {
    format_category(document, Category::ForPc, origin)
}

pub fn small_distros(document: &Html, origin: &str) -> String {
    format_category(document, Category::Small, origin)
}

pub fn historical_distros(document: &Html, origin: &str) -> String {
    format_category(document, Category::Historical, origin)
}

/// All three categories, separated by a blank line.
pub fn all_distros(document: &Html, origin: &str) -> String {
    [
        for_pc_distros(document, origin),
        small_distros(document, origin),
        historical_distros(document, origin),
    ]
    .join("\n\n")
}

pub fn render_selection(document: &Html, selection: Selection, origin: &str) -> String {
    match selection {
        Selection::ForPc => for_pc_distros(document, origin),
        Selection::Small => small_distros(document, origin),
        Selection::Historical => historical_distros(document, origin),
        Selection::All => all_distros(document, origin),
    }
}
