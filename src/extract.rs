// src/extract.rs
//
// Legacy offer pages (`offers/*.html`) back into sheet rows.
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::core::html::{
    attr_value, blocks_with_class, find_open_tag_with_class, slice_between_ci, strip_tags,
    text_of_class, to_lower,
};
use crate::error::{Error, Result};
use crate::file::write_text;
use crate::store::DataSet;

pub const FIELDS: &[&str] = &[
    "File", "Offer Name", "Headline", "Subheadline", "Referral Link",
    "How It Works", "Why Choose", "Features", "Disclaimer", "Brand Class",
];

/// One row, in `FIELDS` order. Anything not found is left empty.
pub fn extract_offer(file_name: &str, html: &str) -> Vec<String> {
    let headline = text_of_class(html, "div", "headline").unwrap_or_default();
    let subheadline = text_of_class(html, "div", "subheadline").unwrap_or_default();

    let title = slice_between_ci(html, "<title", "</title>").map(strip_tags);
    let offer_name = match title {
        Some(t) => t,
        None => headline.clone(),
    };

    let referral = find_open_tag_with_class(html, "a", "cta-button", 0)
        .and_then(|(start, end)| attr_value(&html[start..end], "href"))
        .unwrap_or_default();

    let cards = blocks_with_class(html, "div", "card");
    let how = mini_cards_of(&cards, |t| t.contains("How It Works"));
    let why = mini_cards_of(&cards, |t| t.contains("Why Choose"));
    let features = mini_cards_of(&cards, |t| {
        t.contains("Feature") || t.contains("Benefit") || t.contains("Popular")
    });

    // last small-print card wins
    let disclaimer = cards
        .iter()
        .filter(|card| {
            open_tag(card)
                .and_then(|t| attr_value(t, "style"))
                .is_some_and(|style| style.contains("font-size"))
        })
        .last()
        .map(|card| strip_tags(card))
        .unwrap_or_default();

    vec![
        s!(file_name),
        offer_name,
        headline,
        subheadline,
        referral,
        how,
        why,
        features,
        disclaimer,
        body_class(html),
    ]
}

fn open_tag(block: &str) -> Option<&str> {
    block.find('>').map(|end| &block[..=end])
}

fn body_class(html: &str) -> String {
    let lc = to_lower(html);
    let Some(start) = lc.find("<body") else { return s!() };
    let Some(end) = html[start..].find('>') else { return s!() };
    attr_value(&html[start..start + end + 1], "class")
        .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Mini-cards of the first card whose text matches, as `title: desc | ...`.
fn mini_cards_of<F>(cards: &[&str], matches: F) -> String
where
    F: Fn(&str) -> bool,
{
    let Some(card) = cards.iter().find(|c| matches(&strip_tags(c))) else {
        return s!();
    };
    blocks_with_class(card, "div", "mini-card")
        .into_iter()
        .filter_map(|mini| {
            let title = text_of_class(mini, "span", "title")?;
            let desc = text_of_class(mini, "span", "desc")?;
            Some(format!("{}: {}", title, desc))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Extract every `*.html` directly under `dir` (sorted) into a CSV at `out`.
/// Returns the number of rows written.
pub fn run(dir: &Path, out: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Err(Error::MissingDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_html = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("html"));
        if is_html && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut ds = DataSet {
        headers: FIELDS.iter().map(|f| s!(*f)).collect(),
        rows: Vec::with_capacity(files.len()),
    };
    for path in &files {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let html = fs::read_to_string(path)?;
        debug!("extracting {}", name);
        ds.rows.push(extract_offer(&name, &html));
    }

    write_text(out, &crate::csv::dataset_to_string(&ds)?)?;
    info!("Extracted {} offer(s) to {}", ds.len(), out.display());
    Ok(ds.len())
}
