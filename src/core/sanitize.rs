// src/core/sanitize.rs
use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::tables;

static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9]+").expect("static slug pattern")
});

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `"Amazon Prime Video!"` → `"amazon-prime-video"`
pub fn slugify(name: &str) -> String {
    NON_SLUG
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Output folder name from the `File` column: trimmed, lower-cased, `.html` dropped.
pub fn slug_from_file(file: &str) -> String {
    let lower = file.trim().to_lowercase();
    match lower.strip_suffix(".html") {
        Some(stem) => stem.to_string(),
        None => lower,
    }
}

/// True when `slug` stays inside whatever directory it is joined onto:
/// relative, with no `.`/`..` parts.
pub fn is_contained_slug(slug: &str) -> bool {
    !slug.is_empty()
        && Path::new(slug)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Class for a brand display name: table entry if present, else the normalised name.
pub fn brand_class(name: &str) -> String {
    match tables::brand_class_for(name) {
        Some(class) => s!(class),
        None => normalize_brand_class(name),
    }
}

/// `"brand-" + squashed` where squashed is lower-case `[a-z0-9]` with every
/// `brand` removed. Idempotent; empty input gives `"brand-"`.
pub fn normalize_brand_class(raw: &str) -> String {
    let mut squashed: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    // removal can expose a new occurrence ("bbrandrand"), so repeat to a fixpoint
    while squashed.contains("brand") {
        squashed = squashed.replace("brand", "");
    }
    join!("brand-", &squashed)
}

/// `"Business Tools"` → `"businesstools"`
pub fn category_class(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("Amazon Prime Video!"), "amazon-prime-video");
        assert_eq!(slugify("  --Wise--  "), "wise");
        assert_eq!(slugify("Cashback.co.uk"), "cashback-co-uk");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("Ünïcødé Bank"), "n-c-d-bank");
    }

    #[test]
    fn slug_from_file_strips_extension() {
        assert_eq!(slug_from_file(" Wise.HTML "), "wise");
        assert_eq!(slug_from_file("monzo"), "monzo");
        assert_eq!(slug_from_file("a.html.html"), "a.html");
    }

    #[test]
    fn contained_slugs_stay_relative() {
        assert!(is_contained_slug("wise"));
        assert!(is_contained_slug("uk/wise"));
        assert!(!is_contained_slug(""));
        assert!(!is_contained_slug("/tmp/x"));
        assert!(!is_contained_slug("../outside"));
        assert!(!is_contained_slug("a/../../b"));
        assert!(!is_contained_slug("./wise"));
    }

    #[test]
    fn brand_class_prefers_table() {
        assert_eq!(brand_class("Virgin Media"), "brand-virgin");
        assert_eq!(brand_class("Wise"), "brand-wise");
        assert_eq!(brand_class(""), "brand-");
    }

    #[test]
    fn normalize_strips_brand_tokens() {
        assert_eq!(normalize_brand_class("brand-monzo"), "brand-monzo");
        assert_eq!(normalize_brand_class("Brand_Giff Gaff"), "brand-giffgaff");
        assert_eq!(normalize_brand_class("BRANDbrand"), "brand-");
        assert_eq!(normalize_brand_class("bbrandrand"), "brand-");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["Monzo", "brand-brand-x", "bbrandrand", "Café Brandy", "", "Cashback.co.uk", "b-rand"] {
            let once = normalize_brand_class(raw);
            assert_eq!(normalize_brand_class(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn category_class_squashes_whitespace() {
        assert_eq!(category_class("Business Tools"), "businesstools");
        assert_eq!(category_class("Other"), "other");
    }
}
