// src/offer.rs
//
// Raw rows → typed offers. Column access is case/whitespace insensitive and
// happens exactly once per row, here.
use std::collections::HashMap;

use tracing::warn;

use crate::config::consts::DEFAULT_CATEGORY;
use crate::core::sanitize::{brand_class, is_contained_slug, normalize_brand_class, slug_from_file, slugify};
use crate::store::DataSet;

/* ---------------- Column normalizer ---------------- */

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// `lowercase(trim(header))` → (column index, original header).
#[derive(Clone, Debug, Default)]
pub struct ColumnMap {
    map: HashMap<String, (usize, String)>,
}

impl ColumnMap {
    /// The first header wins when two normalise to the same key.
    pub fn new(headers: &[String]) -> Self {
        let mut map = HashMap::with_capacity(headers.len());
        for (ix, h) in headers.iter().enumerate() {
            map.entry(normalize_key(h)).or_insert_with(|| (ix, h.clone()));
        }
        Self { map }
    }

    pub fn index(&self, field: &str) -> Option<usize> {
        self.map.get(&normalize_key(field)).map(|(ix, _)| *ix)
    }

    /// Original header text for a logical field name.
    pub fn header(&self, field: &str) -> Option<&str> {
        self.map.get(&normalize_key(field)).map(|(_, h)| h.as_str())
    }

    /// Value of `field` in `row`, or `""` if the column is absent or the row is short.
    pub fn get<'a>(&self, row: &'a [String], field: &str) -> &'a str {
        self.index(field)
            .and_then(|ix| row.get(ix))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// First non-blank value among aliases.
    pub fn first_of<'a>(&self, row: &'a [String], fields: &[&str]) -> &'a str {
        fields
            .iter()
            .map(|f| self.get(row, f))
            .find(|v| !v.trim().is_empty())
            .unwrap_or("")
    }
}

/* ---------------- List fields ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    pub title: String,
    pub description: String,
}

/// `"Step one: do X|Step two: do Y: now"` → [("Step one", "do X"), ("Step two", "do Y: now")]
pub fn split_list(s: &str) -> Vec<ListItem> {
    s.split('|')
        .map(str::trim)
        .filter(|seg| !seg.is_empty())
        .map(|seg| match seg.split_once(':') {
            Some((title, desc)) => ListItem { title: s!(title.trim()), description: s!(desc.trim()) },
            None => ListItem { title: s!(seg), description: s!() },
        })
        .collect()
}

/* ---------------- Typed record ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Offer {
    pub file: String,
    pub slug: String,
    pub brand: String,
    pub brand_class: String,
    pub category: String,
    pub headline: String,
    pub subheadline: String,
    pub referral_link: String,
    pub how_it_works: Vec<ListItem>,
    pub why_choose: Vec<ListItem>,
    pub features: Vec<ListItem>,
    pub disclaimer: String,
    pub youtube_url: String,
    pub description: String,
    pub commission: String,
    pub avg_commission: String,
    pub avg_deal_value: String,
    pub payout_threshold: String,
    pub cookie_expiration: String,
    pub paid_ads_policy: String,
}

impl Offer {
    /// Build from one row. `None` when no slug can be derived (no File, no Brand).
    pub fn from_row(cols: &ColumnMap, row: &[String]) -> Option<Self> {
        let get = |field: &str| cols.get(row, field).trim().to_string();

        let file = get("File");
        let brand = get("Brand");
        let mut slug = slug_from_file(&file);
        if !slug.is_empty() && !is_contained_slug(&slug) {
            let safe = slugify(&slug);
            warn!(
                "{} '{}' points outside the offers directory; using '{}'",
                cols.header("File").unwrap_or("File"), file, safe
            );
            slug = safe;
        }
        if slug.is_empty() {
            slug = slugify(&brand);
        }
        if slug.is_empty() {
            return None;
        }

        let raw_class = get("Brand Class");
        let brand_class = if raw_class.is_empty() {
            brand_class(&brand)
        } else {
            normalize_brand_class(&raw_class)
        };

        let category = match get("Category") {
            c if c.is_empty() => s!(DEFAULT_CATEGORY),
            c => c,
        };

        Some(Offer {
            file,
            slug,
            brand_class,
            category,
            headline: get("Headline"),
            subheadline: get("Subheadline"),
            referral_link: get("Referral Link"),
            how_it_works: split_list(cols.get(row, "How It Works")),
            why_choose: split_list(cols.get(row, "Why Choose")),
            features: split_list(cols.get(row, "Features")),
            disclaimer: get("Disclaimer"),
            youtube_url: cols.first_of(row, &["YouTube Video", "Video"]).trim().to_string(),
            description: get("Description"),
            commission: get("Commission"),
            avg_commission: get("Avg Commission Per Sale"),
            avg_deal_value: cols.first_of(row, &["Avg Deal Value", "Avg Deal Value ()"]).trim().to_string(),
            payout_threshold: cols.first_of(row, &["Payout Threshold", "Payout Threshold ()"]).trim().to_string(),
            cookie_expiration: get("Cookie Expiration"),
            paid_ads_policy: get("Paid Ads Policy"),
            brand,
        })
    }

    /// Page title: headline, else the brand name.
    pub fn title(&self) -> &str {
        if self.headline.is_empty() { &self.brand } else { &self.headline }
    }

    /// Meta description: subheadline, else the first sentence of the description.
    pub fn summary(&self) -> String {
        if !self.subheadline.is_empty() {
            return self.subheadline.clone();
        }
        self.description
            .split(['.', '\n'])
            .next()
            .unwrap_or("")
            .trim()
            .to_string()
    }

    /// `(label, value)` pairs of the non-empty program details, in display order.
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Category", self.category.as_str()),
            ("Commission", self.commission.as_str()),
            ("Avg Commission Per Sale", self.avg_commission.as_str()),
            ("Avg Deal Value", self.avg_deal_value.as_str()),
            ("Payout Threshold", self.payout_threshold.as_str()),
            ("Cookie Expiration", self.cookie_expiration.as_str()),
            ("Paid Ads Policy", self.paid_ads_policy.as_str()),
        ]
        .into_iter()
        // category alone is always present and says nothing about the program
        .filter(|(label, v)| *label != "Category" && !v.is_empty())
        .collect()
    }
}

/// Every usable row as an `Offer`, in input order. Rows without a slug are skipped.
pub fn offers_from_dataset(ds: &DataSet) -> Vec<Offer> {
    let cols = ColumnMap::new(&ds.headers);
    let mut out = Vec::with_capacity(ds.rows.len());
    for (i, row) in ds.rows.iter().enumerate() {
        match Offer::from_row(&cols, row) {
            Some(offer) => out.push(offer),
            // +2: 1-based and the header line
            None => warn!("Skipping row {}: no File or Brand to name the page", i + 2),
        }
    }
    out
}
