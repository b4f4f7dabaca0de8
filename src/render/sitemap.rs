// src/render/sitemap.rs
use std::collections::BTreeSet;

use url::Url;

use crate::config::options::OfferLayout;
use crate::core::escape;
use crate::error::Result;
use crate::offer::Offer;

/// `<urlset>` of the static pages (in the given order) followed by every
/// offer page, sorted by slug and listed once.
///
/// No `<lastmod>`: rebuilding from the same rows yields the same bytes.
pub fn sitemap(site_url: &str, static_pages: &[String], offers: &[Offer], layout: OfferLayout) -> Result<String> {
    let base = Url::parse(site_url)?;
    let slugs: BTreeSet<&str> = offers.iter().map(|o| o.slug.as_str()).collect();

    let mut locs = Vec::with_capacity(static_pages.len() + slugs.len());
    for page in static_pages {
        locs.push(base.join(page)?);
    }
    for slug in slugs {
        locs.push(base.join(&layout.href(slug))?);
    }

    let mut out = s!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for loc in locs {
        out.push_str("  <url><loc>");
        out.push_str(&escape(loc.as_str()));
        out.push_str("</loc></url>\n");
    }
    out.push_str("</urlset>\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(slug: &str) -> Offer {
        Offer { slug: s!(slug), ..Offer::default() }
    }

    #[test]
    fn static_pages_first_then_sorted_unique_offers() {
        let pages = vec![s!(""), s!("pages/information.html")];
        let offers = vec![offer("wise"), offer("monzo"), offer("wise")];
        let xml = sitemap("https://example.com/", &pages, &offers, OfferLayout::Directory).unwrap();

        let locs: Vec<&str> = xml
            .lines()
            .filter_map(|l| l.trim().strip_prefix("<url><loc>"))
            .map(|l| l.trim_end_matches("</loc></url>"))
            .collect();
        assert_eq!(locs, vec![
            "https://example.com/",
            "https://example.com/pages/information.html",
            "https://example.com/pages/offers/monzo/",
            "https://example.com/pages/offers/wise/",
        ]);
    }

    #[test]
    fn flat_layout_and_bad_base() {
        let xml = sitemap("https://example.com", &[], &[offer("wise")], OfferLayout::Flat).unwrap();
        assert!(xml.contains("<loc>https://example.com/pages/offers/wise.html</loc>"));
        assert!(sitemap("not a url", &[], &[], OfferLayout::Flat).is_err());
    }
}
