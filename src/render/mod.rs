// src/render/mod.rs
//! # Rendering
//!
//! Pure functions from typed offers (and the category groups built from them)
//! to HTML / CSS / XML strings. Nothing in here touches the filesystem or the
//! network; `runner` hands the results to `file`.
//!
//! ## Escaping
//! Every value that came from the row source goes through `core::html::escape`
//! at the point it is interpolated (`Html::text` / `Html::attr`). Raw `push` is
//! only used for markup that is fixed in this crate, or for fragments that
//! were themselves produced by these renderers.
//!
//! ## Typical call chain
//! ```text
//! runner → group::by_category → Fragments::build (navbar + carousels)
//!        ↘ per offer: page::offer_page(offer, &fragments, &page_opts)
//!        ↘ css::brand_css, sitemap::sitemap
//! ```

pub mod carousel;
pub mod css;
pub mod navbar;
pub mod page;
pub mod sitemap;

use crate::config::options::OfferLayout;
use crate::group::CategoryGroup;

/// Shared fragments rendered once per build and inlined into every page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragments {
    pub navbar: String,
    pub carousels: String,
}

impl Fragments {
    pub fn build(groups: &[CategoryGroup<'_>], layout: OfferLayout) -> Self {
        Self {
            navbar: navbar::navbar(groups, layout),
            carousels: carousel::carousels(groups, layout),
        }
    }
}

/// `"brand-monzo"` → `"cta-button cta-button-monzo"`
pub(crate) fn cta_class(brand_class: &str) -> String {
    let suffix = brand_class.strip_prefix("brand-").unwrap_or(brand_class);
    join!("cta-button cta-button-", suffix)
}
