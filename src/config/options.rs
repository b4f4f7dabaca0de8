// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Where the offer rows come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Csv(PathBuf),
    /// Spreadsheet endpoint returning a JSON array of flat objects.
    Sheet(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::Csv(PathBuf::from(DEFAULT_INPUT_CSV))
    }
}

/// How an offer page is placed under the offers dir.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OfferLayout {
    /// `<slug>/index.html`, linked as `/pages/offers/<slug>/`
    #[default]
    Directory,
    /// `<slug>.html`, linked as `/pages/offers/<slug>.html`
    Flat,
}

impl OfferLayout {
    /// Site-relative URL path of an offer page.
    pub fn href(&self, slug: &str) -> String {
        match self {
            OfferLayout::Directory => join!(OFFERS_URL_PREFIX, slug, "/"),
            OfferLayout::Flat => join!(OFFERS_URL_PREFIX, slug, ".html"),
        }
    }

    /// Path of the page file relative to the offers dir.
    pub fn page_path(&self, slug: &str) -> PathBuf {
        match self {
            OfferLayout::Directory => Path::new(slug).join(PAGE_FILE),
            OfferLayout::Flat => PathBuf::from(join!(slug, ".html")),
        }
    }
}

/// Knobs that only affect how a single page is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub layout: OfferLayout,
    /// Render the affiliate disclosure banner into each page.
    pub disclosure: bool,
    /// Link the generated brand colour stylesheet.
    pub brand_css: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { layout: OfferLayout::Directory, disclosure: true, brand_css: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    pub source: Source,
    pub public_dir: PathBuf,
    pub page: PageOptions,
    pub site_url: String,
    pub static_pages: Vec<String>,
    pub write_sitemap: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            page: PageOptions::default(),
            site_url: s!(SITE_URL),
            static_pages: STATIC_PAGES.iter().map(|p| s!(*p)).collect(),
            write_sitemap: true,
        }
    }
}

impl BuildOptions {
    /// Defaults rooted at another public dir (tests, alternate sites).
    pub fn with_public_dir<P: Into<PathBuf>>(public_dir: P) -> Self {
        Self { public_dir: public_dir.into(), ..Self::default() }
    }

    pub fn offers_dir(&self) -> PathBuf {
        self.public_dir.join(OFFERS_SUBDIR)
    }

    pub fn partials_dir(&self) -> PathBuf {
        self.public_dir.join(PARTIALS_SUBDIR)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.offers_dir().join(MANIFEST_FILE)
    }

    pub fn brand_css_path(&self) -> PathBuf {
        self.public_dir.join(STYLES_SUBDIR).join(BRAND_CSS_FILE)
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.public_dir.join(SITEMAP_FILE)
    }
}
