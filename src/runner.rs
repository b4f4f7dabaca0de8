// src/runner.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{
    config::consts::{CAROUSELS_FILE, NAVBAR_FILE},
    config::options::BuildOptions,
    error::Result,
    file::{write_manifest, write_offer_page, write_text},
    group::by_category,
    offer::{Offer, offers_from_dataset},
    progress::{NullProgress, Progress},
    render::{Fragments, css::brand_css, page::offer_page, sitemap::sitemap},
    store,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Unique slugs in first-seen order (the manifest contents).
    pub slugs: Vec<String>,
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: load rows from `opts.source`, then build everything.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &BuildOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let ds = store::load(&opts.source)?;
    let offers = offers_from_dataset(&ds);
    build(&offers, opts, progress)
}

/// Render and write every output for an already-typed set of offers.
pub fn build(offers: &[Offer], opts: &BuildOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    match progress {
        Some(p) => build_with(offers, opts, p),
        None => build_with(offers, opts, &mut NullProgress),
    }
}

fn build_with(offers: &[Offer], opts: &BuildOptions, p: &mut dyn Progress) -> Result<RunSummary> {
    let result = build_inner(offers, opts, p);
    p.finish();
    result
}

fn build_inner(offers: &[Offer], opts: &BuildOptions, p: &mut dyn Progress) -> Result<RunSummary> {
    let layout = opts.page.layout;
    let offers_dir = opts.offers_dir();
    let mut summary = RunSummary::default();

    p.begin(offers.len());

    let groups = by_category(offers);
    let fragments = Fragments::build(&groups, layout);

    let mut seen: HashSet<&str> = HashSet::with_capacity(offers.len());
    for offer in offers {
        if seen.insert(offer.slug.as_str()) {
            summary.slugs.push(offer.slug.clone());
        } else {
            warn!("Duplicate slug '{}': this row overwrites the earlier page", offer.slug);
        }
        let html = offer_page(offer, &fragments, &opts.page);
        let path = write_offer_page(&offers_dir, &offer.slug, layout, &html)?;
        written(p, &mut summary, &opts.public_dir, path);
    }

    let manifest = opts.manifest_path();
    write_manifest(&manifest, &summary.slugs)?;
    written(p, &mut summary, &opts.public_dir, manifest);

    let partials = opts.partials_dir();
    for (name, contents) in [(NAVBAR_FILE, &fragments.navbar), (CAROUSELS_FILE, &fragments.carousels)] {
        let path = partials.join(name);
        write_text(&path, contents)?;
        written(p, &mut summary, &opts.public_dir, path);
    }

    if opts.page.brand_css {
        let path = opts.brand_css_path();
        write_text(&path, &brand_css(offers))?;
        written(p, &mut summary, &opts.public_dir, path);
    }

    if opts.write_sitemap {
        let xml = sitemap(&opts.site_url, &opts.static_pages, offers, layout)?;
        let path = opts.sitemap_path();
        write_text(&path, &xml)?;
        written(p, &mut summary, &opts.public_dir, path);
    }

    let done = if offers.is_empty() {
        s!("No offer pages generated.")
    } else {
        format!("Done! {} offer page(s) generated.", offers.len())
    };
    p.log(&done);
    Ok(summary)
}

fn written(p: &mut dyn Progress, summary: &mut RunSummary, public_dir: &Path, path: PathBuf) {
    p.item_done(&display_rel(public_dir, &path));
    summary.files_written.push(path);
}

/// `public/pages/offers/wise/index.html` → `pages/offers/wise/index.html`
fn display_rel(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
