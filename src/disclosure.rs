// src/disclosure.rs
//
// Affiliate disclosure banner: rendered into new pages by `render::page`, and
// retro-fitted into existing pages by `run`.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::config::consts::PAGE_FILE;
use crate::error::{Error, Result};

/// Presence of this class means the page already carries a banner.
pub const DISCLOSURE_MARKER: &str = "affiliate-disclosure";

const CONTAINER_OPEN: &str = "<div class=\"container\">";

pub const DISCLOSURE_HTML: &str = r#"
        <!-- Affiliate Disclosure Banner -->
        <div class="affiliate-disclosure">
            This page contains affiliate links. We may earn a commission if you sign up or make a purchase through our links.
            <a href="/pages/information.html#affiliate-disclosure">Learn more about our affiliate relationships</a>.
        </div>
"#;

#[derive(Debug, PartialEq, Eq)]
pub enum Injection {
    Added(String),
    AlreadyPresent,
    NoContainer,
}

/// Insert the banner right after the first `<div class="container">`.
pub fn inject(html: &str) -> Injection {
    if html.contains(DISCLOSURE_MARKER) {
        return Injection::AlreadyPresent;
    }
    match html.find(CONTAINER_OPEN) {
        Some(ix) => {
            let at = ix + CONTAINER_OPEN.len();
            let mut out = String::with_capacity(html.len() + DISCLOSURE_HTML.len());
            out.push_str(&html[..at]);
            out.push_str(DISCLOSURE_HTML);
            out.push_str(&html[at..]);
            Injection::Added(out)
        }
        None => Injection::NoContainer,
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DisclosureSummary {
    pub added: usize,
    pub skipped: usize,
    pub no_container: usize,
    pub failed: usize,
}

/// `<dir>/<slug>/index.html` for every subdirectory that has one, sorted.
pub fn find_offer_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let page = entry.path().join(PAGE_FILE);
        if page.is_file() {
            pages.push(page);
        }
    }
    pages.sort();
    Ok(pages)
}

/// Visit every offer page under `dir`. A missing `dir` is fatal; a failure
/// on one page is logged and counted, and the walk goes on.
pub fn run(dir: &Path) -> Result<DisclosureSummary> {
    if !dir.is_dir() {
        return Err(Error::MissingDir(dir.to_path_buf()));
    }
    let pages = find_offer_pages(dir)?;
    info!("Found {} offer page(s)", pages.len());

    let mut summary = DisclosureSummary::default();
    for page in pages {
        match process(&page) {
            Ok(Injection::Added(_)) => {
                info!("Added affiliate disclosure to {}", page.display());
                summary.added += 1;
            }
            Ok(Injection::AlreadyPresent) => {
                info!("Skipping {} - already has affiliate disclosure", page.display());
                summary.skipped += 1;
            }
            Ok(Injection::NoContainer) => {
                warn!("Could not find container div in {}", page.display());
                summary.no_container += 1;
            }
            Err(e) => {
                error!("Error processing {}: {}", page.display(), e);
                summary.failed += 1;
            }
        }
    }
    info!(
        "Completed: {} added, {} skipped, {} without container, {} failed",
        summary.added, summary.skipped, summary.no_container, summary.failed
    );
    Ok(summary)
}

fn process(page: &Path) -> Result<Injection> {
    let html = fs::read_to_string(page)?;
    let outcome = inject(&html);
    if let Injection::Added(updated) = &outcome {
        fs::write(page, updated)?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_lands_after_first_container() {
        let html = "<body><div class=\"container\"><p>a</p></div><div class=\"container\"></div></body>";
        let Injection::Added(out) = inject(html) else { panic!("expected Added") };
        let banner = out.find(DISCLOSURE_MARKER).unwrap();
        let first = out.find(CONTAINER_OPEN).unwrap();
        assert!(first < banner);
        assert!(banner < out.find("<p>a</p>").unwrap());
        assert_eq!(out.matches("Affiliate Disclosure Banner").count(), 1);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let Injection::Added(once) = inject("<div class=\"container\"></div>") else { panic!() };
        assert_eq!(inject(&once), Injection::AlreadyPresent);
    }

    #[test]
    fn page_without_container_is_reported() {
        assert_eq!(inject("<main></main>"), Injection::NoContainer);
    }
}
