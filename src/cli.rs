// src/cli.rs
//
// Argument structs for the binaries. Every flag has a default, so each tool
// also runs with no arguments at all.
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::consts::*;
use crate::config::options::{BuildOptions, OfferLayout, PageOptions, Source};
use crate::error::Result;
use crate::progress::LogProgress;

/* ---------------- offer_pages ---------------- */

#[derive(Parser, Debug)]
#[command(name = "offer_pages", version, about = "Generate offer pages, partials, manifest, brand CSS and sitemap")]
pub struct GenerateArgs {
    /// CSV file with one row per offer
    #[arg(short, long, default_value = DEFAULT_INPUT_CSV)]
    pub input: PathBuf,

    /// Read rows from a published sheet (JSON array) instead of the CSV
    #[arg(long, env = "OFFER_PAGES_SHEET_URL", conflicts_with = "input")]
    pub sheet_url: Option<String>,

    /// Shorthand for `--sheet-url` with the site's own published sheet
    #[arg(long, conflicts_with_all = ["input", "sheet_url"])]
    pub sheet: bool,

    /// Site root that receives pages/, partials/, styles/ and sitemap.xml
    #[arg(long, default_value = DEFAULT_PUBLIC_DIR)]
    pub public_dir: PathBuf,

    /// Absolute site URL used in the sitemap
    #[arg(long, env = "OFFER_PAGES_SITE_URL", default_value = SITE_URL)]
    pub site_url: String,

    /// Write `<slug>.html` instead of `<slug>/index.html`
    #[arg(long)]
    pub flat: bool,

    #[arg(long)]
    pub no_sitemap: bool,

    #[arg(long)]
    pub no_brand_css: bool,

    /// Leave the affiliate disclosure banner out of generated pages
    #[arg(long)]
    pub no_disclosure: bool,
}

impl From<GenerateArgs> for BuildOptions {
    fn from(a: GenerateArgs) -> Self {
        let source = match (a.sheet_url, a.sheet) {
            (Some(url), _) => Source::Sheet(url),
            (None, true) => Source::Sheet(s!(SHEET_URL)),
            (None, false) => Source::Csv(a.input),
        };
        BuildOptions {
            source,
            public_dir: a.public_dir,
            page: PageOptions {
                layout: if a.flat { OfferLayout::Flat } else { OfferLayout::Directory },
                disclosure: !a.no_disclosure,
                brand_css: !a.no_brand_css,
            },
            site_url: a.site_url,
            write_sitemap: !a.no_sitemap,
            ..BuildOptions::default()
        }
    }
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let opts = BuildOptions::from(self);
        let mut progress = LogProgress::default();
        crate::runner::run(&opts, Some(&mut progress))?;
        Ok(())
    }
}

/* ---------------- fix_csv ---------------- */

#[derive(Parser, Debug)]
#[command(name = "fix_csv", version, about = "Repair column counts and quoting of the offers CSV")]
pub struct FixCsvArgs {
    #[arg(short, long, default_value = DEFAULT_INPUT_CSV)]
    pub input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_CLEAN_CSV)]
    pub output: PathBuf,
}

impl FixCsvArgs {
    pub fn run(self) -> Result<()> {
        let text = read_input(&self.input)?;
        let fixed = crate::csv::repair(&text)?;
        crate::file::write_text(&self.output, &fixed)?;
        info!("Fixed CSV written to {}", self.output.display());
        Ok(())
    }
}

/* ---------------- pad_csv ---------------- */

#[derive(Parser, Debug)]
#[command(name = "pad_csv", version, about = "Pad list columns to fixed mini-card counts (backs up first)")]
pub struct PadCsvArgs {
    #[arg(short, long, default_value = DEFAULT_INPUT_CSV)]
    pub input: PathBuf,
}

impl PadCsvArgs {
    pub fn run(self) -> Result<()> {
        let text = read_input(&self.input)?;
        let backup = crate::file::backup_file(&self.input)?;
        info!("Backup written to {}", backup.display());

        let mut ds = crate::csv::read_dataset(&text)?;
        let touched = crate::csv::pad_lists(&mut ds, LIST_PAD_COUNTS);
        crate::file::write_text(&self.input, &crate::csv::dataset_to_string(&ds)?)?;
        info!("Padded {} column(s) across {} row(s) in {}", touched, ds.len(), self.input.display());
        Ok(())
    }
}

/* ---------------- add_disclosure ---------------- */

#[derive(Parser, Debug)]
#[command(name = "add_disclosure", version, about = "Inject the affiliate disclosure banner into existing offer pages")]
pub struct DisclosureArgs {
    #[arg(long, default_value_t = default_offers_dir())]
    pub offers_dir: String,
}

fn default_offers_dir() -> String {
    join!(DEFAULT_PUBLIC_DIR, "/", OFFERS_SUBDIR)
}

impl DisclosureArgs {
    pub fn run(self) -> Result<()> {
        crate::disclosure::run(&PathBuf::from(self.offers_dir))?;
        Ok(())
    }
}

/* ---------------- extract_offers ---------------- */

#[derive(Parser, Debug)]
#[command(name = "extract_offers", version, about = "Scrape legacy offer pages back into a CSV")]
pub struct ExtractArgs {
    #[arg(short, long, default_value = LEGACY_OFFERS_DIR)]
    pub dir: PathBuf,

    #[arg(short, long, default_value = EXTRACT_OUTPUT_CSV)]
    pub output: PathBuf,
}

impl ExtractArgs {
    pub fn run(self) -> Result<()> {
        crate::extract::run(&self.dir, &self.output)?;
        Ok(())
    }
}

/* ---------------- favicon ---------------- */

#[derive(Parser, Debug)]
#[command(name = "favicon", version, about = "Make the favicon background transparent and build a multi-size ICO")]
pub struct FaviconArgs {
    #[arg(short, long, default_value = FAVICON_PNG)]
    pub input: PathBuf,

    #[arg(long, default_value = FAVICON_TRANSPARENT_PNG)]
    pub png_out: PathBuf,

    #[arg(long, default_value = FAVICON_ICO)]
    pub ico_out: PathBuf,

    /// Channels above this (all of r, g, b) count as white
    #[arg(long, default_value_t = WHITE_THRESHOLD)]
    pub threshold: u8,
}

impl FaviconArgs {
    pub fn run(self) -> Result<()> {
        crate::favicon::run(&self.input, &self.png_out, &self.ico_out, self.threshold, ICO_SIZES)
    }
}

fn read_input(path: &std::path::Path) -> Result<String> {
    if !path.is_file() {
        return Err(crate::Error::MissingInput(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
