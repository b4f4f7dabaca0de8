// tests/build_e2e.rs
use std::fs;
use std::path::PathBuf;

use offer_pages::config::options::{BuildOptions, OfferLayout, Source};
use offer_pages::progress::RecordingProgress;
use offer_pages::runner::run;
use offer_pages::Error;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("offer_pages_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const SHEET: &str = "\
File,Brand,Category,Headline,Subheadline,Referral Link,How It Works,Why Choose,Features,Disclaimer,YouTube Video
wise.html,Wise,Banking,Save on transfers,Send money for less,https://wise.com/invite/x,Sign up: 2 mins|Send: done,Cheap: low fees,,T&Cs apply,https://youtu.be/dQw4w9WgXcQ
monzo.html,Monzo,Banking,Get paid early,,https://join.monzo.com/r/y,,,\"Pots: save|Alerts: instant\",,
shein.html,SHEIN,Shopping,Style for less,,,,,,,
";

fn setup(name: &str) -> BuildOptions {
    let dir = tmp_dir(name);
    let csv = dir.join("offers_sheet.csv");
    fs::write(&csv, SHEET).unwrap();
    BuildOptions {
        source: Source::Csv(csv),
        site_url: "https://example.com/".into(),
        ..BuildOptions::with_public_dir(dir.join("public"))
    }
}

#[test]
fn builds_every_output() {
    let opts = setup("full");
    let mut progress = RecordingProgress::default();
    let summary = run(&opts, Some(&mut progress)).unwrap();

    assert_eq!(summary.slugs, vec!["wise", "monzo", "shein"]);

    let wise = fs::read_to_string(opts.offers_dir().join("wise").join("index.html")).unwrap();
    assert!(wise.contains("<div class=\"headline\">Save on transfers</div>"));
    assert!(wise.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
    // Features empty: no section at all
    assert!(!wise.contains("Popular Features"));

    let monzo = fs::read_to_string(opts.offers_dir().join("monzo").join("index.html")).unwrap();
    assert!(monzo.contains("Popular Features"));
    assert!(!monzo.contains("offer-video-card"));

    let manifest = fs::read_to_string(opts.manifest_path()).unwrap();
    let slugs: Vec<String> = serde_json::from_str(&manifest).unwrap();
    assert_eq!(slugs, vec!["wise", "monzo", "shein"]);

    let navbar = fs::read_to_string(opts.partials_dir().join("navbar.html")).unwrap();
    let monzo_at = navbar.find("/pages/offers/monzo/").unwrap();
    let wise_at = navbar.find("/pages/offers/wise/").unwrap();
    let shein_at = navbar.find("/pages/offers/shein/").unwrap();
    assert!(monzo_at < wise_at && wise_at < shein_at);

    assert!(opts.partials_dir().join("carousels.html").is_file());
    let css = fs::read_to_string(opts.brand_css_path()).unwrap();
    assert!(css.contains(".brand-shein"));
    let sitemap = fs::read_to_string(opts.sitemap_path()).unwrap();
    assert!(sitemap.contains("<loc>https://example.com/pages/offers/wise/</loc>"));

    assert!(progress.finished);
    assert_eq!(progress.lines, vec!["Done! 3 offer page(s) generated."]);
    assert!(progress.items.contains(&"pages/offers/wise/index.html".to_string()));
    assert_eq!(summary.files_written.len(), progress.items.len());
}

#[test]
fn rebuild_is_byte_identical() {
    let opts = setup("idempotent");
    let first = run(&opts, None).unwrap();
    let snapshot: Vec<Vec<u8>> = first.files_written.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = run(&opts, None).unwrap();
    assert_eq!(first.files_written, second.files_written);
    for (path, before) in second.files_written.iter().zip(snapshot) {
        assert_eq!(fs::read(path).unwrap(), before, "{} changed", path.display());
    }
}

#[test]
fn flat_layout_and_optional_outputs_off() {
    let mut opts = setup("flat");
    opts.page.layout = OfferLayout::Flat;
    opts.page.brand_css = false;
    opts.write_sitemap = false;
    run(&opts, None).unwrap();

    assert!(opts.offers_dir().join("wise.html").is_file());
    assert!(!opts.offers_dir().join("wise").exists());
    assert!(!opts.brand_css_path().exists());
    assert!(!opts.sitemap_path().exists());
}

#[test]
fn duplicate_slug_last_write_wins() {
    let dir = tmp_dir("dupes");
    let csv = dir.join("offers.csv");
    fs::write(&csv, "File,Brand,Headline\nwise.html,Wise,First\nWISE.html,Wise,Second\n").unwrap();
    let opts = BuildOptions { source: Source::Csv(csv), ..BuildOptions::with_public_dir(dir.join("public")) };

    let summary = run(&opts, None).unwrap();
    assert_eq!(summary.slugs, vec!["wise"]);
    let page = fs::read_to_string(opts.offers_dir().join("wise").join("index.html")).unwrap();
    assert!(page.contains(">Second<"));
    assert!(!page.contains(">First<"));
}

#[test]
fn file_column_cannot_write_outside_offers_dir() {
    let dir = tmp_dir("contained");
    let target = dir.join("target").join("x.html");
    let csv = dir.join("offers.csv");
    fs::write(
        &csv,
        format!("File,Brand\n{},Abs\n../../../outside.html,Up\nwise.html,Wise\n", target.display()),
    )
    .unwrap();
    let opts = BuildOptions { source: Source::Csv(csv), ..BuildOptions::with_public_dir(dir.join("public")) };

    let summary = run(&opts, None).unwrap();
    assert_eq!(summary.slugs.len(), 3);
    assert!(summary.slugs.contains(&"outside".to_string()));
    for slug in &summary.slugs {
        assert!(!slug.contains('/') && !slug.contains(".."), "{slug}");
    }
    for path in summary.files_written.iter().filter(|p| p.ends_with("index.html")) {
        assert!(path.starts_with(opts.offers_dir()), "{}", path.display());
    }
    assert!(!dir.join("target").exists());
    assert!(!dir.join("outside").exists());
    assert!(opts.offers_dir().join("outside").join("index.html").is_file());
}

#[test]
fn header_only_csv_generates_nothing_but_still_succeeds() {
    let dir = tmp_dir("empty");
    let csv = dir.join("offers.csv");
    fs::write(&csv, "File,Brand\n").unwrap();
    let opts = BuildOptions { source: Source::Csv(csv), ..BuildOptions::with_public_dir(dir.join("public")) };

    let mut progress = RecordingProgress::default();
    let summary = run(&opts, Some(&mut progress)).unwrap();
    assert!(summary.slugs.is_empty());
    assert_eq!(progress.lines, vec!["No offer pages generated."]);
    assert_eq!(fs::read_to_string(opts.manifest_path()).unwrap(), "[]");
}

#[test]
fn missing_input_is_fatal() {
    let dir = tmp_dir("missing");
    let opts = BuildOptions {
        source: Source::Csv(dir.join("nope.csv")),
        ..BuildOptions::with_public_dir(dir.join("public"))
    };
    let err = run(&opts, None).unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
    assert!(err.to_string().contains("nope.csv"));
    assert!(!opts.offers_dir().exists());
}
