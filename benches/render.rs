// benches/render.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use offer_pages::config::options::{OfferLayout, PageOptions};
use offer_pages::group::by_category;
use offer_pages::offer::{Offer, split_list};
use offer_pages::render::{Fragments, css::brand_css, page::offer_page};

const CATEGORIES: &[&str] = &["Banking", "Business Tools", "Cashback", "Media", "Shopping", "Other"];

fn sample_offers(n: usize) -> Vec<Offer> {
    (0..n)
        .map(|i| Offer {
            slug: format!("brand-{i}"),
            brand: format!("Brand {i}"),
            brand_class: format!("brand-b{i}"),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            headline: format!("Get \u{a3}{i} when you join & save"),
            subheadline: "Open an account in minutes".into(),
            referral_link: format!("https://example.com/r/{i}?src=dir&x=1"),
            how_it_works: split_list("Sign up: 2 mins|\u{1f680} Verify: upload ID|Earn: done"),
            why_choose: split_list("Cheap: low fees|Fast: instant|Safe: regulated"),
            features: split_list("Pots: save|Alerts: instant|Cards: virtual"),
            disclaimer: "T&Cs apply.".into(),
            youtube_url: "https://youtu.be/dQw4w9WgXcQ".into(),
            description: "A bank.\nAnother line.".into(),
            commission: "\u{a3}10".into(),
            ..Offer::default()
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let offers = sample_offers(120);
    let opts = PageOptions::default();

    c.bench_function("fragments_120", |b| {
        b.iter(|| {
            let groups = by_category(black_box(&offers));
            let f = Fragments::build(&groups, OfferLayout::Directory);
            black_box(f.navbar.len() + f.carousels.len())
        })
    });

    let groups = by_category(&offers);
    let fragments = Fragments::build(&groups, OfferLayout::Directory);
    c.bench_function("offer_page", |b| {
        b.iter(|| {
            let html = offer_page(black_box(&offers[7]), &fragments, &opts);
            black_box(html.len())
        })
    });

    c.bench_function("brand_css_120", |b| {
        b.iter(|| black_box(brand_css(black_box(&offers)).len()))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
