// src/render/page.rs
//
// Full offer page. Section order:
//   head, navbar, [disclosure], hero, [how it works], [video], [why choose],
//   [program details], [about], bottom CTA, [features], [disclaimer], [carousels]
// Bracketed sections are left out entirely when they have nothing to show.
use url::form_urlencoded::byte_serialize;

use crate::config::consts::{
    BRAND_CSS_HREF, DEFAULT_REFERRAL_LINK, FEATURE_ICON, NUMBER_ICONS, STYLESHEET_HREF, WHY_ICON,
};
use crate::config::options::PageOptions;
use crate::core::Html;
use crate::core::emoji::split_emoji_title;
use crate::core::youtube::{youtube_embed, youtube_id};
use crate::disclosure::DISCLOSURE_HTML;
use crate::offer::{ListItem, Offer};

use super::{Fragments, cta_class};

pub fn offer_page(offer: &Offer, fragments: &Fragments, opts: &PageOptions) -> String {
    let link = if offer.referral_link.is_empty() { DEFAULT_REFERRAL_LINK } else { offer.referral_link.as_str() };
    let cta = cta_class(&offer.brand_class);

    let mut w = Html::new();
    head(&mut w, offer, opts);

    w.push("<body");
    w.attr("class", &offer.brand_class);
    w.push(">\n");
    w.push("    <nav id=\"navbar\">");
    w.push(&fragments.navbar);
    w.push("</nav>\n");

    w.push("    <div class=\"container\">");
    if opts.disclosure {
        w.push(DISCLOSURE_HTML);
    }
    w.push("\n");
    hero(&mut w, offer, link, &cta);

    let how_icon = |i: usize| NUMBER_ICONS.get(i).or(NUMBER_ICONS.last()).copied().unwrap_or_default();
    mini_card_section(&mut w, "How It Works", &offer.how_it_works, how_icon);

    let video_id = youtube_id(&offer.youtube_url);
    if !video_id.is_empty() {
        w.push("        <div class=\"card offer-video-card\"><div class=\"headline\">A Little About ");
        w.text(&offer.brand);
        w.push("</div><div id=\"offer-video\">");
        w.push(youtube_embed(&video_id));
        w.push("</div></div>\n");
    }

    let why_title = join!("Why Choose ", &offer.brand, "?");
    mini_card_section(&mut w, &why_title, &offer.why_choose, |_| WHY_ICON);

    program_details(&mut w, offer);
    about(&mut w, offer);
    w.push("    </div>\n");

    w.push("    <div class=\"cta-bottom-row\" style=\"display:flex; justify-content:center; align-items:center; width:100%; margin: 32px 0 0 0;\">\n");
    w.push("      <a");
    w.attr("href", link);
    w.attr("class", &join!(&cta, " cta-bottom-wide"));
    w.push(" target=\"_blank\" rel=\"noopener\">Sign up now \u{2013} it only takes a few minutes!</a>\n");
    w.push("    </div>\n");

    if !offer.features.is_empty() {
        w.push("    <div class=\"container\">\n");
        mini_card_section(&mut w, "Popular Features", &offer.features, |_| FEATURE_ICON);
        w.push("    </div>\n");
    }

    if !offer.disclaimer.is_empty() {
        w.push("    <div class=\"container\"><div class=\"card disclaimer\" style=\"text-align:center; font-size:0.95rem; color:#888;\">");
        w.text(&offer.disclaimer);
        w.push("</div></div>\n");
    }

    if !fragments.carousels.is_empty() {
        w.push("    <section class=\"offer-carousels\">\n");
        w.push(&fragments.carousels);
        w.push("\n    </section>\n");
    }

    w.push("</body>\n</html>\n");
    w.finish()
}

fn head(w: &mut Html, offer: &Offer, opts: &PageOptions) {
    w.push("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    w.push("    <meta charset=\"UTF-8\">\n");
    w.push("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    w.push("    <title>");
    w.text(offer.title());
    w.push("</title>\n");
    let summary = offer.summary();
    if !summary.is_empty() {
        w.push("    <meta name=\"description\"");
        w.attr("content", &summary);
        w.push(">\n");
    }
    w.push("    <link rel=\"stylesheet\"");
    w.attr("href", STYLESHEET_HREF);
    w.push(">\n");
    if opts.brand_css {
        w.push("    <link rel=\"stylesheet\"");
        w.attr("href", BRAND_CSS_HREF);
        w.push(">\n");
    }
    w.push("</head>\n");
}

fn hero(w: &mut Html, offer: &Offer, link: &str, cta: &str) {
    w.push("        <div class=\"card\">\n");
    if !offer.title().is_empty() {
        w.push("            ");
        w.element("div", "headline", offer.title());
        w.push("\n");
    }
    if !offer.subheadline.is_empty() {
        w.push("            ");
        w.element("div", "subheadline", &offer.subheadline);
        w.push("\n");
    }
    w.push("            <div class=\"cta-share-row\"><div class=\"cta-share-row-inner\">\n");
    w.push("                <a");
    w.attr("href", link);
    w.attr("class", cta);
    w.push(" target=\"_blank\" rel=\"noopener\">Sign Up</a>\n");
    share_buttons(w, link, offer.title());
    w.push("            </div></div>\n        </div>\n");
}

fn share_buttons(w: &mut Html, link: &str, headline: &str) {
    let link_enc: String = byte_serialize(link.as_bytes()).collect();
    let head_enc: String = byte_serialize(headline.as_bytes()).collect();

    let targets = [
        ("Facebook", "facebook", join!("https://www.facebook.com/sharer/sharer.php?u=", &link_enc)),
        ("Twitter", "twitter", join!("https://twitter.com/intent/tweet?url=", &link_enc)),
        ("Email", "email", format!("mailto:?subject={}&body={}", head_enc, link_enc)),
        ("LinkedIn", "linkedin", join!("https://www.linkedin.com/shareArticle?mini=true&url=", &link_enc)),
        ("WhatsApp", "whatsapp", format!("https://wa.me/?text={}%20{}", head_enc, link_enc)),
        ("Pinterest", "pinterest", join!("https://pinterest.com/pin/create/button/?url=", &link_enc)),
    ];

    w.push("                <div class=\"share-btn-group\">\n");
    for (label, icon, href) in &targets {
        w.push("                  <a class=\"share-btn\"");
        w.attr("href", href);
        w.push(" target=\"_blank\" rel=\"noopener\"");
        w.attr("aria-label", &join!("Share on ", label));
        w.push(">");
        share_icon(w, label, icon);
        w.push("</a>\n");
    }
    // copy handler reads data-link, so the link never lands inside JS source
    w.push("                  <button class=\"share-btn share-copy\" aria-label=\"Copy Link\"");
    w.attr("data-link", link);
    w.push(" onclick=\"navigator.clipboard.writeText(this.dataset.link)\">");
    share_icon(w, "Copy Link", "copy");
    w.push("</button>\n");
    w.push("                </div>\n");
}

fn share_icon(w: &mut Html, alt: &str, icon: &str) {
    w.push("<img");
    w.attr("src", &format!("/icons/{}.png", icon));
    w.attr("alt", alt);
    w.push(" width=\"32\" height=\"32\" class=\"share-icon-img\" />");
}

fn mini_card_section<'a, F>(w: &mut Html, title: &str, items: &[ListItem], default_icon: F)
where
    F: Fn(usize) -> &'a str,
{
    if items.is_empty() {
        return;
    }
    w.push("        <div class=\"card\">");
    w.element("div", "headline", title);
    w.push("<div class=\"card-grid\">");
    for (i, item) in items.iter().enumerate() {
        let it = split_emoji_title(&item.title, default_icon(i));
        mini_card(w, &it.title, &item.description, &it.icon);
    }
    w.push("</div></div>\n");
}

fn mini_card(w: &mut Html, title: &str, desc: &str, icon: &str) {
    let icon_enc: String = byte_serialize(icon.as_bytes()).collect();
    let style = format!(
        "--mini-card-icon-bg: url('data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"100\"><text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" font-size=\"64\">{}</text></svg>');",
        icon_enc
    );
    w.push("<div class=\"mini-card\"");
    w.attr("style", &style);
    w.push(">");
    w.element("span", "title", title);
    w.element("span", "desc", desc);
    w.push("</div>");
}

fn program_details(w: &mut Html, offer: &Offer) {
    let details = offer.details();
    if details.is_empty() {
        return;
    }
    w.push("        <div class=\"card program-details\"><div class=\"headline\">Program Details</div>\n");
    for (label, value) in details {
        w.push("            <p><b>");
        w.text(label);
        w.push(":</b> ");
        w.text(value);
        w.push("</p>\n");
    }
    w.push("        </div>\n");
}

fn about(w: &mut Html, offer: &Offer) {
    let paragraphs: Vec<&str> = offer
        .description
        .lines()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if paragraphs.is_empty() {
        return;
    }
    w.push("        <div class=\"card about\"><div class=\"headline\">About ");
    w.text(&offer.brand);
    w.push("</div>\n");
    for p in paragraphs {
        w.push("            <p>");
        w.text(p);
        w.push("</p>\n");
    }
    w.push("        </div>\n");
}
