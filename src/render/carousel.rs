// src/render/carousel.rs
//
// One coloured section per category. The first CAROUSEL_VISIBLE cards start
// visible; the client pager flips `visible`/`hidden` from there.
use crate::config::consts::CAROUSEL_VISIBLE;
use crate::config::options::OfferLayout;
use crate::config::tables::{category_color, category_gradient};
use crate::core::Html;
use crate::core::sanitize::category_class;
use crate::group::CategoryGroup;
use crate::offer::Offer;

use super::cta_class;

pub fn carousels(groups: &[CategoryGroup<'_>], layout: OfferLayout) -> String {
    let sections: Vec<String> = groups.iter().map(|g| section(g, layout)).collect();
    sections.join("\n")
}

fn section(group: &CategoryGroup<'_>, layout: OfferLayout) -> String {
    let color = category_color(group.name);
    let class = category_class(group.name);

    let mut w = Html::new();
    w.push("<div");
    w.attr("class", &join!("category-section ", &class));
    w.attr("style", &format!(
        "background: {}; border: 3px solid {}; position:relative;",
        category_gradient(group.name),
        color
    ));
    w.push(">\n  <div class=\"category-title\"");
    w.attr("style", &join!("color: ", color, ";"));
    w.push(">");
    w.text(group.name);
    w.push("</div>\n  <div class=\"offers-row\"");
    w.attr("id", &join!("offers-row-", &class));
    w.push(" style=\"display:flex; gap:24px; justify-content:center; align-items:stretch; position:relative;\">\n");

    if group.offers.len() > CAROUSEL_VISIBLE {
        chevrons(&mut w, color);
    }
    for (i, offer) in group.offers.iter().enumerate() {
        card(&mut w, offer, i < CAROUSEL_VISIBLE, color, layout);
    }

    w.push("  </div>\n</div>");
    w.finish()
}

fn chevrons(w: &mut Html, color: &str) {
    for (side, points) in [("left", "20,8 12,16 20,24"), ("right", "12,8 20,16 12,24")] {
        w.push("    <button");
        w.attr("class", &join!("scroll-btn ", side));
        w.attr("aria-label", &join!("Scroll ", side));
        w.attr("style", &format!("{}:0; color: {};", side, color));
        w.push(">\n      <svg width=\"32\" height=\"32\" viewBox=\"0 0 32 32\"><polygon");
        w.attr("points", points);
        w.push(" fill=\"currentColor\"/></svg>\n    </button>\n");
    }
}

fn card(w: &mut Html, offer: &Offer, visible: bool, color: &str, layout: OfferLayout) {
    let state = if visible { "visible" } else { "hidden" };
    w.push("    <div");
    w.attr("class", &format!("offer-card {} {}", offer.brand_class, state));
    w.attr("style", &join!("margin: 0 12px; --category-border: ", color, ";"));
    w.push(">\n");
    w.push("      ");
    w.element("div", "offer-title", &offer.brand);
    w.push("\n      ");
    w.element("div", "offer-desc", &offer.subheadline);
    w.push("\n      <a");
    w.attr("href", &layout.href(&offer.slug));
    w.attr("class", &cta_class(&offer.brand_class));
    w.push(">View ");
    w.text(&offer.brand);
    w.push(" Offer</a>\n    </div>\n");
}
