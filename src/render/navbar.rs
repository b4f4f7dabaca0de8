// src/render/navbar.rs
use crate::config::options::OfferLayout;
use crate::config::tables::category_color;
use crate::core::Html;
use crate::group::CategoryGroup;

/// Hamburger toggle plus one dropdown per category, one link per offer.
pub fn navbar(groups: &[CategoryGroup<'_>], layout: OfferLayout) -> String {
    let mut w = Html::new();
    w.push("<nav class=\"navbar\">\n");
    w.push("  <button class=\"nav-hamburger\" aria-label=\"Open navigation\">&#9776;</button>\n");
    w.push("  <div class=\"navbar-links\" style=\"justify-content:center; width:100%; display:flex;\">\n");

    for group in groups {
        w.push("    <div class=\"nav-category\">\n");
        w.push("      <button type=\"button\" class=\"brand-nav-btn category-nav-btn\">");
        w.text(group.name);
        w.push("</button>\n");
        w.push("      <div class=\"nav-dropdown\"");
        w.attr("style", &join!("border: 2px solid ", category_color(group.name), ";"));
        w.push(">\n        <ul>\n");
        for offer in &group.offers {
            w.push("          <li><a");
            w.attr("href", &layout.href(&offer.slug));
            w.push(" class=\"navbar-link\">");
            w.text(&offer.brand);
            w.push("</a></li>\n");
        }
        w.push("        </ul>\n      </div>\n    </div>\n");
    }

    w.push("  </div>\n</nav>\n");
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::by_category;
    use crate::offer::Offer;

    fn offer(slug: &str, brand: &str, category: &str) -> Offer {
        Offer { slug: s!(slug), brand: s!(brand), category: s!(category), ..Offer::default() }
    }

    #[test]
    fn one_dropdown_per_category_in_order() {
        let offers = vec![
            offer("shein", "Shein", "Shopping"),
            offer("wise", "Wise", "Banking"),
            offer("monzo", "Monzo", "Banking"),
        ];
        let html = navbar(&by_category(&offers), OfferLayout::Directory);
        assert_eq!(html.matches("class=\"nav-category\"").count(), 2);
        let banking = html.find(">Banking<").unwrap();
        let shopping = html.find(">Shopping<").unwrap();
        assert!(banking < shopping);
        let monzo = html.find("href=\"/pages/offers/monzo/\"").unwrap();
        let wise = html.find("href=\"/pages/offers/wise/\"").unwrap();
        assert!(monzo < wise);
        assert!(html.contains("border: 2px solid #1a237e;"));
    }

    #[test]
    fn brand_names_are_escaped() {
        let offers = vec![offer("ab", "A&B <Co>", "Other")];
        let html = navbar(&by_category(&offers), OfferLayout::Flat);
        assert!(html.contains(">A&amp;B &lt;Co&gt;</a>"));
        assert!(html.contains("href=\"/pages/offers/ab.html\""));
    }
}
