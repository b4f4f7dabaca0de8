// src/render/css.rs
use std::collections::BTreeSet;

use crate::config::tables::brand_gradient;
use crate::offer::Offer;

/// One `.brand-x { --brand-gradient: ...; }` rule per distinct class, sorted.
pub fn brand_css(offers: &[Offer]) -> String {
    let classes: BTreeSet<&str> = offers
        .iter()
        .map(|o| o.brand_class.as_str())
        // "brand-" alone is not a usable selector
        .filter(|c| c.len() > "brand-".len())
        .collect();

    let mut out = s!("/* Generated by offer_pages. Do not edit. */\n");
    for class in classes {
        out.push_str(&format!(".{} {{\n  --brand-gradient: {};\n}}\n", class, brand_gradient(class)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_class(class: &str) -> Offer {
        Offer { brand_class: s!(class), ..Offer::default() }
    }

    #[test]
    fn one_rule_per_distinct_class() {
        let offers = vec![with_class("brand-monzo"), with_class("brand-acme"), with_class("brand-monzo"), with_class("brand-")];
        let css = brand_css(&offers);
        assert_eq!(css.matches("--brand-gradient").count(), 2);
        assert!(css.contains(".brand-monzo {\n  --brand-gradient: linear-gradient(135deg, #ffe082 0%, #ff8a65 100%);\n}"));
        assert!(css.contains(".brand-acme {\n  --brand-gradient: linear-gradient(135deg, #fff, #f5f5f5 100%);\n}"));
        assert!(css.find(".brand-acme").unwrap() < css.find(".brand-monzo").unwrap());
    }
}
