// src/group.rs
use std::collections::BTreeMap;

use crate::offer::Offer;

/// Offers sharing one category, sorted by brand.
#[derive(Clone, Debug)]
pub struct CategoryGroup<'a> {
    pub name: &'a str,
    pub offers: Vec<&'a Offer>,
}

/// Partition by category. Groups come out in byte order of the name
/// (BTreeMap), members in byte order of the brand; ties keep input order.
pub fn by_category(offers: &[Offer]) -> Vec<CategoryGroup<'_>> {
    let mut groups: BTreeMap<&str, Vec<&Offer>> = BTreeMap::new();
    for offer in offers {
        groups.entry(offer.category.as_str()).or_default().push(offer);
    }

    groups
        .into_iter()
        .map(|(name, mut members)| {
            members.sort_by(|a, b| a.brand.cmp(&b.brand));
            CategoryGroup { name, offers: members }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(slug: &str, brand: &str, category: &str) -> Offer {
        Offer { slug: s!(slug), brand: s!(brand), category: s!(category), ..Offer::default() }
    }

    #[test]
    fn groups_and_members_are_sorted() {
        let offers = vec![
            offer("wise", "Wise", "Banking"),
            offer("shein", "Shein", "Shopping"),
            offer("monzo", "Monzo", "Banking"),
            offer("befrugal", "BeFrugal", "Cashback"),
        ];
        let groups = by_category(&offers);
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Banking", "Cashback", "Shopping"]);
        let banking: Vec<&str> = groups[0].offers.iter().map(|o| o.brand.as_str()).collect();
        assert_eq!(banking, vec!["Monzo", "Wise"]);
    }

    #[test]
    fn case_sensitive_order_and_stable_ties() {
        let offers = vec![
            offer("b", "Same", "media"),
            offer("a", "Same", "media"),
            offer("c", "Zed", "Media"),
        ];
        let groups = by_category(&offers);
        assert_eq!(groups[0].name, "Media");
        assert_eq!(groups[1].name, "media");
        let slugs: Vec<&str> = groups[1].offers.iter().map(|o| o.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(by_category(&[]).is_empty());
    }
}
