// src/config/tables.rs
//
// Fixed styling data. Lookups are linear; the tables are tiny.

/// Display name → brand class, for brands whose class is not a plain squash
/// of the name.
pub const BRAND_CLASSES: &[(&str, &str)] = &[
    ("Amazon Prime Video", "brand-amazonprimevideo"),
    ("Baremetrics", "brand-baremetrics"),
    ("BeFrugal", "brand-befrugal"),
    ("Cashback.co.uk", "brand-cashbackcouk"),
    ("EngageBay", "brand-engagebay"),
    ("giffgaff", "brand-giffgaff"),
    ("Monzo", "brand-monzo"),
    ("Monzo Bank", "brand-monzo"),
    ("SHEIN", "brand-shein"),
    ("Virgin Media", "brand-virgin"),
    ("Virgin Media O2", "brand-virgin"),
];

pub const BRAND_GRADIENTS: &[(&str, &str)] = &[
    ("brand-monzo", "linear-gradient(135deg, #ffe082 0%, #ff8a65 100%)"),
    ("brand-giffgaff", "linear-gradient(135deg, #fffde7 0%, #ffd600 100%)"),
    ("brand-virgin", "linear-gradient(135deg, #ffe3e3 0%, #d32f2f 100%)"),
    ("brand-shein", "linear-gradient(135deg, #fceabb 0%, #f8b500 100%)"),
    ("brand-amazonprimevideo", "linear-gradient(135deg, #e3f0ff 0%, #1976d2 100%)"),
    ("brand-baremetrics", "linear-gradient(135deg, #e3e3ff 0%, #7b1fa2 100%)"),
    ("brand-engagebay", "linear-gradient(135deg, #ffe3e3 0%, #b71c1c 100%)"),
    ("brand-befrugal", "linear-gradient(135deg, #e3fff3 0%, #009688 100%)"),
    ("brand-cashbackcouk", "linear-gradient(135deg, #e3fff3 0%, #009688 100%)"),
];

pub const DEFAULT_BRAND_GRADIENT: &str = "linear-gradient(135deg, #fff, #f5f5f5 100%)";

/// Border / header / chevron colour per category.
pub const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Banking", "#1a237e"),
    ("Business Tools", "#b71c1c"),
    ("Cashback", "#00695c"),
    ("Media", "#7b1fa2"),
    ("Networks", "#bfa600"),
    ("Shopping", "#e65100"),
    ("Other", "#444"),
];

pub const CATEGORY_GRADIENTS: &[(&str, &str)] = &[
    ("Banking", "linear-gradient(135deg, #e3f0ff 0%, #1976d2 100%)"),
    ("Business Tools", "linear-gradient(135deg, #ffe3e3 0%, #d32f2f 100%)"),
    ("Cashback", "linear-gradient(135deg, #e3fff3 0%, #009688 100%)"),
    ("Media", "linear-gradient(135deg, #f3e3ff 0%, #8e24aa 100%)"),
    ("Networks", "linear-gradient(135deg, #fffde3 0%, #ffd600 100%)"),
    ("Shopping", "linear-gradient(135deg, #ffe0b2 0%, #e65100 100%)"),
    ("Other", "linear-gradient(135deg, #f0f0f0 0%, #757575 100%)"),
];

const OTHER: &str = "Other";

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Exact-match lookup on the trimmed display name.
pub fn brand_class_for(name: &str) -> Option<&'static str> {
    lookup(BRAND_CLASSES, name.trim())
}

pub fn brand_gradient(class: &str) -> &'static str {
    lookup(BRAND_GRADIENTS, class).unwrap_or(DEFAULT_BRAND_GRADIENT)
}

/// Unknown categories get the `Other` colour.
pub fn category_color(category: &str) -> &'static str {
    lookup(CATEGORY_COLORS, category)
        .or_else(|| lookup(CATEGORY_COLORS, OTHER))
        .unwrap_or("#444")
}

pub fn category_gradient(category: &str) -> &'static str {
    lookup(CATEGORY_GRADIENTS, category)
        .or_else(|| lookup(CATEGORY_GRADIENTS, OTHER))
        .unwrap_or(DEFAULT_BRAND_GRADIENT)
}
