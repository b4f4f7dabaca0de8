// src/config/consts.rs

// Row source
pub const DEFAULT_INPUT_CSV: &str = "public/data/offers_sheet.csv";
pub const DEFAULT_CLEAN_CSV: &str = "public/data/offers_sheet_clean.csv";
pub const SHEET_URL: &str =
    "https://opensheet.vercel.app/12TFRklj6X_k5gfQVmyrpFpRvteW39IfyIJMiwBSBXxY/Offers";
pub const FETCH_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("offer_pages/", env!("CARGO_PKG_VERSION"));

// Output layout (relative to the public dir)
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const OFFERS_SUBDIR: &str = "pages/offers";
pub const PARTIALS_SUBDIR: &str = "partials";
pub const STYLES_SUBDIR: &str = "styles";
pub const MANIFEST_FILE: &str = "generated_offers.json";
pub const NAVBAR_FILE: &str = "navbar.html";
pub const CAROUSELS_FILE: &str = "carousels.html";
pub const BRAND_CSS_FILE: &str = "brand-colors.css";
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const PAGE_FILE: &str = "index.html";

// Site
pub const SITE_URL: &str = "https://www.globalreferraldirectory.com/";
pub const STATIC_PAGES: &[&str] = &["", "pages/information.html"];
pub const OFFERS_URL_PREFIX: &str = "/pages/offers/";
pub const STYLESHEET_HREF: &str = "/styles/styles.css";
pub const BRAND_CSS_HREF: &str = "/styles/brand-colors.css";

// Record defaults
pub const DEFAULT_CATEGORY: &str = "Other";
pub const DEFAULT_REFERRAL_LINK: &str = "#";

// Mini-card icons
pub const NUMBER_ICONS: &[&str] = &[
    "1\u{fe0f}\u{20e3}", "2\u{fe0f}\u{20e3}", "3\u{fe0f}\u{20e3}", "4\u{fe0f}\u{20e3}",
    "5\u{fe0f}\u{20e3}", "6\u{fe0f}\u{20e3}", "7\u{fe0f}\u{20e3}", "8\u{fe0f}\u{20e3}",
    "9\u{fe0f}\u{20e3}", "\u{1f51f}",
];
pub const WHY_ICON: &str = "\u{1f4a1}"; // 💡
pub const FEATURE_ICON: &str = "\u{2b50}"; // ⭐

// Carousel: cards visible before the client pager takes over
pub const CAROUSEL_VISIBLE: usize = 2;

// List padding (pad_csv)
pub const LIST_PAD_COUNTS: &[(&str, usize)] = &[
    ("How It Works", 3),
    ("Why Choose", 6),
    ("Features", 6),
];

// Favicon
pub const FAVICON_PNG: &str = "public/favicon.png";
pub const FAVICON_TRANSPARENT_PNG: &str = "public/favicon-transparent.png";
pub const FAVICON_ICO: &str = "public/favicon.ico";
pub const WHITE_THRESHOLD: u8 = 250;
pub const OPAQUE_THRESHOLD: u8 = 200;
pub const ICO_SIZES: &[u32] = &[16, 32, 48];

// Legacy extraction
pub const LEGACY_OFFERS_DIR: &str = "offers";
pub const EXTRACT_OUTPUT_CSV: &str = "offers_sheet.csv";
