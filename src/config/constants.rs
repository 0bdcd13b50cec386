//! Configuration constants.
//!
//! Built-in defaults for every injected configuration struct. Nothing in the
//! library reads these directly except the `Default` implementations in
//! `config::types`, so callers can always substitute their own tables.

use std::time::Duration;

/// Default User-Agent for the header fetcher.
pub const DEFAULT_HEADER_USER_AGENT: &str = "SEOHeaderAnalyzer/1.0";

/// Browser-like User-Agent used for schema probing and robots/sitemap presence checks.
pub const DEFAULT_BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.4472.124 Safari/537.36";

/// User-Agent sent when fetching sitemap files.
pub const DEFAULT_SITEMAP_USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout for header fetching.
pub const HEADER_FETCH_TIMEOUT: Duration = Duration::from_secs(20);
/// Default header-fetch worker count.
pub const DEFAULT_HEADER_WORKERS: usize = 5;
/// Worker count bounds exposed by the CLI.
pub const MIN_HEADER_WORKERS: usize = 1;
pub const MAX_HEADER_WORKERS: usize = 20;

/// Per-request timeout for schema probing.
pub const SCHEMA_REQUEST_TIMEOUT: Duration = Duration::from_secs(8);
/// Extra time allowed on top of the request timeout before a probe task is abandoned.
pub const SCHEMA_TASK_GRACE: Duration = Duration::from_secs(2);
pub const DEFAULT_SCHEMA_WORKERS: usize = 10;

/// Per-request timeout for sitemap fetches.
pub const SITEMAP_TIMEOUT: Duration = Duration::from_secs(10);
/// Nested sitemap-index depth limit; the visited set already prevents cycles.
pub const SITEMAP_MAX_DEPTH: usize = 8;

/// Timeout for the robots.txt / sitemap.xml presence checks.
pub const PRESENCE_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Log a progress line every this many completed fetches.
pub const LOGGING_INTERVAL: usize = 5;

/// Maximum URL length accepted from input files.
pub const MAX_URL_LENGTH: usize = 2048;

/// Sentinels used by the header fetcher.
pub const NO_TITLE_FOUND: &str = "No Title Found";
pub const NO_META_DESCRIPTION_FOUND: &str = "No Meta Description Found";

/// Placeholder shown for metrics with no data source.
pub const NOT_AVAILABLE_VALUE: &str = "N/A";

/// Schema probe path suffixes, relative to the site root. The empty suffix probes the home page.
pub const SCHEMA_PROBE_PATHS: &[&str] = &[
    "",
    "/about",
    "/about-us",
    "/products",
    "/services",
    "/solutions",
    "/blog",
    "/blogs",
    "/cyberglossary",
    "/news",
    "/resources",
    "/how-to",
    "/tutorials",
    "/guides",
    "/faq",
    "/help",
    "/support",
    "/contact",
    "/contact-us",
    "/reviews",
    "/testimonials",
    "/portfolio",
    "/cases",
    "/case-studies",
    "/team",
    "/careers",
    "/jobs",
    "/catalog",
    "/pricing",
    "/plans",
    "/login",
    "/signup",
    "/register",
    "/resources/cyberglossary",
];

/// Schema types worth implementing, as (display label, schema.org type).
pub const SCHEMA_CHECKLIST: &[(&str, &str)] = &[
    ("Breadcrumbs", "BreadcrumbList"),
    ("FAQ", "FAQPage"),
    ("Article", "Article"),
    ("Video", "VideoObject"),
    ("Organization", "Organization"),
    ("How-to", "HowTo"),
    ("WebPage", "WebPage"),
    ("Product", "Product"),
    ("Review", "Review"),
    ("Person", "Person"),
    ("Event", "Event"),
    ("Recipe", "Recipe"),
    ("LocalBusiness", "LocalBusiness"),
    ("CreativeWork", "CreativeWork"),
    ("ItemList", "ItemList"),
    ("JobPosting", "JobPosting"),
    ("Course", "Course"),
    ("ImageObject", "ImageObject"),
    ("Service", "Service"),
];

/// Conventional sitemap locations, tried in order.
pub const SITEMAP_PATHS: &[&str] = &[
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/sitemap-1.xml",
    "/sitemaps/sitemap.xml",
    "/sitemaps/sitemap_index.xml",
];

/// `<loc>` entries ending in one of these are images, not pages.
pub const SITEMAP_IMAGE_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".webp", ".svg", ".tiff", ".ico",
];

/// Regex patterns matched against the whole URL before anything else.
pub const HOSTNAME_LANGUAGE_OVERRIDES: &[(&str, &[&str])] = &[
    ("zh", &[r"teamviewer\.cn", r"teamviewer\.com\.cn"]),
    ("ja", &[r"teamviewer\.com/ja"]),
    ("it", &[r"teamviewer\.com/it"]),
    ("es", &[r"teamviewer\.com/latam"]),
];

/// Country-code top-level domains and the language they imply.
pub const COUNTRY_TLD_LANGUAGES: &[(&str, &str)] = &[
    (".cn", "zh"),
    (".jp", "ja"),
    (".kr", "ko"),
    (".tw", "zh"),
    (".hk", "zh"),
    (".it", "it"),
    (".es", "es"),
    (".fr", "fr"),
    (".de", "de"),
    (".pt", "pt"),
    (".nl", "nl"),
    (".pl", "pl"),
    (".se", "sv"),
    (".no", "no"),
    (".fi", "fi"),
    (".dk", "da"),
    (".cz", "cs"),
    (".hu", "hu"),
    (".ro", "ro"),
    (".hr", "hr"),
    (".rs", "sr"),
    (".bg", "bg"),
    (".sk", "sk"),
    (".si", "sl"),
];

/// Path segments that identify a language. A segment must equal a token exactly.
pub const LANGUAGE_PATH_TOKENS: &[(&str, &[&str])] = &[
    ("en", &["en", "en-", "english", "us", "uk", "au", "international"]),
    ("it", &["it", "it-", "italiano", "italian", "ch"]),
    (
        "es",
        &["es", "es-", "espanol", "spanish", "mx", "cl", "co", "latam"],
    ),
    ("fr", &["fr", "fr-", "french", "ca", "ch", "be"]),
    ("de", &["de", "de-", "deutsch", "german", "at", "ch"]),
    ("pt", &["pt", "pt-", "portuguese", "br", "pt", "ao"]),
    ("ru", &["ru", "ru-", "russian", "by", "kz"]),
    ("nl", &["nl", "nl-", "dutch", "netherlands"]),
    ("vi", &["vi", "vi-", "vietnamese"]),
    ("pl", &["pl", "pl-", "polish"]),
    ("hu", &["hu", "hu-", "hungarian"]),
    ("tr", &["tr", "tr-", "turkish"]),
    ("th", &["th", "th-", "thai"]),
    ("cs", &["cs", "cs-", "czech"]),
    ("el", &["el", "el-", "greek"]),
    ("ja", &["ja", "ja-", "japanese", "jp"]),
    (
        "zh",
        &[
            "zh", "zh-", "zhs", "chinese", "cn", "hk", "tw", "zh-cn", "zh-tw", "zh-hk", "zht",
        ],
    ),
    ("ko", &["ko", "ko-", "korean", "kr"]),
    ("ar", &["ar", "ar-", "arabic", "sa", "ae"]),
];

/// Path segments that identify a content category.
pub const CATEGORY_PATH_TOKENS: &[(&str, &[&str])] = &[
    ("blogs", &["blogs", "blogs-", "en/blogs", "blog", "insights"]),
    (
        "corporate",
        &["corporate", "corporate-", "en/corporate", "corp"],
    ),
    ("how-to", &["how-to", "how-to-", "en/how-to", "howto"]),
    ("products", &["products", "products-"]),
    ("resources", &["resources", "resources-"]),
    ("company", &["company", "company-"]),
    ("partners", &["partners", "partners-"]),
    ("solutions", &["solutions", "solutions-"]),
    ("support", &["support", "help", "faq"]),
    ("about", &["about", "about-us"]),
    ("contact", &["contact", "contact-us"]),
    ("news", &["news", "press"]),
    ("careers", &["careers", "jobs"]),
    ("legal", &["legal", "privacy", "terms"]),
];

/// Product-specific regex patterns, consulted only when nothing else set a language.
pub const PRODUCT_LANGUAGE_PATTERNS: &[(&str, &[&str])] = &[
    ("es", &[r"/distribucion-de-licencias-tensor"]),
    ("zh", &[r"/anydesk\.com/zhs/solutions/"]),
];

/// Language assumed when nothing matches.
pub const DEFAULT_LANGUAGE: &str = "en";
/// Category label exported for URLs with no category match.
pub const OTHER_CATEGORY: &str = "Other";

/// Default files read by `POST /analyze/default`, relative to the data directory.
pub const DEFAULT_CRAWL_FILE: &str = "internal_html.csv";
pub const DEFAULT_ALT_TEXT_FILE: &str = "images_missing_alt_text.csv";
pub const DEFAULT_ORPHAN_FILE: &str = "orphan_urls.csv";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
