//! URL language and category classification.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use url::Url;

use crate::config::ClassifierConfig;

const LANG_QUERY_PATTERN: &str = r"(?:^|&)lang=([a-zA-Z]{2})";

static LANG_QUERY_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(LANG_QUERY_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("Failed to compile lang query pattern: {e}");
        None
    }
});

/// Language and optional category of one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub language: String,
    /// `None` when no category token matched
    pub category: Option<String>,
}

/// Classifier with its regex tables compiled once.
///
/// Rules apply in this order and later rules only fill what is still unset:
/// 1. hostname override regexes on the whole URL
/// 2. country-code TLD suffix on the hostname
/// 3. language tokens equal to a path segment; once 1 or 2 matched, only the
///    first language table entry (`en` by default) may replace it
/// 4. category tokens equal to a path segment
/// 5. `lang=xx` query parameter, if `xx` is a known language
/// 6. product-specific regexes
/// 7. the default language
#[derive(Debug, Clone)]
pub struct UrlClassifier {
    hostname_overrides: Vec<(String, Vec<Regex>)>,
    country_tlds: Vec<(String, String)>,
    language_tokens: Vec<(String, Vec<String>)>,
    category_tokens: Vec<(String, Vec<String>)>,
    product_patterns: Vec<(String, Vec<Regex>)>,
    default_language: String,
}

impl UrlClassifier {
    /// Compiles the pattern tables. Patterns that fail to compile are logged and dropped.
    pub fn new(config: &ClassifierConfig) -> Self {
        UrlClassifier {
            hostname_overrides: compile_table(&config.hostname_overrides),
            country_tlds: config
                .country_tlds
                .iter()
                .map(|(tld, lang)| (tld.to_lowercase(), lang.clone()))
                .collect(),
            language_tokens: config.language_tokens.clone(),
            category_tokens: config.category_tokens.clone(),
            product_patterns: compile_table(&config.product_patterns),
            default_language: config.default_language.clone(),
        }
    }

    pub fn classify(&self, url: &str) -> Classification {
        let parsed = Url::parse(url).ok();
        let path = parsed
            .as_ref()
            .map(|u| u.path().to_lowercase())
            .unwrap_or_default();
        let hostname = parsed
            .as_ref()
            .and_then(|u| u.host_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let query = parsed.as_ref().and_then(|u| u.query()).unwrap_or_default();
        let segments: Vec<&str> = path.split('/').collect();

        let mut language = first_regex_match(&self.hostname_overrides, url);

        if language.is_none() {
            language = self
                .country_tlds
                .iter()
                .find(|(tld, _)| hostname.ends_with(tld.as_str()))
                .map(|(_, lang)| lang.clone());
        }

        let path_language = if language.is_some() {
            let first = self.language_tokens.first().map(std::slice::from_ref).unwrap_or_default();
            first_token_match(first, &segments)
        } else {
            first_token_match(&self.language_tokens, &segments)
        };
        if path_language.is_some() {
            language = path_language;
        }

        let category = first_token_match(&self.category_tokens, &segments);

        if language.is_none() && !query.is_empty() {
            language = self.query_language(query);
        }

        if language.is_none() {
            language = first_regex_match(&self.product_patterns, url);
        }

        Classification {
            language: language.unwrap_or_else(|| self.default_language.clone()),
            category,
        }
    }

    fn query_language(&self, query: &str) -> Option<String> {
        let re = LANG_QUERY_RE.as_ref()?;
        let code = re.captures(query)?.get(1)?.as_str().to_lowercase();
        self.language_tokens
            .iter()
            .any(|(lang, _)| *lang == code)
            .then_some(code)
    }
}

impl Default for UrlClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

fn compile_table(table: &[(String, Vec<String>)]) -> Vec<(String, Vec<Regex>)> {
    table
        .iter()
        .map(|(key, patterns)| {
            let compiled = patterns
                .iter()
                .filter_map(|p| match RegexBuilder::new(p).case_insensitive(true).build() {
                    Ok(re) => Some(re),
                    Err(e) => {
                        log::error!("Dropping invalid classifier pattern '{p}': {e}");
                        None
                    }
                })
                .collect();
            (key.clone(), compiled)
        })
        .collect()
}

fn first_regex_match(table: &[(String, Vec<Regex>)], url: &str) -> Option<String> {
    table
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(url)))
        .map(|(key, _)| key.clone())
}

fn first_token_match(table: &[(String, Vec<String>)], segments: &[&str]) -> Option<String> {
    table
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|t| segments.contains(&t.as_str())))
        .map(|(key, _)| key.clone())
}
