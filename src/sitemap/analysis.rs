//! Frequency counts over classified sitemap URLs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::OTHER_CATEGORY;

use super::classify::UrlClassifier;

/// One discovered URL with its classification, as exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedUrl {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Language")]
    pub language: String,
    /// Category label, or "Other"
    #[serde(rename = "Category")]
    pub category: String,
}

/// Language and category breakdown of a site's sitemap URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SitemapAnalysis {
    /// Categorized URLs only; "Other" is not counted here
    pub category_counts: BTreeMap<String, usize>,
    /// Every URL has a language, so these sum to the URL count
    pub language_counts: BTreeMap<String, usize>,
    pub urls: Vec<ClassifiedUrl>,
}

impl SitemapAnalysis {
    pub fn total_urls(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Language counts, most frequent first (ties by code).
    pub fn languages_by_frequency(&self) -> Vec<(&str, usize)> {
        by_frequency(&self.language_counts)
    }

    /// Category counts, most frequent first (ties by label).
    pub fn categories_by_frequency(&self) -> Vec<(&str, usize)> {
        by_frequency(&self.category_counts)
    }
}

fn by_frequency(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut sorted: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    sorted
}

/// Classifies every URL and counts languages and categories.
pub fn analyze_sitemap_categories<'a, I>(urls: I, classifier: &UrlClassifier) -> SitemapAnalysis
where
    I: IntoIterator<Item = &'a String>,
{
    let mut analysis = SitemapAnalysis::default();
    for url in urls {
        let classification = classifier.classify(url);
        if let Some(category) = &classification.category {
            *analysis.category_counts.entry(category.clone()).or_insert(0) += 1;
        }
        *analysis
            .language_counts
            .entry(classification.language.clone())
            .or_insert(0) += 1;
        analysis.urls.push(ClassifiedUrl {
            url: url.clone(),
            language: classification.language,
            category: classification
                .category
                .unwrap_or_else(|| OTHER_CATEGORY.to_string()),
        });
    }
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_other_category() {
        let urls: Vec<String> = vec![
            "https://example.com/en/blog/a".into(),
            "https://example.com/en/blog/b".into(),
            "https://example.fr/contact".into(),
            "https://example.com/widgets".into(),
        ];
        let analysis = analyze_sitemap_categories(&urls, &UrlClassifier::default());

        assert_eq!(analysis.total_urls(), 4);
        assert_eq!(analysis.language_counts["en"], 3);
        assert_eq!(analysis.language_counts["fr"], 1);
        assert_eq!(analysis.category_counts["blogs"], 2);
        assert_eq!(analysis.category_counts["contact"], 1);
        assert!(!analysis.category_counts.contains_key("Other"));
        assert_eq!(analysis.urls[3].category, "Other");
        assert_eq!(analysis.languages_by_frequency()[0], ("en", 3));
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze_sitemap_categories(&Vec::<String>::new(), &UrlClassifier::default());
        assert!(analysis.is_empty());
    }
}
