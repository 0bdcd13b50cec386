//! The fixed rule table: every report row in order, with its category,
//! expected value and data source.

use strum_macros::EnumIter;

pub const PERFORMANCE: &str = "Performance & Core Web Vitals";
pub const CRAWLING: &str = "Crawling & Indexing";
pub const SITE_HEALTH: &str = "Site Health & Structure";
pub const LINK_PROFILE: &str = "Link Profile & Authority";
pub const METADATA: &str = "Metadata & Schema";

const MINIMAL_ISSUES: &str = "Minimal or no pages with issues";

/// One report metric. Iteration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Metric {
    DesktopPerformance,
    MobilePerformance,
    DesktopCoreWebVitals,
    MobileCoreWebVitals,
    AccessibilityScore,
    SeoScore,
    MobileFriendliness,
    IndexedPages,
    NonIndexedPages,
    RobotsTxt,
    SitemapFile,
    BrokenInternalLinks,
    BrokenExternalLinks,
    BrokenBacklinks,
    BrokenImages,
    OrphanPages,
    CanonicalErrors,
    InformationArchitecture,
    HeaderTagsStructure,
    Backlinks,
    DomainAuthority,
    SpamScore,
    DuplicateContent,
    ImgAltTag,
    DuplicateMissingH1,
    DuplicateMissingTitle,
    DuplicateMissingDescription,
    SchemaMarkup,
}

impl Metric {
    /// The "Parameters" label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::DesktopPerformance => "Website performance on desktop",
            Metric::MobilePerformance => "Website performance on mobile",
            Metric::DesktopCoreWebVitals => "Core Web Vitals on desktop",
            Metric::MobileCoreWebVitals => "Core Web Vitals on mobile",
            Metric::AccessibilityScore => "Accessibility Score",
            Metric::SeoScore => "SEO Score",
            Metric::MobileFriendliness => "Mobile friendliness",
            Metric::IndexedPages => "Indexed pages",
            Metric::NonIndexedPages => "Non indexed pages",
            Metric::RobotsTxt => "Robots.txt file optimization",
            Metric::SitemapFile => "Sitemap file optimization",
            Metric::BrokenInternalLinks => "Broken internal links (404)",
            Metric::BrokenExternalLinks => "Broken external links",
            Metric::BrokenBacklinks => "Broken backlinks",
            Metric::BrokenImages => "Broken Images",
            Metric::OrphanPages => "Orphan page",
            Metric::CanonicalErrors => "Canonical Errors",
            Metric::InformationArchitecture => "Information architecture",
            Metric::HeaderTagsStructure => "Header tags structure",
            Metric::Backlinks => "Backlinks",
            Metric::DomainAuthority => "Domain authority",
            Metric::SpamScore => "Spam Score",
            Metric::DuplicateContent => "Duplicate content",
            Metric::ImgAltTag => "Img alt tag",
            Metric::DuplicateMissingH1 => "Duplicate & missing H1",
            Metric::DuplicateMissingTitle => "Duplicate & missing meta title",
            Metric::DuplicateMissingDescription => "Duplicate & missing description",
            Metric::SchemaMarkup => "Schema Markup",
        }
    }

    pub fn category(&self) -> &'static str {
        use Metric::*;
        match self {
            DesktopPerformance | MobilePerformance | DesktopCoreWebVitals | MobileCoreWebVitals
            | AccessibilityScore | SeoScore | MobileFriendliness => PERFORMANCE,
            IndexedPages | NonIndexedPages | RobotsTxt | SitemapFile => CRAWLING,
            BrokenInternalLinks | BrokenExternalLinks | BrokenBacklinks | BrokenImages
            | OrphanPages | CanonicalErrors | InformationArchitecture | HeaderTagsStructure => {
                SITE_HEALTH
            }
            Backlinks | DomainAuthority | SpamScore => LINK_PROFILE,
            DuplicateContent | ImgAltTag | DuplicateMissingH1 | DuplicateMissingTitle
            | DuplicateMissingDescription | SchemaMarkup => METADATA,
        }
    }

    pub fn expected(&self) -> &'static str {
        match self {
            Metric::DesktopPerformance => "Score > 90",
            Metric::MobilePerformance => "Score > 80",
            Metric::DesktopCoreWebVitals | Metric::MobileCoreWebVitals => "Pass",
            Metric::AccessibilityScore | Metric::SeoScore => "Score > 90",
            Metric::MobileFriendliness => "Pass",
            Metric::IndexedPages => "All active pages are indexed",
            Metric::NonIndexedPages => {
                "No active pages are in no index state.\nMinimal or no indexed pages"
            }
            Metric::RobotsTxt => "Optimized",
            Metric::SitemapFile => "All active website URLs are part of sitemap",
            Metric::BrokenInternalLinks | Metric::BrokenExternalLinks => "0 broken links",
            Metric::BrokenBacklinks => "0 broken backlinks",
            Metric::BrokenImages => "0 broken Images",
            Metric::OrphanPages => "No orphan page",
            Metric::CanonicalErrors => "No page with canonical error",
            Metric::InformationArchitecture => {
                "Site structure & navigation is well defined & easy to understand"
            }
            Metric::HeaderTagsStructure => "Content structure is well-defined and easy to understand",
            Metric::Backlinks => "No of backlinks",
            Metric::DomainAuthority => "DA >70",
            Metric::SpamScore => "Score <5",
            Metric::DuplicateContent
            | Metric::ImgAltTag
            | Metric::DuplicateMissingH1
            | Metric::DuplicateMissingTitle
            | Metric::DuplicateMissingDescription => MINIMAL_ISSUES,
            Metric::SchemaMarkup => "Schema implementation opportunities",
        }
    }

    /// Where the number would come from.
    pub fn source(&self) -> &'static str {
        use Metric::*;
        match self {
            DesktopPerformance | MobilePerformance | DesktopCoreWebVitals | MobileCoreWebVitals
            | AccessibilityScore | SeoScore => "Pagespeedinsights",
            MobileFriendliness | RobotsTxt | SitemapFile | BrokenImages | HeaderTagsStructure => {
                "Manual"
            }
            IndexedPages | NonIndexedPages => "Google search console",
            BrokenExternalLinks | BrokenBacklinks | InformationArchitecture | Backlinks => "Ahrefs",
            DomainAuthority | SpamScore => "Moz",
            BrokenInternalLinks | OrphanPages | CanonicalErrors | DuplicateContent | ImgAltTag
            | DuplicateMissingH1 | DuplicateMissingTitle | DuplicateMissingDescription => {
                "Screaming frog"
            }
            SchemaMarkup => "Automated Schema Detection",
        }
    }

    /// Metrics no input supplies; always "N/A" / Not Available.
    pub fn is_placeholder(&self) -> bool {
        use Metric::*;
        matches!(
            self,
            DesktopPerformance
                | MobilePerformance
                | DesktopCoreWebVitals
                | MobileCoreWebVitals
                | AccessibilityScore
                | SeoScore
                | MobileFriendliness
                | BrokenExternalLinks
                | BrokenBacklinks
                | BrokenImages
                | InformationArchitecture
                | HeaderTagsStructure
                | Backlinks
                | DomainAuthority
                | SpamScore
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_report_has_28_metrics_in_category_blocks() {
        let metrics: Vec<Metric> = Metric::iter().collect();
        assert_eq!(metrics.len(), 28);
        assert_eq!(metrics[0].category(), PERFORMANCE);
        assert_eq!(metrics[7].label(), "Indexed pages");
        assert_eq!(metrics[27], Metric::SchemaMarkup);

        // Categories never interleave
        let mut seen: Vec<&str> = Vec::new();
        for m in &metrics {
            if seen.last() != Some(&m.category()) {
                assert!(!seen.contains(&m.category()));
                seen.push(m.category());
            }
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_placeholder_count() {
        assert_eq!(Metric::iter().filter(Metric::is_placeholder).count(), 15);
    }
}
