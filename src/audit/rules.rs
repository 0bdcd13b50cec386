//! Column rules over the crawl table.
//!
//! Each function answers one question about one or two columns. Missing
//! cells follow spreadsheet semantics: a missing value never equals
//! anything, yet all missing values count as one repeated value when
//! looking for duplicates.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::input::Table;

pub const ADDRESS: &str = "Address";
pub const STATUS_CODE: &str = "Status Code";
pub const CANONICAL: &str = "Canonical Link Element 1";
pub const INDEXABILITY: &str = "Indexability";
pub const INDEXABILITY_STATUS: &str = "Indexability Status";
pub const TITLE: &str = "Title 1";
pub const TITLE_LENGTH: &str = "Title 1 Length";
pub const H1: &str = "H1-1";
pub const META_DESCRIPTION: &str = "Meta Description 1";
pub const WORD_COUNT: &str = "Word Count";
pub const SENTENCE_COUNT: &str = "Sentence Count";

const NON_PAGE_PATTERN: &str = r"(?i)\.(jpg|jpeg|png|gif|bmp|pdf|doc|docx|xls|xlsx|css|js)$";

static NON_PAGE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(NON_PAGE_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("Failed to compile non-page URL pattern: {e}");
        None
    }
});

/// False for image/document/stylesheet/script URLs and WordPress upload paths.
pub fn is_valid_page_url(url: &str) -> bool {
    if NON_PAGE_RE.as_ref().is_some_and(|re| re.is_match(url)) {
        return false;
    }
    let lower = url.to_lowercase();
    !(lower.contains("wp-content") || lower.contains("wp-uploads"))
}

fn is_numeric(cell: &str, target: f64) -> bool {
    cell.trim().parse::<f64>().is_ok_and(|v| v == target)
}

/// Rows whose status code is 404.
pub fn broken_internal_links(table: &Table) -> Option<usize> {
    let codes = table.column(STATUS_CODE)?;
    Some(
        codes
            .iter()
            .filter(|c| c.is_some_and(|c| is_numeric(c, 404.0)))
            .count(),
    )
}

/// Rows whose canonical differs from their own address.
pub fn canonical_errors(table: &Table) -> Option<usize> {
    let canonicals = table.column(CANONICAL)?;
    let addresses = table.column(ADDRESS)?;
    Some(
        canonicals
            .iter()
            .zip(addresses.iter())
            .filter(|(canonical, address)| match (canonical, address) {
                (Some(c), Some(a)) => c != a,
                _ => true,
            })
            .count(),
    )
}

/// (indexable, noindex) counts; requires both indexability columns.
pub fn indexability_counts(table: &Table) -> Option<(usize, usize)> {
    let indexability = table.column(INDEXABILITY)?;
    let status = table.column(INDEXABILITY_STATUS)?;
    let indexed = indexability
        .iter()
        .filter(|v| **v == Some("Indexable"))
        .count();
    let non_indexed = status
        .iter()
        .filter(|v| v.is_some_and(|s| s.contains("noindex")))
        .count();
    Some((indexed, non_indexed))
}

/// Marks each value that occurs more than once. Missing values compare equal to each other.
pub fn duplicated_mask<T: Eq + std::hash::Hash>(values: &[T]) -> Vec<bool> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    values
        .iter()
        .map(|v| counts.get(v).copied().unwrap_or(0) > 1)
        .collect()
}

/// Missing and duplicate rows of one text column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnQuality {
    pub missing: usize,
    pub duplicate: usize,
    /// Row indices that are missing or duplicated
    pub flagged_rows: Vec<usize>,
    /// Row indices that are duplicated
    pub duplicate_rows: Vec<usize>,
}

impl ColumnQuality {
    pub fn has_issues(&self) -> bool {
        self.missing > 0 || self.duplicate > 0
    }

    pub fn summary(&self) -> String {
        format!("Missing: {}, Duplicate: {}", self.missing, self.duplicate)
    }
}

/// Missing count and duplicate count; missing values take part in duplicate detection.
pub fn column_quality(table: &Table, column: &str) -> Option<ColumnQuality> {
    let values = table.column(column)?;
    let mask = duplicated_mask(&values);
    let duplicate_rows: Vec<usize> = (0..values.len()).filter(|&i| mask[i]).collect();
    let flagged_rows = (0..values.len())
        .filter(|&i| values[i].is_none() || mask[i])
        .collect();
    Some(ColumnQuality {
        missing: values.iter().filter(|v| v.is_none()).count(),
        duplicate: duplicate_rows.len(),
        flagged_rows,
        duplicate_rows,
    })
}

/// Like [`column_quality`], but duplicates are found only among present values.
pub fn title_quality(table: &Table, column: &str) -> Option<ColumnQuality> {
    let values = table.column(column)?;
    let present: Vec<(usize, &str)> = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.filter(|s| !s.is_empty()).map(|s| (i, s)))
        .collect();
    let texts: Vec<&str> = present.iter().map(|(_, s)| *s).collect();
    let mask = duplicated_mask(&texts);
    let duplicate_rows: Vec<usize> = present
        .iter()
        .zip(mask)
        .filter(|(_, dup)| *dup)
        .map(|((i, _), _)| *i)
        .collect();
    let missing_rows: Vec<usize> = (0..values.len()).filter(|&i| values[i].is_none()).collect();
    let mut flagged_rows: Vec<usize> = missing_rows.iter().chain(&duplicate_rows).copied().collect();
    flagged_rows.sort_unstable();
    Some(ColumnQuality {
        missing: missing_rows.len(),
        duplicate: duplicate_rows.len(),
        flagged_rows,
        duplicate_rows,
    })
}

fn numeric_key(cell: &str) -> String {
    match cell.trim().parse::<f64>() {
        Ok(v) => format!("{v}"),
        Err(_) => cell.to_string(),
    }
}

/// Rows sharing a (word count, sentence count) pair with another row.
///
/// Rows missing either value are excluded; `None` when either column is absent.
pub fn duplicate_content_rows(table: &Table) -> Option<Vec<usize>> {
    let words = table.column(WORD_COUNT)?;
    let sentences = table.column(SENTENCE_COUNT)?;
    let complete: Vec<(usize, (String, String))> = words
        .iter()
        .zip(sentences.iter())
        .enumerate()
        .filter_map(|(i, pair)| match pair {
            (Some(w), Some(s)) => Some((i, (numeric_key(w), numeric_key(s)))),
            _ => None,
        })
        .collect();
    let keys: Vec<&(String, String)> = complete.iter().map(|(_, k)| k).collect();
    let mask = duplicated_mask(&keys);
    Some(
        complete
            .iter()
            .zip(mask)
            .filter(|(_, dup)| *dup)
            .map(|((i, _), _)| *i)
            .collect(),
    )
}
