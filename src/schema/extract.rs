//! Schema markup extraction.
//!
//! This module extracts structured data type names from HTML documents:
//! - JSON-LD (script type="application/ld+json"), including `@graph` wrappers
//! - Microdata (top-level `itemscope` elements with `itemtype`)
//! - RDFa (`typeof`, expanded against the nearest `vocab`)

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::utils::parse_selector_with_fallback;

const JSON_LD_PATTERN: &str =
    r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#;
const MICRODATA_SELECTOR_STR: &str = "[itemscope][itemtype]:not([itemprop])";
const RDFA_SELECTOR_STR: &str = "[typeof]";

static JSON_LD_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(JSON_LD_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("Failed to compile JSON-LD pattern: {e}");
        None
    }
});
static MICRODATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(MICRODATA_SELECTOR_STR, "microdata extraction"));
static RDFA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(RDFA_SELECTOR_STR, "RDFa extraction"));

/// Structured data found on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedSchemas {
    /// One parsed value per JSON-LD block (objects or arrays, as written)
    pub json_ld: Vec<Value>,
    /// `itemtype` values of top-level microdata items
    pub microdata_types: Vec<String>,
    /// `typeof` values, vocabulary-expanded where a `vocab` is in scope
    pub rdfa_types: Vec<String>,
}

impl ExtractedSchemas {
    pub fn is_empty(&self) -> bool {
        self.json_ld.is_empty() && self.microdata_types.is_empty() && self.rdfa_types.is_empty()
    }

    /// Distinct type names across all three syntaxes, as written in the page.
    pub fn type_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for value in &self.json_ld {
            for item in flatten_schema(value) {
                if let Some(types) = item.get("@type") {
                    collect_type_values(types, &mut names);
                }
            }
        }
        names.extend(self.microdata_types.iter().cloned());
        names.extend(self.rdfa_types.iter().cloned());
        names
    }
}

/// Extracts JSON-LD, microdata and RDFa from an HTML body.
pub fn extract_schemas(html: &str) -> ExtractedSchemas {
    let json_ld = extract_json_ld(html);

    let document = Html::parse_document(html);
    let microdata_types = document
        .select(&MICRODATA_SELECTOR)
        .filter_map(|el| el.value().attr("itemtype"))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect();

    let rdfa_types = document
        .select(&RDFA_SELECTOR)
        .flat_map(|el| {
            let vocab = nearest_vocab(&el);
            el.value()
                .attr("typeof")
                .unwrap_or_default()
                .split_whitespace()
                .map(move |t| expand_rdfa_type(t, vocab))
                .collect::<Vec<_>>()
        })
        .collect();

    ExtractedSchemas {
        json_ld,
        microdata_types,
        rdfa_types,
    }
}

/// Parses every `application/ld+json` block; unparseable blocks are skipped.
fn extract_json_ld(html: &str) -> Vec<Value> {
    let Some(re) = JSON_LD_RE.as_ref() else {
        return Vec::new();
    };
    re.captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .filter_map(|content| {
            let json_str = content.as_str().trim();
            match serde_json::from_str::<Value>(json_str) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::debug!("Skipping invalid JSON-LD block: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Every object reachable through arrays and `@graph` members.
///
/// An object holding `@graph` is yielded after its members.
pub fn flatten_schema(value: &Value) -> Vec<&Map<String, Value>> {
    let mut out = Vec::new();
    flatten_into(value, &mut out);
    out
}

fn flatten_into<'a>(value: &'a Value, out: &mut Vec<&'a Map<String, Value>>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        Value::Object(map) => {
            if let Some(graph) = map.get("@graph") {
                flatten_into(graph, out);
            }
            out.push(map);
        }
        _ => {}
    }
}

fn collect_type_values(types: &Value, names: &mut BTreeSet<String>) {
    match types {
        Value::String(t) => {
            names.insert(t.clone());
        }
        Value::Array(items) => {
            for t in items.iter().filter_map(Value::as_str) {
                names.insert(t.to_string());
            }
        }
        _ => {}
    }
}

fn nearest_vocab<'a>(el: &ElementRef<'a>) -> Option<&'a str> {
    std::iter::once(*el)
        .chain(el.ancestors().filter_map(ElementRef::wrap))
        .find_map(|e| e.value().attr("vocab"))
}

fn expand_rdfa_type(t: &str, vocab: Option<&str>) -> String {
    match vocab {
        Some(vocab) if !t.contains(':') => format!("{vocab}{t}"),
        _ => t.to_string(),
    }
}

/// Last `/`-separated segment of a type name, e.g. `http://schema.org/Article` to `Article`.
pub fn short_type_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
