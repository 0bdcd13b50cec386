//! Schema checklist coverage.

use std::collections::BTreeSet;

use super::extract::short_type_name;

/// True if any found type's last `/` segment equals `schema_type`, ignoring case.
pub fn schema_implemented(found: &BTreeSet<String>, schema_type: &str) -> bool {
    found
        .iter()
        .any(|name| short_type_name(name).eq_ignore_ascii_case(schema_type))
}

/// Each checklist label with whether it is implemented, in checklist order.
pub fn checklist_coverage(
    found: &BTreeSet<String>,
    checklist: &[(String, String)],
) -> Vec<(String, bool)> {
    checklist
        .iter()
        .map(|(label, schema_type)| (label.clone(), schema_implemented(found, schema_type)))
        .collect()
}

/// Checklist labels with no matching type on the site.
pub fn schema_opportunities(found: &BTreeSet<String>, checklist: &[(String, String)]) -> Vec<String> {
    checklist_coverage(found, checklist)
        .into_iter()
        .filter(|(_, implemented)| !implemented)
        .map(|(label, _)| label)
        .collect()
}
