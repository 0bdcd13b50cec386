//! Schema markup detection.
//!
//! Extraction of JSON-LD, microdata and RDFa type names from a page, the
//! site-wide probe over common paths, and checklist coverage.

mod checklist;
mod extract;
mod probe;

pub use checklist::{checklist_coverage, schema_implemented, schema_opportunities};
pub use extract::{extract_schemas, flatten_schema, short_type_name, ExtractedSchemas};
pub use probe::{check_schema_markup, fetch_page_schemas, probe_urls};
