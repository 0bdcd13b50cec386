//! Tabular input.
//!
//! Crawl exports, alt-text reports and orphan-page reports are loaded into a
//! header-keyed [`Table`]; the header fetcher's URL list is read with
//! [`read_url_list`].

mod table;
mod urls;

pub use table::Table;
pub use urls::{read_url_list, read_url_list_from_path};
