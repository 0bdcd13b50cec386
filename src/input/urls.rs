//! URL list input for the header fetcher.

use std::io::Read;
use std::path::Path;

use crate::error_handling::InputError;

/// Reads a URL list from CSV.
///
/// If any cell of the first row contains "url" (case-insensitive), that row is
/// treated as a header and the first such column is used. Otherwise every row
/// is data and the first column is used. Blank cells are skipped.
pub fn read_url_list<R: Read>(reader: R) -> Result<Vec<String>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in csv_reader.records() {
        records.push(record?);
    }

    let Some(first) = records.first() else {
        return Err(InputError::NoUrls);
    };

    let header_column = first
        .iter()
        .position(|cell| cell.to_lowercase().contains("url"));
    let (column, skip) = match header_column {
        Some(idx) => (idx, 1),
        None => (0, 0),
    };

    let urls: Vec<String> = records
        .iter()
        .skip(skip)
        .filter_map(|record| record.get(column))
        .map(|cell| cell.trim_start_matches('\u{feff}').trim())
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        return Err(InputError::NoUrls);
    }
    Ok(urls)
}

pub fn read_url_list_from_path(path: &Path) -> Result<Vec<String>, InputError> {
    let file = std::fs::File::open(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_url_list(file)
}
