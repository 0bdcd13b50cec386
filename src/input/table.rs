//! Header-keyed CSV table.
//!
//! Empty cells, and cells holding one of the usual missing-value markers
//! ("NA", "N/A", "null", "NaN", ...), are stored as `None` and treated as
//! missing by every rule, the same cells pandas reads as NaN.

use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error_handling::InputError;

const UTF8_BOM: char = '\u{feff}';

/// Cell values read as missing. Matched exactly, without trimming.
const MISSING_VALUE_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True for a blank cell or one of [`MISSING_VALUE_MARKERS`].
pub fn is_missing_cell(cell: &str) -> bool {
    cell.is_empty() || MISSING_VALUE_MARKERS.contains(&cell)
}

/// An in-memory CSV table with a header row.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Builds a table from already-split headers and rows. Short rows are padded.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Table { headers, rows }
    }

    /// Reads CSV from any reader. An input with no bytes yields an empty table.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let row = record
                .iter()
                .take(headers.len())
                .map(|cell| (!is_missing_cell(cell)).then(|| cell.to_string()))
                .collect();
            rows.push(row);
        }

        // A lone empty header means the file had no content at all
        if headers.len() == 1 && headers[0].is_empty() && rows.is_empty() {
            return Ok(Table::default());
        }

        Ok(Table::new(headers, rows))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InputError> {
        Self::from_reader(bytes)
    }

    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let file = std::fs::File::open(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// True when every named column is present.
    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.has_column(name))
    }

    /// Values of one column, or `None` if the column is absent.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).and_then(|cell| cell.as_deref()))
                .collect(),
        )
    }

    /// One cell by row index and column name.
    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// One row as a JSON object over the requested columns that exist.
    ///
    /// Missing cells become `null`.
    pub fn record(&self, row: usize, columns: &[&str]) -> Map<String, Value> {
        let mut record = Map::new();
        for name in columns {
            if self.has_column(name) {
                let value = self
                    .cell(row, name)
                    .map(|v| Value::String(v.to_string()))
                    .unwrap_or(Value::Null);
                record.insert((*name).to_string(), value);
            }
        }
        record
    }

    /// Every row as a JSON object over all columns.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        let columns: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        (0..self.rows.len())
            .map(|row| self.record(row, &columns))
            .collect()
    }
}
