use std::path::Path;

use crate::error::Result;

pub mod delimited;
pub mod spreadsheet;

/// A header row plus data rows, already stringified. Missing or blank
/// cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }
}

/// Reads the first sheet of a workbook, or a delimited text file when the
/// extension says so.
pub fn read_table(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => delimited::read(path, b','),
        "tsv" => delimited::read(path, b'\t'),
        _ => spreadsheet::read_first_sheet(path),
    }
}

pub(crate) fn header_name(index: usize, raw: Option<String>) -> String {
    match raw {
        Some(name) if !name.trim().is_empty() => name,
        _ => format!("Unnamed: {index}"),
    }
}
