use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{DictionaryError, Result};

use super::{header_name, Table};

pub fn read_first_sheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            DictionaryError::MalformedInput(format!("'{}' has no worksheets", path.display()))
        })??;

    let mut rows = range.rows();

    // Header row names the columns and is never data.
    let headers = match rows.next() {
        Some(first) => first
            .iter()
            .enumerate()
            .map(|(i, c)| header_name(i, cell_text(c)))
            .collect(),
        None => Vec::new(),
    };

    let rows = rows
        .map(|r| r.iter().map(cell_text).collect())
        .collect();

    Ok(Table { headers, rows })
}

/// Stringifies a cell the way it reads in the sheet. Integral floats lose
/// their `.0` because `f64`'s `Display` already drops it.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
