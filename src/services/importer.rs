use std::path::Path;

use tracing::info;

use crate::config::JobPaths;
use crate::error::{DictionaryError, Result};
use crate::model::entry::DictionaryEntry;
use crate::parsers::{self, Table};
use crate::services::store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub columns: Vec<String>,
    pub rows: usize,
    pub entries: Vec<DictionaryEntry>,
}

impl ImportReport {
    pub fn imported(&self) -> usize {
        self.entries.len()
    }
}

/// Column 1 is Mongolian, column 2 English. Rows with a missing, blank or
/// literal `nan` cell are skipped. Row order is kept; no dedup here.
pub fn table_to_entries(table: &Table) -> Result<Vec<DictionaryEntry>> {
    if table.width() < 2 {
        return Err(DictionaryError::MalformedInput(format!(
            "spreadsheet must have at least 2 columns, found {}",
            table.width()
        )));
    }

    let entries = (0..table.rows.len())
        .filter_map(|row| {
            let mongolian = usable(table.cell(row, 0))?;
            let english = usable(table.cell(row, 1))?;
            Some(DictionaryEntry::new(mongolian, english))
        })
        .collect();

    Ok(entries)
}

fn usable(cell: Option<&str>) -> Option<&str> {
    let trimmed = cell?.trim();
    if trimmed.is_empty() || trimmed == "nan" {
        None
    } else {
        Some(trimmed)
    }
}

pub fn import(path: &Path) -> Result<ImportReport> {
    if !path.exists() {
        return Err(DictionaryError::MissingFile(path.to_path_buf()));
    }

    info!("reading spreadsheet: {}", path.display());
    let table = parsers::read_table(path)?;
    info!("found columns: {:?}", table.headers);

    let entries = table_to_entries(&table)?;
    info!("using '{}' as Mongolian column", table.headers[0]);
    info!("using '{}' as English column", table.headers[1]);

    Ok(ImportReport {
        columns: table.headers,
        rows: table.rows.len(),
        entries,
    })
}

/// Import, then write the dictionary. Nothing is written if import fails.
pub fn run(paths: &JobPaths, sample: usize) -> Result<ImportReport> {
    let report = import(&paths.input)?;

    store::save(&paths.output, &report.entries)?;

    info!(
        "created {} with {} entries ({} rows skipped)",
        paths.output.display(),
        report.imported(),
        report.rows - report.imported()
    );
    if sample > 0 && !report.entries.is_empty() {
        info!("first few entries:");
        for (i, e) in report.entries.iter().take(sample).enumerate() {
            info!("  {}. {} → {}", i + 1, e.mongolian, e.english);
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod tests;
