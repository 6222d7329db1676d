use tracing::info;

use crate::config::JobPaths;
use crate::error::Result;
use crate::model::entry::DictionaryEntry;
use crate::services::{cleaning, store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub original: usize,
    pub valid: usize,
    pub unique: usize,
    pub duplicates: usize,
}

impl CleanReport {
    pub fn removed(&self) -> usize {
        self.original - self.unique
    }
}

/// Clean, filter, then dedup. Never grows the entry set.
pub fn clean_entries(entries: &[DictionaryEntry]) -> (Vec<DictionaryEntry>, CleanReport) {
    let cleaned: Vec<DictionaryEntry> = entries
        .iter()
        .map(cleaning::clean_entry)
        .filter(cleaning::is_valid)
        .collect();

    let valid = cleaned.len();
    let (unique, duplicates) = cleaning::dedup(cleaned);

    let report = CleanReport {
        original: entries.len(),
        valid,
        unique: unique.len(),
        duplicates,
    };

    (unique, report)
}

pub fn run(paths: &JobPaths) -> Result<CleanReport> {
    info!("loading data from {}", paths.input.display());
    let entries = store::load(&paths.input)?;
    info!("original entries: {}", entries.len());

    info!("cleaning entries...");
    let (final_entries, report) = clean_entries(&entries);
    info!("valid entries after cleaning: {}", report.valid);
    info!("removing duplicates...");
    info!("duplicates dropped: {}", report.duplicates);
    info!("final unique entries: {}", report.unique);
    info!("removed {} entries total", report.removed());

    store::save(&paths.output, &final_entries)?;
    info!("cleaned data saved to {}", paths.output.display());

    Ok(report)
}
