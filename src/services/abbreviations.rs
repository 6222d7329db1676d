use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::config::JobPaths;
use crate::error::Result;
use crate::model::entry::DictionaryEntry;
use crate::services::store;

static FR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bFR\b").expect("valid FR pattern"));
static RR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bRR\b").expect("valid RR pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Mongolian,
    English,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub index: usize,
    pub field: Field,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Default)]
pub struct ExpansionReport {
    pub processed: usize,
    pub changes: Vec<FieldChange>,
}

/// Whole-word, case-sensitive `FR` → `FRONT`, `RR` → `REAR`.
pub fn expand(text: &str) -> String {
    let text = FR.replace_all(text, "FRONT");
    RR.replace_all(&text, "REAR").into_owned()
}

/// Rewrites entries in place and records every field that changed.
pub fn expand_entries(entries: &mut [DictionaryEntry]) -> ExpansionReport {
    let mut report = ExpansionReport {
        processed: entries.len(),
        changes: Vec::new(),
    };

    for (index, entry) in entries.iter_mut().enumerate() {
        for (field, value) in [
            (Field::English, &mut entry.english),
            (Field::Mongolian, &mut entry.mongolian),
        ] {
            let expanded = expand(value);
            if expanded != *value {
                report.changes.push(FieldChange {
                    index,
                    field,
                    before: std::mem::replace(value, expanded.clone()),
                    after: expanded,
                });
            }
        }
    }

    report
}

pub fn run(paths: &JobPaths) -> Result<ExpansionReport> {
    info!("loading data from {}", paths.input.display());
    let mut entries = store::load(&paths.input)?;
    info!("processing {} entries...", entries.len());

    let report = expand_entries(&mut entries);
    for c in &report.changes {
        info!("changed: '{}' → '{}'", c.before, c.after);
    }
    info!("total changes made: {}", report.changes.len());

    store::save(&paths.output, &entries)?;
    info!("updated data saved to {}", paths.output.display());

    Ok(report)
}
