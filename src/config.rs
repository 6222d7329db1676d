use std::path::PathBuf;

/// Where the importer writes, and where the other tools read from.
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.json";
pub const DEFAULT_CLEANED_FILE: &str = "dictionary_cleaned.json";
pub const DEFAULT_EXPANDED_FILE: &str = "dictionary_fr_rr_fixed.json";

pub const DEFAULT_SAMPLE_SIZE: usize = 3;
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// Resolved input/output pair for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl JobPaths {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}
