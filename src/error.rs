use std::path::PathBuf;

/// Failures shared by every dictionary tool.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Input path does not exist
    #[error("file '{}' not found", .0.display())]
    MissingFile(PathBuf),

    /// Input exists but has the wrong shape (column count, JSON syntax)
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize dictionary: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DictionaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DictionaryError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
