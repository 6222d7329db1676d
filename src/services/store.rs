use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{DictionaryError, Result};
use crate::model::entry::DictionaryEntry;

/// Reads a whole dictionary JSON array.
pub fn load(path: &Path) -> Result<Vec<DictionaryEntry>> {
    if !path.exists() {
        return Err(DictionaryError::MissingFile(path.to_path_buf()));
    }

    let data = fs::read_to_string(path).map_err(|e| DictionaryError::io(path, e))?;

    let entries: Vec<DictionaryEntry> = serde_json::from_str(&data)
        .map_err(|e| DictionaryError::MalformedInput(format!("{}: {e}", path.display())))?;

    debug!(count = entries.len(), "loaded {}", path.display());
    Ok(entries)
}

/// Pretty-prints with 2-space indentation, non-ASCII kept literal. The
/// target is only replaced once the full document is on disk.
pub fn save(path: &Path, entries: &[DictionaryEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DictionaryError::io(parent, e))?;
        }
    }

    fs::write(&tmp, bytes).map_err(|e| DictionaryError::io(&tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(DictionaryError::io(path, e));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "dictionary".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
