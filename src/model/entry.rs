use serde::{Deserialize, Serialize};

/// One Mongolian ↔ English translation pair.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub mongolian: String,
    pub english: String,
}

/// Case-folded, trimmed form of both fields. Two entries with equal keys
/// are duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormKey {
    pub mongolian: String,
    pub english: String,
}

impl DictionaryEntry {
    pub fn new(mongolian: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            mongolian: mongolian.into(),
            english: english.into(),
        }
    }

    pub fn norm_key(&self) -> NormKey {
        NormKey {
            mongolian: self.mongolian.to_lowercase().trim().to_string(),
            english: self.english.to_lowercase().trim().to_string(),
        }
    }
}
