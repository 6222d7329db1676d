//! Noise stripping for dictionary entries: an ordered rule chain shared by
//! both fields, English-only term rewrites, a validity filter and
//! first-wins deduplication.

mod dedup;
mod filter;
mod rules;

pub use dedup::dedup;
pub use filter::is_valid;
pub use rules::{clean_english, clean_text, Condition, Rule, ENGLISH_RULES, SHARED_RULES};

use crate::model::entry::DictionaryEntry;

/// Cleans both fields. The English side gets the extra term rewrites.
pub fn clean_entry(entry: &DictionaryEntry) -> DictionaryEntry {
    DictionaryEntry {
        mongolian: clean_text(&entry.mongolian),
        english: clean_english(&clean_text(&entry.english)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_token_stripped_from_both_fields() {
        let cleaned = clean_entry(&DictionaryEntry::new("ТОС 5W-30", "ENGINE OIL 5W-30"));
        assert_eq!(cleaned, DictionaryEntry::new("ТОС", "ENGINE OIL"));
    }

    #[test]
    fn term_rewrites_only_touch_english() {
        let cleaned = clean_entry(&DictionaryEntry::new("ELEMENTKIT", "AIR ELEMENTKIT"));
        assert_eq!(cleaned.mongolian, "ELEMENTKIT");
        assert_eq!(cleaned.english, "AIR ELEMENT");
    }
}
