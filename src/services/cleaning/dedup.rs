use std::collections::HashSet;

use crate::model::entry::DictionaryEntry;

/// Drops every entry whose normalized key was already seen. Survivors keep
/// their original order. Returns the survivors and how many were dropped.
pub fn dedup(entries: Vec<DictionaryEntry>) -> (Vec<DictionaryEntry>, usize) {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut removed = 0usize;

    let out: Vec<DictionaryEntry> = entries
        .into_iter()
        .filter(|e| {
            let fresh = seen.insert(e.norm_key());
            if !fresh {
                removed += 1;
            }
            fresh
        })
        .collect();

    (out, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_variants_collapse_to_first() {
        let (out, removed) = dedup(vec![
            DictionaryEntry::new("a", "B"),
            DictionaryEntry::new("A", "b"),
        ]);
        assert_eq!(out, vec![DictionaryEntry::new("a", "B")]);
        assert_eq!(removed, 1);
    }

    #[test]
    fn first_occurrence_order_kept() {
        let (out, removed) = dedup(vec![
            DictionaryEntry::new("ДУГУЙ", "TIRE"),
            DictionaryEntry::new("ТОС", "OIL"),
            DictionaryEntry::new("дугуй ", "tire"),
            DictionaryEntry::new("ГЭРЭЛ", "LAMP"),
            DictionaryEntry::new("тос", " OIL"),
        ]);
        let english: Vec<&str> = out.iter().map(|e| e.english.as_str()).collect();
        assert_eq!(english, vec!["TIRE", "OIL", "LAMP"]);
        assert_eq!(removed, 2);
    }

    #[test]
    fn same_source_different_target_kept() {
        let (out, _) = dedup(vec![
            DictionaryEntry::new("ТОС", "OIL"),
            DictionaryEntry::new("ТОС", "GREASE"),
        ]);
        assert_eq!(out.len(), 2);
    }
}
