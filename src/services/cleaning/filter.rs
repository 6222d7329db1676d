use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::entry::DictionaryEntry;

/// Decimal digits only (Unicode `Nd`); fractions and numerals like `½`, `Ⅻ`
/// are not digits.
static ALL_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid digit pattern"));

/// An entry survives only if both trimmed fields have at least two
/// characters and neither is purely numeric.
pub fn is_valid(entry: &DictionaryEntry) -> bool {
    let mongolian = entry.mongolian.trim();
    let english = entry.english.trim();

    if mongolian.chars().count() < 2 || english.chars().count() < 2 {
        return false;
    }

    !(all_digits(mongolian) || all_digits(english))
}

fn all_digits(s: &str) -> bool {
    ALL_DIGITS.is_match(s)
}
