use std::str::FromStr;

use crate::model::entry::DictionaryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    Mongolian,
    English,
    #[default]
    Both,
}

impl FromStr for SearchDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongolian" | "mn" => Ok(SearchDirection::Mongolian),
            "english" | "en" => Ok(SearchDirection::English),
            "both" => Ok(SearchDirection::Both),
            other => Err(format!("unknown search direction '{other}'")),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub entry: &'a DictionaryEntry,
    pub score: u32,
}

#[derive(Debug)]
pub struct SearchResults<'a> {
    /// Matches before truncation.
    pub total: usize,
    pub hits: Vec<SearchHit<'a>>,
}

/// Substring lookup ranked exact > prefix > contains. Ties keep
/// dictionary order.
pub fn search<'a>(
    entries: &'a [DictionaryEntry],
    query: &str,
    direction: SearchDirection,
    limit: usize,
) -> SearchResults<'a> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return SearchResults {
            total: 0,
            hits: Vec::new(),
        };
    }

    let mut hits: Vec<SearchHit<'a>> = entries
        .iter()
        .filter(|e| matches(e, &query, direction))
        .map(|e| SearchHit {
            entry: e,
            score: relevance(e, &query),
        })
        .collect();

    let total = hits.len();
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);

    SearchResults { total, hits }
}

fn matches(e: &DictionaryEntry, query: &str, direction: SearchDirection) -> bool {
    let mongolian = e.mongolian.to_lowercase();
    let english = e.english.to_lowercase();

    match direction {
        SearchDirection::Mongolian => mongolian.contains(query),
        SearchDirection::English => english.contains(query),
        SearchDirection::Both => mongolian.contains(query) || english.contains(query),
    }
}

fn relevance(e: &DictionaryEntry, query: &str) -> u32 {
    let mongolian = e.mongolian.to_lowercase();
    let english = e.english.to_lowercase();
    let mut score = 0;

    if mongolian == query || english == query {
        score += 100;
    }
    if mongolian.starts_with(query) || english.starts_with(query) {
        score += 50;
    }
    if mongolian.contains(query) || english.contains(query) {
        score += 10;
    }

    score
}
