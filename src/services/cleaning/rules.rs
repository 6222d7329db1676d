use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// When a rule's match is actually replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// Only if `word` occurs after the match on the same line.
    FollowedOnLineBy(&'static str),
}

#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
    pub condition: Condition,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self::when(name, pattern, replacement, Condition::Always)
    }

    fn when(
        name: &'static str,
        pattern: &str,
        replacement: &'static str,
        condition: Condition,
    ) -> Self {
        Rule {
            name,
            pattern: Regex::new(pattern).expect("rule pattern is a valid regex"),
            replacement,
            condition,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self.condition {
            Condition::Always => self
                .pattern
                .replace_all(text, regex::NoExpand(self.replacement))
                .into_owned(),
            Condition::FollowedOnLineBy(word) => self
                .pattern
                .replace_all(text, |caps: &Captures| match caps.get(0) {
                    Some(m) if rest_of_line(text, m.end()).contains(word) => {
                        self.replacement.to_string()
                    }
                    _ => caps[0].to_string(),
                })
                .into_owned(),
        }
    }
}

fn rest_of_line(text: &str, from: usize) -> &str {
    let tail = &text[from..];
    match tail.find('\n') {
        Some(i) => &tail[..i],
        None => tail,
    }
}

/// Applied to both fields, strictly in this order. The slash-suffix rule
/// must follow the grade rules or it eats the `/GF` of a full grade code.
pub static SHARED_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("gf_grade", r"/GF-\d+[A-Z]*\d*W-?\d*", ""),
        Rule::new("c_grade", r"C\d+W-?\d+", ""),
        Rule::new("viscosity_grade", r"\b\d{1,2}W-?\d{2}\b", ""),
        Rule::new("engine_oil_concat", r"ENGINE OILC+", "ENGINE OIL"),
        Rule::new("slash_class", r"/[A-Z]{2,3}", ""),
        Rule::new("sn_cf", r"(?i)\bSN/CF\b", ""),
        Rule::new("sp_gf", r"(?i)\bSP/GF\b", ""),
        Rule::new("volume", r"\b\d+[lL]\b", ""),
        Rule::when(
            "bulb_wattage",
            r"\b\d{1,3}W",
            "",
            Condition::FollowedOnLineBy("BULB"),
        ),
        Rule::new("tgmo_code", r"\bTGMO[A-Z]*", "ENGINE OIL"),
        Rule::new("collapse_space", r"\s+", " "),
        Rule::new("trim", r"^\s+|\s+$", ""),
        Rule::new("trailing_dash", r"(?:\s*-\s*)+$", ""),
        Rule::new("leading_dash", r"^(?:\s*-\s*)+", ""),
    ]
});

/// Kit and voltage suffixes folded back to the base part name.
pub static ENGLISH_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("element_kit", r"\bELEMENTKIT\b", "ELEMENT"),
        Rule::new("filter_kit", r"\bFILTERKIT\b", "FILTER"),
        Rule::new("pad_kit", r"\bPADKIT\b", "PAD"),
        Rule::new("bulb_12v", r"\bBULB12V\b", "BULB"),
        Rule::new("collapse_space", r"\s+", " "),
    ]
});

fn run_chain(rules: &[Rule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

pub fn clean_text(text: &str) -> String {
    run_chain(&SHARED_RULES, text)
}

pub fn clean_english(text: &str) -> String {
    run_chain(&ENGLISH_RULES, text).trim().to_string()
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
