use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    #[default]
    Synonym,
    Antonym,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyllableComparison {
    #[default]
    Exact,
    LessThan,
}

/// One search as entered by the user. Terms are kept raw; trimming happens
/// when queries are built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub rhyme_term: String,
    pub prefix_term: String,
    pub relation_kind: RelationKind,
    pub relation_term: String,
    pub syllable_comparison: SyllableComparison,
    /// 0 means no syllable constraint.
    pub syllable_count: u32,
}

impl SearchRequest {
    pub fn rhymes_with(term: impl Into<String>) -> Self {
        Self {
            rhyme_term: term.into(),
            ..Self::default()
        }
    }

    pub fn starting_with(mut self, prefix: impl Into<String>) -> Self {
        self.prefix_term = prefix.into();
        self
    }

    pub fn related(mut self, kind: RelationKind, term: impl Into<String>) -> Self {
        self.relation_kind = kind;
        self.relation_term = term.into();
        self
    }

    pub fn with_syllables(mut self, comparison: SyllableComparison, count: u32) -> Self {
        self.syllable_comparison = comparison;
        self.syllable_count = count;
        self
    }

    /// True when at least one of the rhyme, prefix or relation terms is non-blank.
    pub fn has_terms(&self) -> bool {
        !self.rhyme_term.trim().is_empty()
            || !self.prefix_term.trim().is_empty()
            || !self.relation_term.trim().is_empty()
    }

    /// Syllable controls only make sense alongside a rhyme term.
    pub fn syllable_filter_enabled(&self) -> bool {
        !self.rhyme_term.trim().is_empty()
    }
}

/// Leading-integer parse of user text. Anything unparsable or non-positive
/// becomes 0, i.e. "no constraint". Digit runs too large for `u32` saturate.
pub fn parse_syllable_count(text: &str) -> u32 {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let run = &digits[..end];
    if run.is_empty() || negative {
        return 0;
    }

    // A non-empty ASCII digit run can only fail to parse by overflowing.
    run.parse::<u32>().unwrap_or(u32::MAX)
}

/// A word as returned by the upstream service. Unknown fields are kept
/// verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(
        rename = "numSyllables",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub num_syllables: Option<u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            score: None,
            num_syllables: None,
            extra: HashMap::new(),
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_syllables(mut self, count: u32) -> Self {
        self.num_syllables = Some(count);
        self
    }
}

/// Raw result of one search, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub exact_matches: Vec<WordRecord>,
    pub near_matches: Vec<WordRecord>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.exact_matches.is_empty() && self.near_matches.is_empty()
    }
}
