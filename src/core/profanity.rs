//! Blocked-word lookup. Entries are stored base64-encoded and candidates
//! are encoded the same way before the membership test.

use crate::domain::ports::BlockList;
use crate::utils::error::{Result, SearchError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::HashSet;
use std::path::Path;

const BUNDLED_TABLE: &str = include_str!("blocklist.b64");

pub fn encode_word(word: &str) -> String {
    STANDARD.encode(word.as_bytes())
}

/// Case-sensitive, exact-match check of `word` against `list`.
pub fn is_blocked<B: BlockList + ?Sized>(list: &B, word: &str) -> bool {
    list.contains_encoded(&encode_word(word))
}

#[derive(Debug, Clone, Default)]
pub struct EncodedBlockList {
    entries: HashSet<String>,
}

impl EncodedBlockList {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table shipped with the crate.
    pub fn bundled() -> Self {
        let mut list = Self::empty();
        for line in table_lines(BUNDLED_TABLE) {
            list.entries.insert(line.1.to_string());
        }
        list
    }

    pub fn from_encoded<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_plain_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: words.into_iter().map(|w| encode_word(w.as_ref())).collect(),
        }
    }

    /// Reads one base64 entry per line. Blank lines and `#` comments are
    /// skipped; anything that is not valid base64 is rejected.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = HashSet::new();
        for (line_no, entry) in table_lines(content) {
            if let Err(e) = STANDARD.decode(entry) {
                return Err(SearchError::InvalidBlockListEntry {
                    line: line_no,
                    reason: e.to_string(),
                });
            }
            entries.insert(entry.to_string());
        }
        Ok(Self { entries })
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let list = Self::parse(&content)?;
        tracing::debug!(
            "Loaded {} blocklist entries from {}",
            list.len(),
            path.as_ref().display()
        );
        Ok(list)
    }

    pub fn extend(&mut self, other: EncodedBlockList) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BlockList for EncodedBlockList {
    fn contains_encoded(&self, encoded: &str) -> bool {
        self.entries.contains(encoded)
    }
}

impl BlockList for HashSet<String> {
    fn contains_encoded(&self, encoded: &str) -> bool {
        self.contains(encoded)
    }
}

fn table_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
