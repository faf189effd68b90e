//! Profanity and syllable filtering over a fetched [`SearchOutcome`].
//!
//! Filtering only removes records and never touches upstream order, so it
//! can be re-run with new syllable settings without fetching again.

use crate::core::profanity::is_blocked;
use crate::core::syllables::passes;
use crate::domain::model::{SearchOutcome, SearchRequest, SyllableComparison, WordRecord};
use crate::domain::ports::BlockList;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyllableFilter {
    pub requested: u32,
    pub comparison: SyllableComparison,
}

impl SyllableFilter {
    pub fn new(requested: u32, comparison: SyllableComparison) -> Self {
        Self {
            requested,
            comparison,
        }
    }

    pub fn from_request(request: &SearchRequest) -> Self {
        Self::new(request.syllable_count, request.syllable_comparison)
    }

    pub fn is_active(&self) -> bool {
        self.requested > 0
    }
}

/// Borrowed view of the records that survived filtering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredOutcome<'a> {
    pub exact_matches: Vec<&'a WordRecord>,
    pub near_matches: Vec<&'a WordRecord>,
}

impl FilteredOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.exact_matches.is_empty() && self.near_matches.is_empty()
    }

    pub fn to_owned_outcome(&self) -> SearchOutcome {
        SearchOutcome {
            exact_matches: self.exact_matches.iter().map(|r| (*r).clone()).collect(),
            near_matches: self.near_matches.iter().map(|r| (*r).clone()).collect(),
        }
    }
}

pub fn keep_record<B: BlockList + ?Sized>(
    record: &WordRecord,
    block_list: &B,
    filter: SyllableFilter,
) -> bool {
    !is_blocked(block_list, &record.word)
        && passes(record.num_syllables, filter.requested, filter.comparison)
}

pub fn filter_records<'a, B: BlockList + ?Sized>(
    records: &'a [WordRecord],
    block_list: &B,
    filter: SyllableFilter,
) -> Vec<&'a WordRecord> {
    records
        .iter()
        .filter(|record| keep_record(record, block_list, filter))
        .collect()
}

pub fn filter_outcome<'a, B: BlockList + ?Sized>(
    outcome: &'a SearchOutcome,
    block_list: &B,
    filter: SyllableFilter,
) -> FilteredOutcome<'a> {
    let filtered = FilteredOutcome {
        exact_matches: filter_records(&outcome.exact_matches, block_list, filter),
        near_matches: filter_records(&outcome.near_matches, block_list, filter),
    };

    tracing::debug!(
        "Filtered {} exact / {} near down to {} / {}",
        outcome.exact_matches.len(),
        outcome.near_matches.len(),
        filtered.exact_matches.len(),
        filtered.near_matches.len()
    );

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profanity::EncodedBlockList;

    fn outcome() -> SearchOutcome {
        SearchOutcome {
            exact_matches: vec![
                WordRecord::new("hat").with_score(900.0).with_syllables(1),
                WordRecord::new("darn").with_score(800.0).with_syllables(1),
                WordRecord::new("acrobat").with_score(700.0).with_syllables(3),
                WordRecord::new("thereat"),
            ],
            near_matches: vec![
                WordRecord::new("cap").with_syllables(1),
                WordRecord::new("caddy").with_syllables(2),
            ],
        }
    }

    #[test]
    fn test_blocked_words_removed_from_both_lists() {
        let mut outcome = outcome();
        outcome.near_matches.push(WordRecord::new("darn"));
        let list = EncodedBlockList::from_plain_words(["darn"]);

        let filtered = filter_outcome(&outcome, &list, SyllableFilter::default());
        let exact: Vec<_> = filtered.exact_matches.iter().map(|r| r.word.as_str()).collect();
        let near: Vec<_> = filtered.near_matches.iter().map(|r| r.word.as_str()).collect();

        assert_eq!(exact, vec!["hat", "acrobat", "thereat"]);
        assert_eq!(near, vec!["cap", "caddy"]);
    }

    #[test]
    fn test_syllable_filter_keeps_order_and_unknowns() {
        let outcome = outcome();
        let list = EncodedBlockList::empty();

        let filtered = filter_outcome(
            &outcome,
            &list,
            SyllableFilter::new(2, SyllableComparison::LessThan),
        );
        let exact: Vec<_> = filtered.exact_matches.iter().map(|r| r.word.as_str()).collect();
        let near: Vec<_> = filtered.near_matches.iter().map(|r| r.word.as_str()).collect();

        assert_eq!(exact, vec!["hat", "darn", "thereat"]);
        assert_eq!(near, vec!["cap"]);
    }

    #[test]
    fn test_refiltering_without_refetch() {
        let outcome = outcome();
        let list = EncodedBlockList::empty();

        let three = filter_outcome(&outcome, &list, SyllableFilter::new(3, SyllableComparison::Exact));
        assert_eq!(three.exact_matches.len(), 2);
        assert!(three.near_matches.is_empty());

        let off = filter_outcome(&outcome, &list, SyllableFilter::new(0, SyllableComparison::Exact));
        assert_eq!(off.to_owned_outcome(), outcome);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let outcome = outcome();
        let list = EncodedBlockList::from_plain_words(["darn"]);
        let filter = SyllableFilter::new(1, SyllableComparison::Exact);

        let once = filter_outcome(&outcome, &list, filter).to_owned_outcome();
        let twice = filter_outcome(&once, &list, filter).to_owned_outcome();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_from_request() {
        let request = SearchRequest::rhymes_with("cat").with_syllables(SyllableComparison::LessThan, 4);
        let filter = SyllableFilter::from_request(&request);
        assert!(filter.is_active());
        assert_eq!(filter.comparison, SyllableComparison::LessThan);
        assert!(!SyllableFilter::default().is_active());
    }
}
