//! Translation of a [`SearchRequest`] into Datamuse query strings.

use crate::domain::model::{RelationKind, SearchRequest};

/// Upstream cap on returned words.
pub const MAX_RESULTS: u32 = 50;

/// Query strings for one search. `None` means the list needs no request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPair {
    pub exact: Option<String>,
    pub near: Option<String>,
}

/// Builds the query for one list. Parameters are added in a fixed order:
/// rhyme, prefix, relation, then `max`. Returns `None` when nothing would be
/// constrained, or for the near list when there is no rhyme term.
pub fn build_query(want_exact: bool, request: &SearchRequest) -> Option<String> {
    let mut params: Vec<String> = Vec::with_capacity(4);
    let rhyme = request.rhyme_term.trim();
    let prefix = request.prefix_term.trim();
    let relation = request.relation_term.trim();

    if !rhyme.is_empty() {
        let key = if want_exact { "rel_rhy" } else { "rel_nry" };
        params.push(format!("{}={}", key, urlencoding::encode(rhyme)));
    } else if !want_exact {
        return None;
    }

    if !prefix.is_empty() {
        params.push(format!("sp={}*", urlencoding::encode(prefix)));
    }

    if !relation.is_empty() {
        let key = match request.relation_kind {
            RelationKind::Synonym => "rel_syn",
            RelationKind::Antonym => "rel_ant",
        };
        params.push(format!("{}={}", key, urlencoding::encode(relation)));
    }

    if params.is_empty() {
        return None;
    }

    params.push(format!("max={}", MAX_RESULTS));
    Some(params.join("&"))
}

pub fn build_queries(request: &SearchRequest) -> QueryPair {
    QueryPair {
        exact: build_query(true, request),
        near: build_query(false, request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SyllableComparison;

    #[test]
    fn test_empty_request_builds_nothing() {
        let request = SearchRequest::default();
        assert_eq!(build_queries(&request), QueryPair::default());

        let blank = SearchRequest::rhymes_with("  ")
            .starting_with("\t")
            .related(RelationKind::Antonym, " ")
            .with_syllables(SyllableComparison::LessThan, 3);
        assert_eq!(build_queries(&blank), QueryPair::default());
    }

    #[test]
    fn test_rhyme_only() {
        let pair = build_queries(&SearchRequest::rhymes_with("cat"));
        assert_eq!(pair.exact.as_deref(), Some("rel_rhy=cat&max=50"));
        assert_eq!(pair.near.as_deref(), Some("rel_nry=cat&max=50"));
    }

    #[test]
    fn test_near_requires_rhyme_term() {
        let request = SearchRequest::default()
            .starting_with("bl")
            .related(RelationKind::Synonym, "happy");
        assert_eq!(build_query(false, &request), None);
        assert_eq!(
            build_query(true, &request).as_deref(),
            Some("sp=bl*&rel_syn=happy&max=50")
        );
    }

    #[test]
    fn test_parameter_order_and_relation_kind() {
        let request = SearchRequest::rhymes_with(" day ")
            .starting_with("s")
            .related(RelationKind::Antonym, "night");
        assert_eq!(
            build_query(true, &request).as_deref(),
            Some("rel_rhy=day&sp=s*&rel_ant=night&max=50")
        );
        assert_eq!(
            build_query(false, &request).as_deref(),
            Some("rel_nry=day&sp=s*&rel_ant=night&max=50")
        );
    }

    #[test]
    fn test_terms_are_percent_encoded() {
        let request = SearchRequest::rhymes_with("ice cream").starting_with("a&b");
        assert_eq!(
            build_query(true, &request).as_deref(),
            Some("rel_rhy=ice%20cream&sp=a%26b*&max=50")
        );
    }

    #[test]
    fn test_prefix_only_has_no_near_query() {
        let pair = build_queries(&SearchRequest::default().starting_with("gr"));
        assert_eq!(pair.exact.as_deref(), Some("sp=gr*&max=50"));
        assert_eq!(pair.near, None);
    }
}
