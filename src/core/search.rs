use crate::core::query::{build_queries, QueryPair};
use crate::domain::model::{SearchOutcome, SearchRequest, WordRecord};
use crate::domain::ports::WordSource;
use crate::utils::error::Result;

/// Runs the exact and near queries for a request against a [`WordSource`].
pub struct WordSearch<W: WordSource> {
    source: W,
}

impl<W: WordSource> WordSearch<W> {
    pub fn new(source: W) -> Self {
        Self { source }
    }

    /// Fetches both lists concurrently. A list whose query is `None` is
    /// empty and costs no request.
    ///
    /// Failure is all-or-nothing: if either request fails the whole search
    /// fails and a sibling result that already arrived is dropped. Callers
    /// wanting per-list errors should call [`WordSource::fetch_words`] for
    /// each query themselves.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let QueryPair { exact, near } = build_queries(request);
        tracing::debug!("Exact query: {:?}, near query: {:?}", exact, near);

        let (exact_matches, near_matches) = tokio::try_join!(
            self.fetch_optional(exact.as_deref()),
            self.fetch_optional(near.as_deref()),
        )?;

        tracing::debug!(
            "Search returned {} exact and {} near matches",
            exact_matches.len(),
            near_matches.len()
        );

        Ok(SearchOutcome {
            exact_matches,
            near_matches,
        })
    }

    async fn fetch_optional(&self, query: Option<&str>) -> Result<Vec<WordRecord>> {
        match query {
            Some(query) => self.source.fetch_words(query).await,
            None => Ok(Vec::new()),
        }
    }
}
