use crate::domain::model::WordRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Something that can answer one upstream query string.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn fetch_words(&self, query: &str) -> Result<Vec<WordRecord>>;
}

/// Lookup of blocked words, keyed by their encoded form.
pub trait BlockList: Send + Sync {
    fn contains_encoded(&self, encoded: &str) -> bool;
}
