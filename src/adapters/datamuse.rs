use crate::config::ClientConfig;
use crate::domain::model::WordRecord;
use crate::domain::ports::WordSource;
use crate::utils::error::{Result, SearchError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// [`WordSource`] backed by the Datamuse `/words` endpoint.
#[derive(Debug, Clone)]
pub struct DatamuseClient {
    client: Client,
    endpoint: String,
}

impl DatamuseClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn url_for(&self, query: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.endpoint, separator, query)
    }
}

#[async_trait]
impl WordSource for DatamuseClient {
    async fn fetch_words(&self, query: &str) -> Result<Vec<WordRecord>> {
        let url = self.url_for(query);
        tracing::debug!("Making Datamuse request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Datamuse response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let words: Vec<WordRecord> = serde_json::from_slice(&bytes)?;
        tracing::debug!("Datamuse returned {} words for {}", words.len(), query);
        Ok(words)
    }
}
