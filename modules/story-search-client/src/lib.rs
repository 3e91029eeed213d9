pub mod error;
pub mod types;

pub use error::{Result, SearchError};
pub use types::{ScoredDocument, StoryDocument, StorySearchRequest, StorySearchResponse};

use std::time::Duration;

/// Production catalog search endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://customers.microsoft.com/en-us/api/search";

pub struct StorySearchClient {
    client: reqwest::Client,
    endpoint: String,
}

impl StorySearchClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Search the catalog for stories matching `keyword` (empty keyword
    /// returns the default ranking). Degrades every failure to an empty
    /// list: the caller renders zero results, never an error.
    pub async fn search(&self, keyword: &str) -> Vec<StoryDocument> {
        match self.fetch(keyword).await {
            Ok(Some(results)) => results.into_iter().map(|r| r.document).collect(),
            Ok(None) => {
                tracing::info!(keyword, "No matched story document");
                Vec::new()
            }
            Err(SearchError::Api { status, .. }) => {
                tracing::error!(status, "Failed to get stories");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "Story search call failed");
                Vec::new()
            }
        }
    }

    /// One POST per call, no retry. Returns `None` when the response carries
    /// no result list, which the catalog uses for an empty match set.
    async fn fetch(&self, keyword: &str) -> Result<Option<Vec<ScoredDocument>>> {
        let request = StorySearchRequest::with_text(keyword);

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        let response: StorySearchResponse = serde_json::from_str(&body)?;
        Ok(response.search_result.results)
    }
}
