//! Job search backends.
//!
//! `JobSearch` is the seam between the aggregator and the outside world.
//! `AdzunaClient` is the production implementation; tests plug in fakes.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::config::AdzunaConfig;
use crate::jobs::models::{JobListing, SearchResponse};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Why a single skill query produced nothing usable.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Carried in `AppState` as `Arc<dyn JobSearch>`.
#[async_trait]
pub trait JobSearch: Send + Sync {
    /// Runs one free-text search for `term` and returns the raw listings.
    async fn search(&self, term: &str) -> Result<Vec<JobListing>, SearchError>;
}

/// Adzuna job search client. One GET per call, no retries.
#[derive(Clone)]
pub struct AdzunaClient {
    client: Client,
    config: AdzunaConfig,
}

impl AdzunaClient {
    pub fn new(config: AdzunaConfig) -> Result<Self, SearchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl JobSearch for AdzunaClient {
    async fn search(&self, term: &str) -> Result<Vec<JobListing>, SearchError> {
        let results_per_page = self.config.results_per_page.to_string();
        let response = self
            .client
            .get(self.config.search_url())
            .query(&[
                ("app_id", self.config.app_id.as_str()),
                ("app_key", self.config.app_key.as_str()),
                ("results_per_page", results_per_page.as_str()),
                ("what", term),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!(
            "Adzuna returned {} result(s) for {:?}",
            parsed.results.len(),
            term
        );
        Ok(parsed.results)
    }
}
