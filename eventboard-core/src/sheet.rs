//! HTTP client for the spreadsheet web app.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::form::Proposal;
use crate::source::EventSource;

/// Talks to the spreadsheet endpoint: GET lists rows, POST appends a proposal.
#[derive(Debug, Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SheetClient {
    pub fn new(endpoint: Url, timeout: Duration) -> BoardResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BoardError::Config(format!("Could not build HTTP client: {e}")))?;

        Ok(SheetClient { http, endpoint })
    }

    pub fn from_config(config: &BoardConfig) -> BoardResult<Self> {
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EventSource for SheetClient {
    async fn fetch_records(&self) -> BoardResult<Vec<serde_json::Value>> {
        tracing::debug!(url = %self.endpoint, "Fetching events");

        let body = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| BoardError::Fetch(e.to_string()))?
            .text()
            .await
            .map_err(|e| BoardError::Fetch(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| BoardError::Decode(e.to_string()))
    }

    async fn submit_proposal(&self, proposal: &Proposal) -> BoardResult<()> {
        let body = serde_json::to_string(proposal)
            .map_err(|e| BoardError::Submit(e.to_string()))?;

        tracing::debug!(url = %self.endpoint, title = %proposal.title, "Submitting proposal");

        // The web app answers with a redirect to an opaque page. Its status
        // and body say nothing about whether the row was stored.
        let _response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| BoardError::Submit(e.to_string()))?;

        Ok(())
    }
}
