//! src/provider.rs
use crate::error::PipelineError;
use anyhow::Context;
use std::time::Duration;

/// External collaborator that supplies the raw text to tokenize. On failure
/// the pipeline must not run; no partial processing of a truncated fetch.
#[async_trait::async_trait]
pub trait TextProvider {
    async fn fetch(&self) -> Result<String, PipelineError>;
}

pub struct HttpTextProvider {
    url: String,
    client: reqwest::Client,
}

impl HttpTextProvider {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpTextProvider {
            url: url.to_string(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl TextProvider for HttpTextProvider {
    #[tracing::instrument(name = "Fetch input text", skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<String, PipelineError> {
        let fetched = async {
            let response = self
                .client
                .get(&self.url)
                .send()
                .await
                .context("Failed to request the text")?;
            let response = response
                .error_for_status()
                .context("Server rejected the request")?;
            response
                .text()
                .await
                .context("Failed to read the response body")
        }
        .await;
        fetched.map_err(PipelineError::InputUnavailable)
    }
}
