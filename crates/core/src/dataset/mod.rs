//! Sample telemetry retrieval and parsing

mod parser;

pub use parser::parse_delimited;

use crate::error::DatasetError;
use crate::models::TelemetrySample;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Source of the sample telemetry dataset
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and parse one dataset. There is no caching: every call
    /// re-fetches and re-parses, so a failed attempt is safe to retry.
    async fn load(&self) -> Result<TelemetrySample, DatasetError>;
}

/// Loads the dataset over HTTP from a static resource path
pub struct HttpDatasetSource {
    client: Client,
    url: Url,
}

impl HttpDatasetSource {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn load(&self) -> Result<TelemetrySample, DatasetError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| DatasetError::Retrieval(e.to_string()))?
            .error_for_status()
            .map_err(|e| DatasetError::Retrieval(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| DatasetError::Retrieval(e.to_string()))?;

        let sample = parse_delimited(&text)?;
        debug!(rows = sample.len(), url = %self.url, "Dataset loaded");
        Ok(sample)
    }
}
