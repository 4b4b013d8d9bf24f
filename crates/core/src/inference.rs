//! HTTP client for the remote prediction endpoint
//!
//! The endpoint is consumed as a black box: a parsed dataset goes in
//! as JSON, a prediction comes back. The client never retries and never
//! falls back; recovery policy belongs to the session controller.

use crate::error::InferenceError;
use crate::models::{Prediction, TelemetrySample};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Remote scoring service interface
#[async_trait]
pub trait InferenceService: Send + Sync {
    /// Submit a parsed dataset and return the predicted RUL
    async fn predict(&self, sample: &TelemetrySample) -> Result<Prediction, InferenceError>;
}

/// HTTP implementation posting to `{base}/predict`
pub struct HttpInferenceClient {
    client: Client,
    endpoint: Url,
}

impl HttpInferenceClient {
    /// Create a client for the given base URL. The prediction route is
    /// resolved once, up front.
    pub fn new(client: Client, base_url: &Url) -> Result<Self, url::ParseError> {
        let endpoint = base_url.join("predict")?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl InferenceService for HttpInferenceClient {
    async fn predict(&self, sample: &TelemetrySample) -> Result<Prediction, InferenceError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(sample)
            .send()
            .await
            .map_err(|e| InferenceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::Status(status));
        }

        let prediction = response
            .json::<Prediction>()
            .await
            .map_err(|e| InferenceError::Decode(e.to_string()))?;

        debug!(
            hours = prediction.hours_until_failure,
            component = prediction.component.as_deref().unwrap_or("-"),
            "Prediction received"
        );
        Ok(prediction)
    }
}
