//! Session configuration

use serde::Deserialize;

/// Session configuration, loaded from the environment
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Inference endpoint base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Sample dataset resource URL
    #[serde(default = "default_dataset_url")]
    pub dataset_url: String,

    /// Request timeout applied to both network calls, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_dataset_url() -> String {
    "http://localhost:3000/sample_0_data.csv".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            dataset_url: default_dataset_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl SessionSettings {
    /// Load configuration from `RUL_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("RUL"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_default())
    }
}
