//! The analyze command: one full session flow

use anyhow::{Context, Result};
use reqwest::Client;
use rul_session::dataset::HttpDatasetSource;
use rul_session::inference::HttpInferenceClient;
use rul_session::{catalog, SessionController, SessionSettings};
use std::time::Duration;
use url::Url;

use crate::output::{self, OutputFormat};

pub async fn run(
    settings: &SessionSettings,
    model: &str,
    signal: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    if !catalog::is_known_model(model) {
        output::print_warning(&format!(
            "Unknown model {:?}; known models: {}",
            model,
            catalog::MODEL_CATALOG.join(", ")
        ));
    }
    if let Some(signal) = signal {
        if !catalog::is_known_signal(signal) {
            output::print_warning(&format!(
                "Unknown signal {:?}; known signals: {}",
                signal,
                catalog::SIGNAL_CATALOG.join(", ")
            ));
        }
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()
        .context("Failed to create HTTP client")?;

    let dataset_url = Url::parse(&settings.dataset_url).context("Invalid dataset URL")?;
    let api_url = Url::parse(&settings.api_url).context("Invalid API URL")?;

    let datasets = HttpDatasetSource::new(client.clone(), dataset_url);
    let inference =
        HttpInferenceClient::new(client, &api_url).context("Invalid inference endpoint")?;

    let mut controller = SessionController::new(datasets, inference);
    controller.select_model(model);
    if let Some(signal) = signal {
        controller.select_signal(signal);
    }

    controller.analyze().await;

    let outcome = controller
        .state()
        .outcome()
        .context("Analysis finished without an outcome")?;
    output::render_outcome(model, outcome, controller.state().signal(), format);

    if matches!(format, OutputFormat::Table) {
        println!();
        super::history::show(format);
    }

    Ok(())
}
