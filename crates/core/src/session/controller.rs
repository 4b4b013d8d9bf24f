//! Session controller
//!
//! Sequences the dataset loader, inference client, and classifier for
//! one analysis attempt, and absorbs any pipeline failure into a
//! synthetic estimate so the session always reaches `Complete`. The
//! failure is still logged with its stage; only the user-facing flow
//! tolerates it.

use crate::dataset::DatasetSource;
use crate::error::AnalysisError;
use crate::inference::InferenceService;
use crate::models::Analysis;
use crate::session::state::{AnalysisTicket, Phase, SessionState};
use tracing::{debug, info, warn};

/// Owns the session state and its two I/O collaborators
pub struct SessionController<D, I> {
    state: SessionState,
    datasets: D,
    inference: I,
}

impl<D: DatasetSource, I: InferenceService> SessionController<D, I> {
    pub fn new(datasets: D, inference: I) -> Self {
        Self {
            state: SessionState::new(),
            datasets,
            inference,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Record a model selection; any prior result is discarded and
    /// in-flight work is invalidated.
    pub fn select_model(&mut self, model: impl Into<String>) {
        let model = model.into();
        debug!(model = %model, "Model selected");
        self.state = self.state.clone().select_model(model);
    }

    /// Select a telemetry signal for visualization. Independent of the
    /// analysis lifecycle.
    pub fn select_signal(&mut self, signal: impl Into<String>) {
        self.state = self.state.clone().select_signal(signal);
    }

    /// Begin an analysis attempt. Returns `None` when no selection
    /// exists or an attempt is already outstanding.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        let (next, ticket) = self.state.clone().request_analysis();
        self.state = next;
        if let Some(ticket) = &ticket {
            info!(model = %ticket.model, "Analysis started");
        }
        ticket
    }

    /// Run the pipeline for a ticket. Any failure is logged and
    /// collapsed into a fallback estimate; the caller always gets a
    /// displayable outcome.
    pub async fn run_pipeline(&self, ticket: &AnalysisTicket) -> Analysis {
        match self.try_pipeline().await {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!(
                    stage = err.stage(),
                    model = %ticket.model,
                    error = %err,
                    "Analysis pipeline failed, substituting estimate"
                );
                Analysis::fallback()
            }
        }
    }

    /// The loader must finish before inference starts; inference
    /// depends on the parsed rows.
    async fn try_pipeline(&self) -> Result<Analysis, AnalysisError> {
        let sample = self.datasets.load().await?;
        let prediction = self.inference.predict(&sample).await?;
        Ok(Analysis::from_prediction(prediction))
    }

    /// Publish a finished pipeline's outcome. Returns false when the
    /// outcome was stale and discarded.
    pub fn finish_analysis(&mut self, ticket: AnalysisTicket, outcome: Analysis) -> bool {
        let applied = self.state.is_current(&ticket);
        if applied {
            info!(
                model = %ticket.model,
                hours = outcome.hours_until_failure,
                priority = %outcome.priority,
                estimated = outcome.estimated,
                "Analysis complete"
            );
        } else {
            debug!(model = %ticket.model, "Discarding stale analysis result");
        }
        self.state = self.state.clone().apply_outcome(&ticket, outcome);
        applied
    }

    /// Drive one full analysis attempt end to end. Returns false when
    /// the attempt could not start or its result was discarded as
    /// stale.
    pub async fn analyze(&mut self) -> bool {
        let Some(ticket) = self.begin_analysis() else {
            return false;
        };
        let outcome = self.run_pipeline(&ticket).await;
        self.finish_analysis(ticket, outcome)
    }
}
