//! Immutable session state and its pure transitions
//!
//! Nothing in this module performs I/O. Every transition consumes the
//! state value and returns the next one, which keeps the late-result
//! race testable: a pipeline invocation is tagged with the epoch it was
//! launched under, and an outcome only applies while that epoch is
//! still current.

use crate::models::Analysis;

/// Coarse lifecycle phase derived from the state value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No model selected
    Idle,
    /// Model chosen, analysis not requested
    Selected,
    /// Analysis requested, result pending
    Analyzing,
    /// Result and priority available (possibly a fallback)
    Complete,
}

/// Tags one pipeline invocation with the selection it was launched for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub model: String,
    pub(crate) epoch: u64,
}

/// The session's single mutable resource, held by value
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    model: Option<String>,
    analyzing: bool,
    outcome: Option<Analysis>,
    signal: Option<String>,
    epoch: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.model, self.analyzing, &self.outcome) {
            (None, _, _) => Phase::Idle,
            (Some(_), true, _) => Phase::Analyzing,
            (Some(_), false, Some(_)) => Phase::Complete,
            (Some(_), false, None) => Phase::Selected,
        }
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn outcome(&self) -> Option<&Analysis> {
        self.outcome.as_ref()
    }

    pub fn signal(&self) -> Option<&str> {
        self.signal.as_deref()
    }

    /// Whether a ticket still matches the current selection epoch
    pub fn is_current(&self, ticket: &AnalysisTicket) -> bool {
        ticket.epoch == self.epoch
    }

    /// Record a model selection. Any prior outcome is discarded, the
    /// request flag resets, and the epoch advances so that in-flight
    /// work for the previous selection can no longer land.
    pub fn select_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self.analyzing = false;
        self.outcome = None;
        self.epoch += 1;
        self
    }

    /// Visualization selection, orthogonal to the analysis lifecycle
    pub fn select_signal(mut self, signal: impl Into<String>) -> Self {
        self.signal = Some(signal.into());
        self
    }

    /// Request analysis for the current selection. Yields a ticket only
    /// when a selection exists, nothing is in flight, and no result is
    /// already held; in every other case the request is a no-op.
    pub fn request_analysis(self) -> (Self, Option<AnalysisTicket>) {
        if self.analyzing || self.outcome.is_some() {
            return (self, None);
        }
        let Some(model) = self.model.clone() else {
            return (self, None);
        };

        let ticket = AnalysisTicket {
            model,
            epoch: self.epoch,
        };
        let mut next = self;
        next.analyzing = true;
        (next, Some(ticket))
    }

    /// Apply a finished pipeline's outcome. An outcome carrying a
    /// superseded epoch is discarded unchanged: a late response must
    /// not overwrite a newer selection's reset state.
    pub fn apply_outcome(mut self, ticket: &AnalysisTicket, outcome: Analysis) -> Self {
        if !self.is_current(ticket) {
            return self;
        }
        self.analyzing = false;
        self.outcome = Some(outcome);
        self
    }
}
