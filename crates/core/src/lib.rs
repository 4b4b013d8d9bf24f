//! Session core for the equipment RUL prediction dashboard
//!
//! This crate provides the core functionality for:
//! - Sample telemetry retrieval and delimited-text parsing
//! - Remote inference over HTTP
//! - Priority classification from predicted RUL hours
//! - The session state machine coordinating the above

pub mod catalog;
pub mod classify;
pub mod dataset;
pub mod error;
pub mod inference;
pub mod models;
pub mod session;
pub mod settings;

pub use classify::{classify, PriorityTier};
pub use error::{AnalysisError, DatasetError, InferenceError};
pub use models::*;
pub use session::{AnalysisTicket, Phase, SessionController, SessionState};
pub use settings::SessionSettings;
