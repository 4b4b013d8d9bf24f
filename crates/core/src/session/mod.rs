//! Session state machine and controller

mod controller;
mod state;

pub use controller::SessionController;
pub use state::{AnalysisTicket, Phase, SessionState};

#[cfg(test)]
mod tests;
