//! Priority classification from predicted RUL hours

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hours below which a prediction is high priority
pub const HIGH_PRIORITY_BELOW: f64 = 200.0;

/// Hours below which a prediction is medium priority
pub const MEDIUM_PRIORITY_BELOW: f64 = 1000.0;

/// Maintenance triage tier derived from RUL hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::High => "High",
            PriorityTier::Medium => "Medium",
            PriorityTier::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map predicted hours-until-failure to a triage tier.
///
/// Boundary values belong to the lower of the two adjacent tiers:
/// 200 hours is Medium and 1000 hours is Low. This is user-visible
/// triage policy and must not drift.
pub fn classify(hours: f64) -> PriorityTier {
    if hours < HIGH_PRIORITY_BELOW {
        PriorityTier::High
    } else if hours < MEDIUM_PRIORITY_BELOW {
        PriorityTier::Medium
    } else {
        PriorityTier::Low
    }
}
