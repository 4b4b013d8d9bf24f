//! Core data models for the RUL session

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::classify::{classify, PriorityTier};

/// Lower bound (inclusive) of the synthetic fallback estimate, in hours
pub const FALLBACK_HOURS_MIN: i64 = 10;

/// Upper bound (exclusive) of the synthetic fallback estimate, in hours
pub const FALLBACK_HOURS_MAX: i64 = 110;

/// A single parsed telemetry cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Null,
}

/// One telemetry sample row, column name to typed scalar
pub type TelemetryRow = BTreeMap<String, CellValue>;

/// Parser configuration surfaced to the inference endpoint alongside
/// the parsed rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseMeta {
    pub fields: Vec<String>,
    pub delimiter: char,
}

/// A parsed telemetry dataset, immutable once loaded.
///
/// Serializes directly as the `{ "data": [...], "meta": {...} }`
/// envelope the prediction endpoint expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub data: Vec<TelemetryRow>,
    pub meta: ParseMeta,
}

impl TelemetrySample {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Raw prediction returned by the inference endpoint. Extra response
/// fields are tolerated and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub hours_until_failure: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

/// A completed analysis outcome ready for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub hours_until_failure: f64,
    pub component: Option<String>,
    pub priority: PriorityTier,
    /// True when the value is a synthetic estimate substituted after a
    /// pipeline failure
    pub estimated: bool,
    pub generated_at: i64,
}

impl Analysis {
    /// Build an outcome from an endpoint prediction. The priority tier
    /// is derived here, so a rendered hour value can never disagree
    /// with its tier.
    pub fn from_prediction(prediction: Prediction) -> Self {
        Self {
            priority: classify(prediction.hours_until_failure),
            hours_until_failure: prediction.hours_until_failure,
            component: prediction.component,
            estimated: false,
            generated_at: Utc::now().timestamp(),
        }
    }

    /// Synthetic estimate substituted when the pipeline fails: whole
    /// hours drawn uniformly from [10, 110), no component attribution.
    pub fn fallback() -> Self {
        let hours = rand::thread_rng().gen_range(FALLBACK_HOURS_MIN..FALLBACK_HOURS_MAX) as f64;
        Self {
            priority: classify(hours),
            hours_until_failure: hours,
            component: None,
            estimated: true,
            generated_at: Utc::now().timestamp(),
        }
    }
}
