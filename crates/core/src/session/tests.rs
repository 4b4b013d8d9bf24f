//! Controller tests against stub collaborators

use super::*;
use crate::classify::{classify, PriorityTier};
use crate::dataset::DatasetSource;
use crate::error::{DatasetError, InferenceError};
use crate::inference::InferenceService;
use crate::models::{CellValue, ParseMeta, Prediction, TelemetryRow, TelemetrySample};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn sample() -> TelemetrySample {
    let mut row = TelemetryRow::new();
    row.insert("engine_temp".into(), CellValue::Number(92.5));
    TelemetrySample {
        data: vec![row],
        meta: ParseMeta {
            fields: vec!["engine_temp".into()],
            delimiter: ',',
        },
    }
}

struct StubDatasets {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl StubDatasets {
    fn ok() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
                fail: false,
            },
            calls,
        )
    }

    fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail: true,
        }
    }
}

#[async_trait]
impl DatasetSource for StubDatasets {
    async fn load(&self) -> Result<TelemetrySample, DatasetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(DatasetError::Retrieval("404 Not Found".into()))
        } else {
            Ok(sample())
        }
    }
}

struct StubInference {
    calls: Arc<AtomicUsize>,
    response: Result<Prediction, ()>,
}

impl StubInference {
    fn returning(hours: f64, component: Option<&str>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
                response: Ok(Prediction {
                    hours_until_failure: hours,
                    component: component.map(String::from),
                }),
            },
            calls,
        )
    }

    fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            response: Err(()),
        }
    }
}

#[async_trait]
impl InferenceService for StubInference {
    async fn predict(&self, _sample: &TelemetrySample) -> Result<Prediction, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(prediction) => Ok(prediction.clone()),
            Err(()) => Err(InferenceError::Transport("connection refused".into())),
        }
    }
}

#[tokio::test]
async fn test_analyze_without_selection_is_noop() {
    let (datasets, dataset_calls) = StubDatasets::ok();
    let (inference, _) = StubInference::returning(150.0, None);
    let mut controller = SessionController::new(datasets, inference);

    assert!(!controller.analyze().await);
    assert_eq!(controller.phase(), Phase::Idle);
    assert_eq!(dataset_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_x9_1000_at_150_hours_is_high_priority() {
    let (datasets, _) = StubDatasets::ok();
    let (inference, _) = StubInference::returning(150.0, Some("Engine"));
    let mut controller = SessionController::new(datasets, inference);

    controller.select_model("X9 1000");
    assert!(controller.analyze().await);

    assert_eq!(controller.phase(), Phase::Complete);
    let outcome = controller.state().outcome().unwrap();
    assert_eq!(outcome.hours_until_failure, 150.0);
    assert_eq!(outcome.priority, PriorityTier::High);
    assert_eq!(outcome.component.as_deref(), Some("Engine"));
    assert!(!outcome.estimated);
}

#[tokio::test]
async fn test_x9_1100_at_1000_hours_is_low_priority() {
    let (datasets, _) = StubDatasets::ok();
    let (inference, _) = StubInference::returning(1000.0, None);
    let mut controller = SessionController::new(datasets, inference);

    controller.select_model("X9 1100");
    assert!(controller.analyze().await);
    assert_eq!(
        controller.state().outcome().unwrap().priority,
        PriorityTier::Low
    );
}

#[tokio::test]
async fn test_duplicate_analyze_starts_no_second_pipeline() {
    let (datasets, dataset_calls) = StubDatasets::ok();
    let (inference, inference_calls) = StubInference::returning(150.0, None);
    let mut controller = SessionController::new(datasets, inference);

    controller.select_model("X9 1000");
    let ticket = controller.begin_analysis().unwrap();

    // Re-entrant trigger while Analyzing is a no-op
    assert!(controller.begin_analysis().is_none());
    assert_eq!(controller.phase(), Phase::Analyzing);

    let outcome = controller.run_pipeline(&ticket).await;
    assert!(controller.finish_analysis(ticket, outcome));

    assert_eq!(dataset_calls.load(Ordering::SeqCst), 1);
    assert_eq!(inference_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_inference_failure_yields_fallback() {
    let (datasets, _) = StubDatasets::ok();
    let mut controller = SessionController::new(datasets, StubInference::failing());

    controller.select_model("X9 1000");
    assert!(controller.analyze().await);

    assert_eq!(controller.phase(), Phase::Complete);
    let outcome = controller.state().outcome().unwrap();
    assert!(outcome.estimated);
    assert!(outcome.hours_until_failure >= 10.0);
    assert!(outcome.hours_until_failure < 110.0);
    assert_eq!(outcome.priority, classify(outcome.hours_until_failure));
}

#[tokio::test]
async fn test_retrieval_failure_still_reaches_complete() {
    let (inference, inference_calls) = StubInference::returning(150.0, None);
    let mut controller = SessionController::new(StubDatasets::failing(), inference);

    controller.select_model("X9 1000");
    assert!(controller.analyze().await);

    assert_eq!(controller.phase(), Phase::Complete);
    assert!(controller.state().outcome().unwrap().estimated);
    // Loader failed, so inference was never invoked
    assert_eq!(inference_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_reselection_clears_result() {
    let (datasets, _) = StubDatasets::ok();
    let (inference, _) = StubInference::returning(150.0, None);
    let mut controller = SessionController::new(datasets, inference);

    controller.select_model("X9 1000");
    controller.analyze().await;
    assert_eq!(controller.phase(), Phase::Complete);

    controller.select_model("X9 1100");
    assert_eq!(controller.phase(), Phase::Selected);
    assert!(controller.state().outcome().is_none());
}

#[tokio::test]
async fn test_stale_result_is_suppressed() {
    let (datasets, _) = StubDatasets::ok();
    let (inference, _) = StubInference::returning(150.0, None);
    let mut controller = SessionController::new(datasets, inference);

    controller.select_model("X9 1000");
    let ticket = controller.begin_analysis().unwrap();
    let outcome = controller.run_pipeline(&ticket).await;

    // Selection changes before the in-flight result lands
    controller.select_model("X9 1100");
    assert!(!controller.finish_analysis(ticket, outcome));

    assert_eq!(controller.phase(), Phase::Selected);
    assert!(controller.state().outcome().is_none());
}

#[tokio::test]
async fn test_signal_selection_never_blocks_analysis() {
    let (datasets, _) = StubDatasets::ok();
    let (inference, _) = StubInference::returning(150.0, None);
    let mut controller = SessionController::new(datasets, inference);

    controller.select_signal("Oil Pressure");
    controller.select_model("X9 1000");
    let ticket = controller.begin_analysis().unwrap();
    controller.select_signal("Engine Vibration");

    let outcome = controller.run_pipeline(&ticket).await;
    assert!(controller.finish_analysis(ticket, outcome));
    assert_eq!(controller.phase(), Phase::Complete);
    assert_eq!(controller.state().signal(), Some("Engine Vibration"));
}
