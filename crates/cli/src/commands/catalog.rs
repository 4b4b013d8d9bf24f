//! Catalog listing commands

use rul_session::catalog::{MODEL_CATALOG, SIGNAL_CATALOG};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_table, OutputFormat};

#[derive(Tabled, Serialize)]
struct ModelRow {
    #[tabled(rename = "Model")]
    model: &'static str,
}

#[derive(Tabled, Serialize)]
struct SignalRow {
    #[tabled(rename = "Signal")]
    signal: &'static str,
}

pub fn list_models(format: OutputFormat) {
    let rows: Vec<ModelRow> = MODEL_CATALOG.iter().map(|m| ModelRow { model: m }).collect();
    print_table(&rows, format);
}

pub fn list_signals(format: OutputFormat) {
    let rows: Vec<SignalRow> = SIGNAL_CATALOG
        .iter()
        .map(|s| SignalRow { signal: s })
        .collect();
    print_table(&rows, format);
}
