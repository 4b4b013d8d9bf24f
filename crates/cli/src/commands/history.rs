//! Past maintenance history table

use rul_session::catalog::MAINTENANCE_HISTORY;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_table, OutputFormat};

#[derive(Tabled, Serialize)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: &'static str,
    #[tabled(rename = "Component")]
    component: &'static str,
    #[tabled(rename = "Maintenance Notes")]
    notes: &'static str,
}

pub fn show(format: OutputFormat) {
    let rows: Vec<HistoryRow> = MAINTENANCE_HISTORY
        .iter()
        .map(|r| HistoryRow {
            date: r.date,
            component: r.component,
            notes: r.notes,
        })
        .collect();
    print_table(&rows, format);
}
