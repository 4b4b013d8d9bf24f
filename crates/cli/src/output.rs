//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use rul_session::{Analysis, PriorityTier};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a table from a list of items
pub fn print_table<T: Tabled + Serialize>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", "No items found".yellow());
                return;
            }
            let table = Table::new(items).with(Style::rounded()).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "!".yellow().bold(), message);
}

/// Priority label colored the way the dashboard cards were
pub fn color_priority(priority: PriorityTier) -> String {
    let label = format!("Priority Level: {}", priority);
    match priority {
        PriorityTier::High => label.red().bold().to_string(),
        PriorityTier::Medium => label.yellow().bold().to_string(),
        PriorityTier::Low => label.green().bold().to_string(),
    }
}

/// Render a completed analysis
pub fn render_outcome(model: &str, outcome: &Analysis, signal: Option<&str>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(outcome) {
                println!("{}", json);
            }
        }
        OutputFormat::Table => {
            println!("Model: {}", model);
            println!("{}", color_priority(outcome.priority));
            println!(
                "Expected {:.0} Operational Hours Until Possible Failure",
                outcome.hours_until_failure
            );
            if let Some(component) = &outcome.component {
                println!("Component: {}", component);
            }
            if outcome.estimated {
                print_warning("Estimated value: live prediction unavailable");
            }
            if let Some(signal) = signal {
                println!("Selected visualization: {}", signal);
            }
        }
    }
}
