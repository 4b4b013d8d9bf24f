//! CLI command implementations

pub mod analyze;
pub mod catalog;
pub mod history;
