//! Output formatting

use crate::engine::executor::ExecutionResult;
use crate::error::ParkingError;
use crate::output::human::{format_human, format_human_fatal};
use crate::output::json::{format_json, format_json_fatal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_output(result: &ExecutionResult, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(result),
        OutputFormat::Json => format_json(result),
    }
}

/// Render an error that ended the session
pub fn format_fatal(error: &ParkingError, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human_fatal(error),
        OutputFormat::Json => format_json_fatal(error),
    }
}
