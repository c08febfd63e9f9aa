// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod formatter;
pub mod options;
pub mod reader;
pub mod report;

use crate::config::AppConfig;
use crate::error::Result;
use crate::reader::LineSource;
use crate::report::Report;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub report: Report,
    pub source: LineSource,
}

/// Read the configured input and build its report.
///
/// # Errors
///
/// Returns an error if the input file exists but cannot be read or decoded.
/// A missing input is not an error; the fallback lines are used instead.
pub fn run(config: &AppConfig) -> Result<RunResult> {
    let lines = reader::read_lines(&config.input_path)?;
    let report = Report::build(
        config.project_name.as_str(),
        lines.lines,
        config.min_line_length,
    );
    log::debug!(
        "{}: {} of {} lines kept",
        config.project_name,
        report.filtered_lines().len(),
        report.line_count()
    );

    Ok(RunResult {
        report,
        source: lines.source,
    })
}
