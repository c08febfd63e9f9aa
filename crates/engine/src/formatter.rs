use crate::error::Result;
use crate::options::OutputFormat;
use crate::report::Report;

/// Render `report` as a text block: three header lines followed by one
/// `- ` entry per filtered line, joined with `\n` and without a trailing
/// terminator.
#[must_use]
pub fn format_report(report: &Report) -> String {
    let mut lines = vec![
        format!("Project: {}", report.project_name()),
        format!("Lines: {}", report.line_count()),
        "Filtered:".to_string(),
    ];
    lines.extend(report.filtered_lines().iter().map(|line| format!("- {line}")));

    lines.join("\n")
}

/// Render `report` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_report(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
