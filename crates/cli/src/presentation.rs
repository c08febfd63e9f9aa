// crates/cli/src/presentation.rs
use crate::error::Result;
use line_report_engine::formatter;
use line_report_engine::options::OutputFormat;
use line_report_engine::report::Report;
use std::io::Write;

/// Write the rendered report followed by a single newline.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    let rendered = formatter::render(report, format)?;
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_ends_with_one_newline() {
        let report = Report::build("demo", vec!["ab".into(), "cde".into()], 2);
        let mut buf = Vec::new();

        write_report(&mut buf, &report, OutputFormat::Text).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Project: demo\nLines: 2\nFiltered:\n- ab\n- cde\n"
        );
    }

    #[test]
    fn json_output_is_parseable() {
        let report = Report::build("demo", vec!["ab".into(), "f".into()], 2);
        let mut buf = Vec::new();

        write_report(&mut buf, &report, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["project_name"], "demo");
        assert_eq!(value["line_count"], 2);
        assert_eq!(value["filtered_lines"], serde_json::json!(["ab"]));
    }
}
