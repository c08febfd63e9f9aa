// crates/cli/src/lib.rs
pub mod args;
pub mod error;
pub mod logging;
pub mod presentation;

use crate::args::Args;
use crate::error::Result;
use line_report_engine::config::AppConfig;
use line_report_engine::reader::LineSource;
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load the fixed configuration, build the report and write it to `out`.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or the report cannot be
/// written.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = AppConfig::load();
    let result = line_report_engine::run(&config)?;

    match &result.source {
        LineSource::File(path) => log::info!("report built from {}", path.display()),
        LineSource::Fallback => log::info!(
            "{} is missing or not a regular file, reporting built-in sample lines",
            config.input_path.display()
        ),
    }

    presentation::write_report(out, &result.report, args.format)
}
