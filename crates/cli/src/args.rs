use clap::Parser;
use line_report_engine::options::OutputFormat;

/// Command-line flags.
///
/// None of these change which file is read or how lines are filtered; the
/// report configuration is fixed.
#[derive(Parser, Debug)]
#[command(
    name = "line_report",
    version = crate::VERSION,
    about = "Reads sample.txt (or a built-in sample) and prints the lines that meet the minimum length"
)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["line_report"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn json_and_verbosity() {
        let args = Args::try_parse_from(["line_report", "--format", "json", "-vv"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["line_report", "--format", "yaml"]).is_err());
    }

    #[test]
    fn rejects_positional_input() {
        assert!(Args::try_parse_from(["line_report", "other.txt"]).is_err());
    }
}
