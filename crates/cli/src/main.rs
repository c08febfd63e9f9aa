use clap::Parser;
use line_report_cli::args::Args;
use line_report_cli::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdout = std::io::stdout();
    match line_report_cli::run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
