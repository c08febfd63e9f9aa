use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `LINE_REPORT_LOG=line_report_engine=debug`.
pub const LOG_ENV: &str = "LINE_REPORT_LOG";

static INIT: Once = Once::new();

/// Map `-v` occurrences to a default filter level.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. `log` records from the engine are bridged
/// into it. Only the first call has any effect.
pub fn init(verbose: u8) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(u8::MAX), "trace");
    }
}
