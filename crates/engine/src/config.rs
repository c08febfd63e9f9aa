use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_PROJECT_NAME: &str = "python-app";
pub const DEFAULT_INPUT_PATH: &str = "sample.txt";
pub const DEFAULT_MIN_LINE_LENGTH: usize = 3;

/// Run parameters for a single report.
///
/// The binary always uses [`AppConfig::load`]; the builder exists for library
/// callers and tests that need a different input or threshold.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct AppConfig {
    #[builder(default = "DEFAULT_PROJECT_NAME.to_string()")]
    pub project_name: String,
    #[builder(default = "PathBuf::from(DEFAULT_INPUT_PATH)")]
    pub input_path: PathBuf,
    #[builder(default = "DEFAULT_MIN_LINE_LENGTH")]
    pub min_line_length: usize,
}

impl AppConfig {
    /// Returns the fixed configuration.
    #[must_use]
    pub fn load() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            min_line_length: DEFAULT_MIN_LINE_LENGTH,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load()
    }
}
