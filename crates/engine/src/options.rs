use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text block
    #[default]
    Text,
    Json,
}
