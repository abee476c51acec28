use thiserror::Error;

use common::OptionsError;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("Failed to parse {filename}: {}", .errors.join("; "))]
    Parse {
        filename: String,
        errors: Vec<String>,
    },
    #[error("Invalid transform config: {0}")]
    Config(#[from] serde_json::Error),
}
