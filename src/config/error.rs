//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading the configuration document. Fatal to any render.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not valid JSON")]
    Json(PathBuf, #[source] serde_json::Error),
}
