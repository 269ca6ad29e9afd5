use thiserror::Error;

/// Errors surfaced at the binary boundary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown reading type {0:?}; expected one of: {1}")]
    UnknownReadingType(String, String),

    #[error("Could not encode form: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
