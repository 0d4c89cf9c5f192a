//! Error types for prediction generation.

use thiserror::Error;

/// Alias for `Result<T, PredictError>`.
pub type PredictResult<T> = Result<T, PredictError>;

/// Errors that can occur while generating predictions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// The requested language code has no template table.
    #[error("unsupported language: \"{0}\"")]
    UnsupportedLanguage(String),

    /// A required profile section is absent and will not be defaulted.
    #[error("profile is missing required field: {0}")]
    MissingField(&'static str),
}
