//! Shared error types for the services crate.

use thiserror::Error;

use companion_core::model::QuizValidationError;

/// Errors emitted by `QuizGenService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizGenError {
    #[error("quiz generation is not configured")]
    Disabled,
    #[error("the model returned an empty response")]
    EmptyResponse,
    #[error("quiz generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("the model response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuizValidationError),
}
