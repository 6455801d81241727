//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
///
/// Cancellation of a superseded series fetch is deliberately not an error:
/// it resolves to `chart::FetchOutcome::Cancelled` and is discarded without
/// ever surfacing.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Network failure or an unparseable response body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response, carrying the status code.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}
