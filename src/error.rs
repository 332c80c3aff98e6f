//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SdkError {
    /// The server-supplied message, if the server rejected the request.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            SdkError::Http(HttpError::Rejected { message, .. }) => Some(message),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Any response whose status is not 200. `message` is the body's
    /// `message` field, verbatim.
    #[error("Phlox returned {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Rejected { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// A success body that does not match the schema of its endpoint.
#[derive(Error, Debug)]
#[error("failed to decode {endpoint} response: {source}")]
pub struct DecodeError {
    pub endpoint: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub fn new(endpoint: &'static str, source: serde_json::Error) -> Self {
        Self { endpoint, source }
    }
}
