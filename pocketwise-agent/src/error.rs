//! Error types for text generation

use std::time::Duration;
use thiserror::Error;

/// Why the text-generation service did not produce a reply.
///
/// These never reach the person chatting; the agent swaps in a fallback.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("no text-generation backend configured")]
    NotConfigured,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} returned {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("empty response")]
    Empty,

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
