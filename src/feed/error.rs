//! Errors produced while loading the feed.

use thiserror::Error;

/// Failure of the single feed request or of decoding its envelope.
#[derive(Debug, Error)]
pub enum FeedError {
    /// No feed URL was configured at build or run time.
    #[error("no feed URL configured (set MICROSTRUCTURE_API_URL)")]
    MissingUrl,
    /// The request could not be issued or the body could not be read.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// The body was JSON but not a feed document.
    #[error("unexpected feed document: {0}")]
    Envelope(String),
}
