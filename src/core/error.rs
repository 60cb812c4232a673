use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Provider-level variants (`Http`, `Status`, `Data`, ...) never escape a fetch
/// chain; the chains log them and fall through to the next provider.
#[derive(Debug, Error)]
pub enum DigestError {
    /// An error occurred during an HTTP request (including timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A JSON payload could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a snapshot failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from a provider was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A keyed provider was called without its API key configured.
    #[error("missing API key: {0}")]
    MissingApiKey(&'static str),

    /// The watchlist contained no assets to process.
    #[error("watchlist is empty: nothing to process")]
    EmptyWatchlist,

    /// A spawned fetch task failed to complete (panic or cancellation).
    #[error("fetch task failed: {0}")]
    Task(String),

    /// The rendering collaborator rejected the digest.
    #[error("render failed: {0}")]
    Render(String),
}

impl From<tokio::task::JoinError> for DigestError {
    fn from(e: tokio::task::JoinError) -> Self {
        DigestError::Task(e.to_string())
    }
}
