use thiserror::Error;

/// What can go wrong when talking to the provider. "No data" is not in here:
/// an unknown landmark or an empty page is a valid answer, not an error.
#[derive(Debug, Error)]
pub enum MapsError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("provider returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: String,
        message: Option<String>,
    },
}
