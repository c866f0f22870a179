use thiserror::Error;

/// Errors raised by the sentiment pipeline itself, as opposed to failures
/// bubbling up from the model backend or the artifact fetch.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// The vocabulary metadata document is missing a field or carries a
    /// value the pipeline cannot work with.
    #[error("invalid vocabulary metadata: {0}")]
    Metadata(String),

    /// The metadata document could not be parsed at all.
    #[error("metadata parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A batch prediction was requested with no input texts.
    #[error("no input texts to classify")]
    EmptyBatch,
}
