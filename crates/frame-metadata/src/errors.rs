use thiserror::Error;

/// Errors raised at the edges of the renderer: config validation and decoding.
///
/// Rendering itself never fails.
#[derive(Debug, Error)]
pub enum FrameMetadataError {
    #[error("invalid frame version {0:?}: must be non-empty and contain no whitespace")]
    InvalidVersion(String),
    #[error("failed to decode frame description: {0}")]
    Decode(#[from] serde_json::Error),
}
