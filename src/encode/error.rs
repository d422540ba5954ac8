use thiserror::Error;

/// Error for when an HTTP message can't be encoded.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A header name or value contains a line break, which would let it inject extra header lines.
    #[error("invalid value for header {0}")]
    InvalidHeaderValue(String),
}
