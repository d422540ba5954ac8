use thiserror::Error;

/// Error for when an HTTP message can't be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The stream ended in the middle of a message, or before a message started.
    #[error("unexpected end of stream")]
    UnexpectedEnd,
    /// The structure of a request is broken (bad start line, missing CRLF, bad chunk framing).
    #[error("invalid request")]
    InvalidRequest,
    /// The structure of a response is broken (bad status line, missing CRLF, bad chunk framing).
    #[error("invalid response")]
    InvalidResponse,
    /// The request method is not one of the supported methods.
    #[error("invalid method")]
    InvalidMethod,
    /// The request target could not be parsed as a URL.
    #[error("invalid url")]
    InvalidUrl,
    /// The protocol version is not supported.
    #[error("invalid http version")]
    InvalidVersion,
    /// The status code of a response is not a number.
    #[error("invalid status")]
    InvalidStatus,
    /// A header name is empty or contains characters that are not allowed in a token.
    #[error("invalid header name")]
    InvalidHeaderName,
    /// A header value failed its grammar.
    #[error("invalid header value")]
    InvalidHeaderValue,
    /// A start line, header line, or chunk size line is longer than the configured maximum.
    #[error("line too long")]
    LineTooLong,
    /// The message has more headers than the configured maximum.
    #[error("too many headers")]
    TooManyHeaders,
    /// The headers of the message take up more bytes than the configured maximum.
    #[error("headers too large")]
    HeadersTooLarge,
    /// A chunked body has more chunks than the configured maximum.
    #[error("too many chunks")]
    TooManyChunks,
    /// The body is larger than the configured maximum.
    #[error("body too large")]
    BodyTooLarge,
    /// An IO error other than the end of the stream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Checks if the error comes from one of the configured limits.
    pub fn is_limit(&self) -> bool {
        matches!(self,
            DecodeError::LineTooLong
            | DecodeError::TooManyHeaders
            | DecodeError::HeadersTooLarge
            | DecodeError::TooManyChunks
            | DecodeError::BodyTooLarge)
    }
}

/// The kind of message being decoded. Decides which structural error is reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Request,
    Response,
}

impl MessageKind {
    /// The structural error for this kind of message.
    pub fn malformed(self) -> DecodeError {
        match self {
            MessageKind::Request => DecodeError::InvalidRequest,
            MessageKind::Response => DecodeError::InvalidResponse,
        }
    }
}
