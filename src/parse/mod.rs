pub use decode::{decode_request, decode_request_streaming, decode_response, decode_response_to_head};
pub use error::DecodeError;
pub use limits::Limits;

/// Body framing and body parsers.
pub mod body;
/// Decoding errors.
pub mod error;
/// Size limits for decoding.
pub mod limits;
/// Parse trait and other basic parsing types.
pub mod parse;
/// Request parsing components.
pub mod request;
/// Response parsing components.
pub mod response;

/// Parser for CRLF lines.
pub(crate) mod crlf_line;
/// Blocking decode functions built on the resumable parsers.
mod decode;
/// Deframing components (or, in other words, stateful IO reading).
mod deframe;
/// Dispatch of header lines into typed message fields.
mod dispatch;
/// error_take method utility.
pub(crate) mod error_take;
/// Parser for headers.
mod headers;
/// Generic parser for HTTP messages. (Request and response parsers compose over this)
mod message;

/// Utility for testing parsers.
#[cfg(test)]
mod test_util;
