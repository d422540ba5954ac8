pub use error::EncodeError;
pub use request::encode_request;
pub use response::encode_response;

/// Encoding errors.
mod error;
/// Shared writer for message heads and bodies.
mod head;
/// Request encoding.
mod request;
/// Response encoding.
mod response;
