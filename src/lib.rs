/// Command-line arguments for the demo server.
pub mod args;
/// HTTP data types.
pub mod common;
/// Components for writing HTTP requests and responses.
pub mod encode;
/// Components for parsing HTTP requests and responses.
pub mod parse;
/// Components for running an HTTP server and handling requests.
pub mod server;
/// A blocking HTTP client.
pub mod client;

/// Utility components.
pub mod util;
