pub use config::*;
pub use path::Params;
pub use router::*;
pub use server::*;

/// Entry point for starting a server.
mod server;
/// Config for a server.
mod config;
/// Router for routing requests.
mod router;
/// Path templates and the parameters they capture.
mod path;
/// Connection for storing state about a connection to a client.
mod connection;
/// Output buffering for non-blocking streams.
mod output;
/// Utility functions for polling IO and enabling async listening.
mod poll;
/// A slab data structure implementation for storing connections.
mod slab;
