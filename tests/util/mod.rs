/// Helpers for running a server and checking its responses.
pub mod test_server;
