use std::io::{BufReader, ErrorKind, Read, Write};
use std::net::SocketAddr;

use crate::common::request::Request;
use crate::parse::error::DecodeError;
use crate::parse::limits::Limits;
use crate::parse::parse::{Parse, ParseStatus};
use crate::parse::request::RequestParser;
use crate::server::connection::ReadRequestError::{IoErr, ParseErr};
use crate::server::connection::ReadRequestResult::{Closed, Error, NotReady, Ready};
use crate::server::output::OutputBuffer;

/// Interim response sent to clients waiting with "Expect: 100-continue".
const CONTINUE_RESPONSE: &[u8] = b"HTTP/1.1 100 Continue\r\n\r\n";

/// Size of connection read buffers.
const READ_BUF_SIZE: usize = 4096;

/// Initial size of connection write buffers.
const WRITE_BUF_SIZE: usize = 4096;

/// The result of attempting to read a request.
pub enum ReadRequestResult {
    /// There is not enough data yet for a request to be fully parsed.
    NotReady,
    /// A new request has been parsed.
    Ready(Request),
    /// An error occurred while trying to read a request.
    Error(ReadRequestError),
    /// The connection was closed.
    Closed,
}

/// An error that may result from trying to read a request.
#[derive(Debug)]
pub enum ReadRequestError {
    /// The request could not be decoded.
    ParseErr(DecodeError),
    /// An unhandled IO error.
    IoErr(std::io::Error),
}

/// A connection to a client. Keeps the state of a partially read request between readiness events,
/// and the output the stream was not ready to take.
pub struct Connection<S: Read + Write> {
    /// The address of the client.
    pub addr: SocketAddr,
    reader: BufReader<S>,
    output: OutputBuffer,
    parser: Option<RequestParser>,
    limits: Limits,
    continue_sent: bool,
    closing: bool,
}

impl<S: Read + Write> Connection<S> {
    /// Creates a new connection out of the given address and stream.
    pub fn new(addr: SocketAddr, stream: S, limits: Limits) -> Connection<S> {
        Connection {
            addr,
            reader: BufReader::with_capacity(READ_BUF_SIZE, stream),
            output: OutputBuffer::with_capacity(WRITE_BUF_SIZE),
            parser: Some(RequestParser::new(limits)),
            limits,
            continue_sent: false,
            closing: false,
        }
    }

    /// Attempts to read a request and parse it from the underlying stream.
    /// Sends "100 Continue" once if the client is waiting for it before sending the body.
    pub fn read_request(&mut self) -> ReadRequestResult {
        let limits = self.limits;
        let parser = self.parser.take().unwrap_or_else(|| RequestParser::new(limits));

        match parser.parse(&mut self.reader) {
            Ok(ParseStatus::Done(request)) => {
                self.continue_sent = false;
                Ready(request)
            }
            Ok(ParseStatus::IoErr(parser, err)) if err.kind() == ErrorKind::WouldBlock => {
                let send_continue = parser.awaiting_continue() && !self.continue_sent;
                self.parser = Some(parser);
                if send_continue {
                    self.continue_sent = true;
                    if let Err(err) = self.write_all(CONTINUE_RESPONSE).and_then(|_| self.flush()) {
                        return Error(IoErr(err));
                    }
                }
                NotReady
            }
            Ok(ParseStatus::IoErr(parser, err)) if is_closed(&parser, &err) => Closed,
            Ok(ParseStatus::IoErr(_, err)) if err.kind() == ErrorKind::UnexpectedEof => Error(ParseErr(DecodeError::UnexpectedEnd)),
            Ok(ParseStatus::IoErr(_, err)) => Error(IoErr(err)),
            Err(err) => Error(ParseErr(err))
        }
    }

    /// Returns true if some output is still waiting for the stream to become writable.
    pub fn has_pending_output(&self) -> bool {
        !self.output.is_empty()
    }

    /// Marks this connection to be closed once its pending output is written.
    pub fn close_after_output(&mut self) {
        self.closing = true;
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    #[cfg(test)]
    pub fn stream_mut(&mut self) -> &mut S {
        self.reader.get_mut()
    }
}

impl<S: Read + Write> Write for Connection<S> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.output.push(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.output.write_to(self.reader.get_mut())
    }
}

/// Checks if the given IO error and parser states indicates the connection has closed.
fn is_closed(parser: &RequestParser, error: &std::io::Error) -> bool {
    // an unexpected EOF before any data of the next request means the client is done
    (error.kind() == ErrorKind::UnexpectedEof && !parser.has_data())
        || error.kind() == ErrorKind::ConnectionReset
        || error.kind() == ErrorKind::ConnectionAborted
}
