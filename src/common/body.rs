use std::cmp::min;
use std::fmt::{Debug, Formatter};
use std::io::{BufRead, Error, ErrorKind, Read};
use std::sync::{Arc, Mutex};

use crate::parse::body::{Framing, parse_chunk_size};
use crate::parse::crlf_line::parse_crlf_line;
use crate::parse::error::{DecodeError, MessageKind};
use crate::parse::error_take::{is_limit_reached, ReadExt};
use crate::parse::limits::Limits;

/// The body of a message.
#[derive(Debug, Clone, Default)]
pub enum Body {
    /// No body, or an empty one.
    #[default]
    None,
    /// A body held fully in memory.
    Bytes(Vec<u8>),
    /// The unread rest of a message body, still on the connection it arrived on.
    /// Only valid while that connection is alive.
    Streaming(BodyStream),
}

impl Body {
    /// Gets the bytes of an in-memory body. Returns None for streaming bodies.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Body::None => Some(&[]),
            Body::Bytes(bytes) => Some(bytes),
            Body::Streaming(_) => None
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Body::None)
    }
}

impl PartialEq for Body {
    /// Streaming bodies are never equal to anything, they can only be read once.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Body::None, Body::None) => true,
            (Body::Bytes(a), Body::Bytes(b)) => a == b,
            _ => false
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        match bytes.is_empty() {
            true => Body::None,
            false => Body::Bytes(bytes)
        }
    }
}

/// A body that is decoded lazily as it is read. Clones share the same underlying stream.
#[derive(Clone)]
pub struct BodyStream {
    inner: Arc<Mutex<StreamState>>,
}

struct StreamState {
    reader: Box<dyn BufRead + Send>,
    framing: StreamFraming,
    limits: Limits,
    kind: MessageKind,
    read: u64,
}

enum StreamFraming {
    Length { remaining: u64 },
    /// Chunked body. `chunks` counts the chunks whose data has been started.
    Chunked { remaining: u64, chunks: usize },
    Done,
}

impl BodyStream {
    pub(crate) fn new(reader: impl BufRead + Send + 'static, framing: Framing, limits: Limits, kind: MessageKind) -> BodyStream {
        let framing = match framing {
            Framing::None => StreamFraming::Done,
            Framing::Length(size) => StreamFraming::Length { remaining: size },
            Framing::Chunked => StreamFraming::Chunked { remaining: 0, chunks: 0 },
        };
        let state = StreamState { reader: Box::new(reader), framing, limits, kind, read: 0 };
        BodyStream { inner: Arc::new(Mutex::new(state)) }
    }

    /// Reads the rest of the body into memory.
    pub fn read_all(&mut self) -> std::io::Result<Vec<u8>> {
        let mut bytes = vec![];
        self.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Gets the connection reader back. Returns None if a clone of this stream is still alive.
    pub fn into_inner(self) -> Option<Box<dyn BufRead + Send>> {
        let state = Arc::try_unwrap(self.inner).ok()?;
        state.into_inner().ok().map(|state| state.reader)
    }
}

impl Debug for BodyStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("BodyStream { .. }")
    }
}

impl Read for BodyStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut state = self.inner.lock().map_err(|_| Error::new(ErrorKind::Other, "body stream poisoned"))?;
        state.read_body(buf)
    }
}

impl StreamState {
    fn read_body(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            match self.framing {
                StreamFraming::Done => return Ok(0),
                StreamFraming::Length { remaining } => {
                    let amount = self.read_data(buf, remaining)?;
                    self.framing = match remaining - amount as u64 {
                        0 => StreamFraming::Done,
                        remaining => StreamFraming::Length { remaining }
                    };
                    return Ok(amount);
                }
                StreamFraming::Chunked { remaining: 0, chunks } => {
                    if chunks > 0 {
                        self.read_empty_line()?;
                    }
                    let size = parse_chunk_size(&self.read_line()?, self.kind).map_err(invalid)?;
                    if size == 0 {
                        self.read_empty_line()?;
                        self.framing = StreamFraming::Done;
                        continue;
                    }
                    if chunks + 1 > self.limits.max_chunk_count {
                        return Err(invalid(DecodeError::TooManyChunks));
                    }
                    let total = self.read.checked_add(size);
                    if total.map_or(true, |total| total > self.limits.max_body_size as u64) {
                        return Err(invalid(DecodeError::BodyTooLarge));
                    }
                    self.framing = StreamFraming::Chunked { remaining: size, chunks: chunks + 1 };
                }
                StreamFraming::Chunked { remaining, chunks } => {
                    let amount = self.read_data(buf, remaining)?;
                    self.framing = StreamFraming::Chunked { remaining: remaining - amount as u64, chunks };
                    return Ok(amount);
                }
            }
        }
    }

    /// Reads at most `remaining` bytes of body data into buf.
    fn read_data(&mut self, buf: &mut [u8], remaining: u64) -> std::io::Result<usize> {
        let max = min(buf.len() as u64, remaining) as usize;
        let amount = self.reader.read(&mut buf[..max])?;
        if amount == 0 {
            return Err(Error::from(ErrorKind::UnexpectedEof));
        }
        self.read += amount as u64;
        Ok(amount)
    }

    fn read_line(&mut self) -> std::io::Result<String> {
        let mut line = String::new();
        let limit = self.limits.max_line_length as u64;

        (&mut self.reader).error_take(limit).read_line(&mut line).map_err(|err| {
            match is_limit_reached(&err) {
                true => invalid(DecodeError::LineTooLong),
                false => err
            }
        })?;

        match line.pop() {
            Some('\n') => parse_crlf_line(line, self.kind).map_err(invalid),
            _ => Err(Error::from(ErrorKind::UnexpectedEof))
        }
    }

    /// Reads a line that must be empty, like the CRLF after chunk data. Trailers are not supported.
    fn read_empty_line(&mut self) -> std::io::Result<()> {
        match self.read_line()?.is_empty() {
            true => Ok(()),
            false => Err(invalid(self.kind.malformed()))
        }
    }
}

/// Wraps a decode error for the Read interface.
fn invalid(err: DecodeError) -> Error {
    Error::new(ErrorKind::InvalidData, err)
}
