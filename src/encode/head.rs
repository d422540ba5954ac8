use std::fmt::Display;
use std::io::{copy, Write};

use crate::common::body::Body;
use crate::common::header::{HeaderName, Headers};
use crate::encode::error::EncodeError;

/// Collects the head of a message in memory so it reaches the writer in one piece.
pub struct HeadWriter {
    buf: Vec<u8>,
}

impl HeadWriter {
    /// Starts a head with the given start line. CRLF is appended.
    pub fn new(start_line: impl Display) -> HeadWriter {
        let mut buf = Vec::with_capacity(256);
        buf.extend_from_slice(start_line.to_string().as_bytes());
        buf.extend_from_slice(b"\r\n");
        HeadWriter { buf }
    }

    /// Writes a "Name: value" line.
    pub fn header(&mut self, name: &HeaderName, value: impl Display) -> Result<(), EncodeError> {
        let value = value.to_string();
        if has_line_break(name.as_str()) || has_line_break(&value) {
            return Err(EncodeError::InvalidHeaderValue(name.to_string()));
        }
        self.buf.extend_from_slice(name.as_str().as_bytes());
        self.buf.extend_from_slice(b": ");
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.extend_from_slice(b"\r\n");
        Ok(())
    }

    /// Writes the header line if there is a value.
    pub fn optional<T: Display>(&mut self, name: &HeaderName, value: &Option<T>) -> Result<(), EncodeError> {
        match value {
            Some(value) => self.header(name, value),
            None => Ok(())
        }
    }

    /// Writes every generic header in insertion order.
    pub fn headers(&mut self, headers: &Headers) -> Result<(), EncodeError> {
        for (name, value) in headers.iter() {
            self.header(name, value)?;
        }
        Ok(())
    }

    /// Terminates the head, then writes it and the body to the writer and flushes.
    pub fn finish(mut self, writer: &mut impl Write, body: &Body) -> Result<(), EncodeError> {
        self.buf.extend_from_slice(b"\r\n");
        writer.write_all(&self.buf)?;
        match body {
            Body::None => {}
            Body::Bytes(bytes) => writer.write_all(bytes)?,
            Body::Streaming(stream) => {
                copy(&mut stream.clone(), writer)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

fn has_line_break(value: &str) -> bool {
    value.bytes().any(|b| b == b'\r' || b == b'\n')
}
