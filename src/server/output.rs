use std::io::{ErrorKind, Result, Write};

/// Bytes waiting to be written to a non-blocking stream.
/// Writing stops when the stream would block and the rest stays here until the stream is writable again.
pub struct OutputBuffer {
    buf: Vec<u8>,
    pos: usize,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> OutputBuffer {
        OutputBuffer { buf: Vec::with_capacity(capacity), pos: 0 }
    }

    pub fn push(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Returns true if everything pushed so far has been written.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Writes as much as possible to the writer and flushes it. Blocking is not an error.
    pub fn write_to(&mut self, writer: &mut impl Write) -> Result<()> {
        while !self.is_empty() {
            match writer.write(&self.buf[self.pos..]) {
                Ok(0) => return Err(ErrorKind::WriteZero.into()),
                Ok(amount) => self.pos += amount,
                Err(err) if err.kind() == ErrorKind::WouldBlock => break,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err)
            }
        }

        if self.is_empty() {
            self.pos = 0;
            self.buf.clear();
        }

        match writer.flush() {
            Err(err) if err.kind() == ErrorKind::WouldBlock => Ok(()),
            result => result
        }
    }
}
