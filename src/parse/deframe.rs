use std::cmp::min;
use std::io::{BufRead, Error, ErrorKind};

/// Result of a deframer. On failure the deframer is handed back so reading can resume later.
pub type DeframerResult<T, R> = Result<T, (R, Error)>;

/// Stateful IO reading. Wraps std::io reads so that a WouldBlock in the middle of a value keeps
/// the bytes read so far.
pub trait Deframe<T>: Sized {
    /// Reads until a value is complete, or returns the deframer state along with the IO error that stopped it.
    fn read(self, reader: &mut impl BufRead) -> DeframerResult<T, Self>;

    /// How many bytes have been read so far.
    fn read_so_far(&self) -> usize;
}

/// Deframer for a '\n' terminated line. The '\n' is not included in the result.
/// Bytes are collected until the line is complete, so a multi-byte character split across reads
/// is kept whole. Invalid UTF-8 gives an InvalidData error.
/// If EOF is reached before '\n' then an UnexpectedEof error is returned.
pub struct LineDeframer {
    line: Vec<u8>,
}

impl LineDeframer {
    pub fn new() -> LineDeframer {
        LineDeframer { line: vec![] }
    }
}

impl Deframe<String> for LineDeframer {
    fn read(mut self, reader: &mut impl BufRead) -> DeframerResult<String, Self> {
        if let Err(err) = reader.read_until(b'\n', &mut self.line) {
            return Err((self, err));
        }
        if self.line.last() != Some(&b'\n') {
            return Err((self, Error::from(ErrorKind::UnexpectedEof)));
        }
        self.line.pop();
        String::from_utf8(self.line).map_err(|err| {
            (LineDeframer { line: err.into_bytes() }, Error::from(ErrorKind::InvalidData))
        })
    }

    fn read_so_far(&self) -> usize {
        self.line.len()
    }
}

/// Most a BytesDeframer reserves before any data has arrived.
const INITIAL_CAPACITY: usize = 8192;

/// Deframer for a specified number of bytes. The buffer grows as data arrives, so a large
/// declared size costs nothing until the bytes are actually sent.
pub struct BytesDeframer {
    data: Vec<u8>,
    size: usize,
}

impl BytesDeframer {
    /// Creates a new deframer for deframing the specified number of bytes.
    pub fn new(size: usize) -> BytesDeframer {
        BytesDeframer { data: Vec::with_capacity(min(size, INITIAL_CAPACITY)), size }
    }
}

impl Deframe<Vec<u8>> for BytesDeframer {
    fn read(mut self, reader: &mut impl BufRead) -> DeframerResult<Vec<u8>, Self> {
        while self.data.len() < self.size {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(err) => return Err((self, err))
            };
            if available.is_empty() {
                return Err((self, Error::from(ErrorKind::UnexpectedEof)));
            }

            let amount = min(available.len(), self.size - self.data.len());
            self.data.extend_from_slice(&available[..amount]);
            reader.consume(amount);
        }

        Ok(self.data)
    }

    fn read_so_far(&self) -> usize {
        self.data.len()
    }
}
