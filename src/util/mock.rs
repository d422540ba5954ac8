use std::cell::RefCell;
use std::cmp::min;
use std::io::{BufRead, Error, ErrorKind, Read, Write};
use std::rc::Rc;

/// A reader returning its data in the given fragments, never more than one fragment per read.
/// Once empty it either reports the end of the stream or, for simulating a non-blocking socket, WouldBlock.
pub struct MockReader {
    pub return_would_block_when_empty: bool,
    pub data: Vec<Vec<u8>>,
}

impl MockReader {
    pub fn from_strs(data: Vec<&str>) -> MockReader {
        MockReader::from_bytes(data.into_iter().map(str::as_bytes).collect())
    }

    pub fn from_bytes(data: Vec<&[u8]>) -> MockReader {
        MockReader { data: data.into_iter().map(<[u8]>::to_vec).collect(), return_would_block_when_empty: false }
    }
}

impl Read for MockReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let next = match self.data.first_mut() {
            Some(next) => next,
            None if self.return_would_block_when_empty => return Err(Error::from(ErrorKind::WouldBlock)),
            None => return Ok(0)
        };

        let amount = min(buf.len(), next.len());
        buf[..amount].copy_from_slice(&next[..amount]);
        next.drain(..amount);

        if next.is_empty() {
            self.data.remove(0);
        }

        Ok(amount)
    }
}

/// A reader returning its finite data first, then repeating a sequence forever.
pub struct EndlessMockReader {
    finite_reader: MockReader,
    sequence: Vec<u8>,
    current: usize,
}

impl EndlessMockReader {
    pub fn from_strs(finite_data: Vec<&str>, sequence: &str) -> EndlessMockReader {
        EndlessMockReader::from_bytes(finite_data.into_iter().map(str::as_bytes).collect(), sequence.as_bytes())
    }

    pub fn from_bytes(finite_data: Vec<&[u8]>, sequence: &[u8]) -> EndlessMockReader {
        EndlessMockReader { finite_reader: MockReader::from_bytes(finite_data), sequence: sequence.to_vec(), current: 0 }
    }
}

impl Read for EndlessMockReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let size = self.finite_reader.read(buf)?;
        if size > 0 {
            return Ok(size);
        }

        let amount = min(self.sequence.len() - self.current, buf.len());
        buf[..amount].copy_from_slice(&self.sequence[self.current..self.current + amount]);
        self.current = (self.current + amount) % self.sequence.len();
        Ok(amount)
    }
}

/// A writer recording each write call. Flushing moves the recorded writes to the flushed list.
/// The lists are shared, so they can be observed after the writer is moved into a stream.
pub struct MockWriter {
    pub written: Rc<RefCell<Vec<Vec<u8>>>>,
    pub flushed: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl MockWriter {
    pub fn new() -> MockWriter {
        MockWriter { written: Rc::new(RefCell::new(vec![])), flushed: Rc::new(RefCell::new(vec![])) }
    }

    /// Everything flushed so far, as one string.
    pub fn flushed_string(&self) -> String {
        String::from_utf8_lossy(&self.flushed.borrow().concat()).to_string()
    }
}

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.written.borrow_mut().push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut written = self.written.borrow_mut();
        self.flushed.borrow_mut().append(&mut written);
        Ok(())
    }
}

/// A two-way stream made of a separate reader and writer.
pub struct MockStream<R, W> {
    pub reader: R,
    pub writer: W,
}

impl<R, W> MockStream<R, W> {
    pub fn new(reader: R, writer: W) -> MockStream<R, W> {
        MockStream { reader, writer }
    }
}

impl<R: Read, W> Read for MockStream<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl<R: BufRead, W> BufRead for MockStream<R, W> {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}

impl<R, W: Write> Write for MockStream<R, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{ErrorKind, Read, Write};

    use crate::util::mock::{EndlessMockReader, MockReader, MockWriter};

    fn test_read(reader: &mut impl Read, expected: &str, buf_size: usize) {
        let mut buf = vec![0u8; buf_size];
        let len = reader.read(&mut buf).unwrap();
        assert_eq!(expected, String::from_utf8_lossy(&buf[..len]));
    }

    #[test]
    fn mock_reader_fragments() {
        let mut reader = MockReader::from_strs(vec!["hello", "world"]);

        test_read(&mut reader, "he", 2);
        test_read(&mut reader, "llo", 10);
        test_read(&mut reader, "world", 10);
        test_read(&mut reader, "", 10);
    }

    #[test]
    fn mock_reader_would_block() {
        let mut reader = MockReader::from_strs(vec!["a"]);
        reader.return_would_block_when_empty = true;

        test_read(&mut reader, "a", 10);
        assert_eq!(reader.read(&mut [0u8; 10]).unwrap_err().kind(), ErrorKind::WouldBlock);

        reader.data.push(b"b".to_vec());
        test_read(&mut reader, "b", 10);
    }

    #[test]
    fn endless_mock_reader() {
        let mut reader = EndlessMockReader::from_strs(vec!["hello", "world", "ok bye"], "blah");

        test_read(&mut reader, "hello", 5);
        test_read(&mut reader, "wor", 3);
        test_read(&mut reader, "ld", 3);
        test_read(&mut reader, "ok bye", 10);
        test_read(&mut reader, "blah", 10);
        test_read(&mut reader, "bla", 3);
        test_read(&mut reader, "h", 3);
        test_read(&mut reader, "b", 1);
        test_read(&mut reader, "lah", 10);

        for _ in 0..100 {
            test_read(&mut reader, "blah", 10);
        }
    }

    #[test]
    fn mock_writer() {
        let mut writer = MockWriter::new();

        writer.write_all(b"abc").unwrap();
        writer.write_all(b"def").unwrap();
        assert_eq!(writer.written.borrow().len(), 2);
        assert_eq!(writer.flushed_string(), "");

        writer.flush().unwrap();
        assert!(writer.written.borrow().is_empty());
        assert_eq!(writer.flushed_string(), "abcdef");
    }
}
