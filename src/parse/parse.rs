use std::io::{BufRead, ErrorKind};

use crate::parse::deframe::{BytesDeframer, Deframe, LineDeframer};
use crate::parse::error::DecodeError;
use crate::parse::parse::ParseStatus::{Done, IoErr};

/// Either a decode error, or how far the parser got.
pub type ParseResult<T, R> = Result<ParseStatus<T, R>, DecodeError>;

/// A parser that can be suspended by IO errors and resumed with more data.
pub trait Parse<T>: Sized {
    /// Reads from the reader until a value is parsed or an error stops it.
    /// A decode error or a parsed value consumes the parser. On an IO error the parser comes back
    /// with the error, ready to continue where it stopped.
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<T, Self>;

    /// Parses from a blocking reader until done. Interrupted reads are retried, the end of the
    /// stream is an `UnexpectedEnd`, and other IO errors are returned as they are.
    fn parse_blocking(self, reader: &mut impl BufRead) -> Result<T, DecodeError> {
        let mut parser = self;
        loop {
            match parser.parse(reader)? {
                Done(value) => return Ok(value),
                IoErr(next, err) if err.kind() == ErrorKind::Interrupted => parser = next,
                IoErr(_, err) if err.kind() == ErrorKind::UnexpectedEof => return Err(DecodeError::UnexpectedEnd),
                IoErr(_, err) => return Err(DecodeError::Io(err))
            }
        }
    }
}

/// How far a parse call got.
pub enum ParseStatus<T, R> {
    Done(T),
    /// The parser state to resume from and the IO error that suspended it.
    IoErr(R, std::io::Error),
}

impl<T, R> ParseStatus<T, R> {
    /// Wraps a suspended inner parser into the state of the parser containing it.
    pub fn map_state<V>(self, wrap: impl FnOnce(R) -> V) -> ParseStatus<T, V> {
        match self {
            Done(value) => Done(value),
            IoErr(state, err) => IoErr(wrap(state), err)
        }
    }
}

/// Deframers only stop on IO errors, so parsing with one never fails to decode.
macro_rules! parse_with_deframer {
    ($deframer:ty, $value:ty) => {
        impl Parse<$value> for $deframer {
            fn parse(self, reader: &mut impl BufRead) -> ParseResult<$value, Self> {
                Ok(match self.read(reader) {
                    Ok(value) => Done(value),
                    Err((state, err)) => IoErr(state, err)
                })
            }
        }
    };
}

parse_with_deframer!(LineDeframer, String);
parse_with_deframer!(BytesDeframer, Vec<u8>);

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Error, ErrorKind};

    use crate::parse::deframe::{BytesDeframer, LineDeframer};
    use crate::parse::error::DecodeError;
    use crate::parse::parse::{Parse, ParseResult};
    use crate::parse::parse::ParseStatus::{Done, IoErr};
    use crate::util::mock::MockReader;

    /// Fails with the given errors in order, then parses the number of calls made.
    struct Flaky {
        errors: Vec<ErrorKind>,
        calls: usize,
    }

    impl Parse<usize> for Flaky {
        fn parse(mut self, _: &mut impl BufRead) -> ParseResult<usize, Self> {
            self.calls += 1;
            if self.errors.is_empty() {
                return Ok(Done(self.calls));
            }
            let kind = self.errors.remove(0);
            Ok(IoErr(self, Error::from(kind)))
        }
    }

    fn parse_blocking(errors: Vec<ErrorKind>) -> Result<usize, DecodeError> {
        Flaky { errors, calls: 0 }.parse_blocking(&mut &b""[..])
    }

    #[test]
    fn deframers_parse() {
        let line = LineDeframer::new().parse_blocking(&mut &b"first\nsecond"[..]).unwrap();
        assert_eq!(line, "first");

        let bytes = BytesDeframer::new(3).parse_blocking(&mut &b"abcdef"[..]).unwrap();
        assert_eq!(bytes, b"abc");
    }

    #[test]
    fn deframer_suspends_on_would_block() {
        let mut source = MockReader::from_strs(vec!["ab"]);
        source.return_would_block_when_empty = true;
        let mut reader = BufReader::new(source);

        let deframer = match BytesDeframer::new(4).parse(&mut reader).ok().unwrap() {
            IoErr(deframer, err) => {
                assert_eq!(err.kind(), ErrorKind::WouldBlock);
                deframer
            }
            Done(_) => panic!("finished without enough data")
        };

        reader.get_mut().data.push(b"cd".to_vec());
        assert!(matches!(deframer.parse(&mut reader), Ok(Done(ref data)) if data == b"abcd"));
    }

    #[test]
    fn retries_interrupted() {
        assert_eq!(parse_blocking(vec![]).unwrap(), 1);
        assert_eq!(parse_blocking(vec![ErrorKind::Interrupted, ErrorKind::Interrupted]).unwrap(), 3);
    }

    #[test]
    fn end_of_stream() {
        assert!(matches!(parse_blocking(vec![ErrorKind::UnexpectedEof]), Err(DecodeError::UnexpectedEnd)));
    }

    #[test]
    fn other_io_errors() {
        match parse_blocking(vec![ErrorKind::Interrupted, ErrorKind::ConnectionReset]) {
            Err(DecodeError::Io(err)) => assert_eq!(err.kind(), ErrorKind::ConnectionReset),
            other => panic!("unexpected result {:?}", other)
        }
    }
}
