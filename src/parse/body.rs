use std::io::BufRead;

use log::warn;

use crate::common::encoding::TransferEncoding;
use crate::parse::body::BodyParser::{Chunked, Empty, WithSize};
use crate::parse::body::chunked::ChunksParser;
use crate::parse::deframe::BytesDeframer;
use crate::parse::error::{DecodeError, MessageKind};
use crate::parse::limits::Limits;
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::parse::ParseStatus::Done;

/// How the body of a message is delimited on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Framing {
    /// There is no body.
    None,
    /// The body is exactly this many bytes.
    Length(u64),
    /// The body uses chunked transfer encoding.
    Chunked,
}

/// Decides the framing of a body from the typed headers of a message.
/// Content-Length is checked first, then chunked Transfer-Encoding. Without either there is no body.
/// When both are present, Content-Length wins.
pub fn framing(content_length: Option<u64>, transfer_encoding: Option<&[TransferEncoding]>, limits: &Limits) -> Result<Framing, DecodeError> {
    let chunked = transfer_encoding.map_or(false, |codings| codings.contains(&TransferEncoding::Chunked));

    match content_length {
        Some(size) => {
            if chunked {
                warn!("message has both Content-Length and chunked Transfer-Encoding, using Content-Length");
            }
            if size > limits.max_body_size as u64 {
                return Err(DecodeError::BodyTooLarge);
            }
            Ok(match size {
                0 => Framing::None,
                size => Framing::Length(size)
            })
        }
        None if chunked => Ok(Framing::Chunked),
        None => Ok(Framing::None)
    }
}

/// Parser for a message body.
pub enum BodyParser {
    WithSize(BytesDeframer),
    Chunked(ChunksParser),
    Empty,
}

impl BodyParser {
    /// Creates a new body parser for the given framing.
    pub fn new(framing: Framing, limits: Limits, kind: MessageKind) -> BodyParser {
        match framing {
            Framing::None => Empty,
            Framing::Length(size) => WithSize(BytesDeframer::new(size as usize)),
            Framing::Chunked => Chunked(ChunksParser::new(limits, kind)),
        }
    }
}

impl Parse<Vec<u8>> for BodyParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<Vec<u8>, Self> {
        Ok(match self {
            WithSize(parser) => parser.parse(reader)?.map_state(WithSize),
            Chunked(parser) => parser.parse(reader)?.map_state(Chunked),
            Empty => Done(vec![])
        })
    }
}

/// Parses the size line of a chunk. Only hex digits are accepted.
pub fn parse_chunk_size(raw: &str, kind: MessageKind) -> Result<u64, DecodeError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(kind.malformed());
    }
    u64::from_str_radix(raw, 16).map_err(|_| kind.malformed())
}

/// Chunked transfer-encoding body parser.
/// A chunked body might look like:
/// A\r\n
/// 0123456789\r\n
/// 0\r\n
/// \r\n
mod chunked {
    use std::io::BufRead;

    use crate::parse::body::chunked::State::{Data, Finished, Size, TailingCrlf};
    use crate::parse::body::parse_chunk_size;
    use crate::parse::crlf_line::CrlfLineParser;
    use crate::parse::deframe::BytesDeframer;
    use crate::parse::error::{DecodeError, MessageKind};
    use crate::parse::limits::Limits;
    use crate::parse::parse::{Parse, ParseResult};
    use crate::parse::parse::ParseStatus::{Done, IoErr};

    /// A parser for chunked transfer-encoding body.
    pub struct ChunksParser {
        body: Vec<u8>,
        chunks: usize,
        limits: Limits,
        kind: MessageKind,
        state: State,
    }

    /// The state of the chunk parser.
    enum State {
        /// The size of the chunk is being parsed.
        Size(CrlfLineParser),
        /// The content of the chunk is being parsed.
        Data(BytesDeframer),
        /// The tailing CRLF after the data is being parsed. For the last chunk this is the end of
        /// the (empty) trailer section.
        TailingCrlf(CrlfLineParser, bool),
        /// A 0 length chunk has been parsed last and there are no more chunks to parse.
        Finished,
    }

    impl ChunksParser {
        /// Creates a new chunk parser.
        pub fn new(limits: Limits, kind: MessageKind) -> ChunksParser {
            ChunksParser { body: vec![], chunks: 0, limits, kind, state: Size(line_parser(&limits, kind)) }
        }

        /// Parses the size of a chunk and returns either a Data state or the current Size state if blocked.
        fn size_state(&mut self, reader: &mut impl BufRead, parser: CrlfLineParser) -> ParseResult<State, State> {
            Ok(match parser.parse(reader)? {
                Done(raw) => {
                    let size = parse_chunk_size(&raw, self.kind)?;
                    if size == 0 {
                        return Ok(Done(TailingCrlf(line_parser(&self.limits, self.kind), true)));
                    }

                    self.chunks += 1;
                    if self.chunks > self.limits.max_chunk_count {
                        return Err(DecodeError::TooManyChunks);
                    }
                    let total = (self.body.len() as u64).checked_add(size);
                    if total.map_or(true, |total| total > self.limits.max_body_size as u64) {
                        return Err(DecodeError::BodyTooLarge);
                    }

                    Done(Data(BytesDeframer::new(size as usize)))
                }
                IoErr(parser, err) => IoErr(Size(parser), err)
            })
        }

        /// Parses the content of a chunk and returns either a TailingCrlf state or the current Data state if blocked.
        fn data_state(&mut self, reader: &mut impl BufRead, parser: BytesDeframer) -> ParseResult<State, State> {
            Ok(match parser.parse(reader)? {
                Done(ref mut data) => {
                    self.body.append(data);
                    Done(TailingCrlf(line_parser(&self.limits, self.kind), false))
                }
                IoErr(parser, err) => IoErr(Data(parser), err)
            })
        }

        /// Parses the tailing CRLF after a chunks content and returns either a Finished state, a Size state,
        /// or the current TailingCrlf state if blocked.
        /// Returns an error if the line contains any data, this includes trailers after the last chunk.
        fn tailing_crlf_state(&mut self, reader: &mut impl BufRead, parser: CrlfLineParser, is_last: bool) -> ParseResult<State, State> {
            Ok(match parser.parse(reader)? {
                Done(line) if !line.is_empty() => return Err(self.kind.malformed()),
                Done(_) if is_last => Done(Finished),
                Done(_) => Done(Size(line_parser(&self.limits, self.kind))),
                IoErr(parser, err) => IoErr(TailingCrlf(parser, is_last), err)
            })
        }
    }

    fn line_parser(limits: &Limits, kind: MessageKind) -> CrlfLineParser {
        CrlfLineParser::new(limits.max_line_length, kind)
    }

    impl Parse<Vec<u8>> for ChunksParser {
        fn parse(mut self, reader: &mut impl BufRead) -> ParseResult<Vec<u8>, Self> {
            loop {
                let state = std::mem::replace(&mut self.state, Finished);
                let result = match state {
                    Size(parser) => self.size_state(reader, parser)?,
                    Data(parser) => self.data_state(reader, parser)?,
                    TailingCrlf(parser, is_last) => self.tailing_crlf_state(reader, parser, is_last)?,
                    Finished => return Ok(Done(self.body))
                };

                match result {
                    Done(state) => self.state = state,
                    IoErr(state, err) => {
                        self.state = state;
                        return Ok(IoErr(self, err));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};

    use crate::common::encoding::TransferEncoding;
    use crate::parse::body::{BodyParser, Framing, framing};
    use crate::parse::error::DecodeError::{BodyTooLarge, InvalidRequest, InvalidResponse, LineTooLong, TooManyChunks};
    use crate::parse::error::MessageKind;
    use crate::parse::limits::Limits;
    use crate::parse::test_util;
    use crate::parse::test_util::TestParseResult;
    use crate::parse::test_util::TestParseResult::{IoErr, ParseErr, Value};

    fn test_sized(size: u64, tests: Vec<(Vec<&[u8]>, TestParseResult<Vec<u8>>)>) {
        let parser = BodyParser::new(Framing::Length(size), Limits::default(), MessageKind::Request);
        test_util::test_blocking(parser, tests);
    }

    fn chunked_parser() -> BodyParser {
        BodyParser::new(Framing::Chunked, Limits::default(), MessageKind::Request)
    }

    fn test_chunked(tests: Vec<(Vec<&[u8]>, TestParseResult<Vec<u8>>)>) {
        test_util::test_blocking(chunked_parser(), tests);
    }

    #[test]
    fn framing_content_length_first() {
        let chunked = [TransferEncoding::Chunked];
        let limits = Limits::default();
        assert_eq!(framing(Some(5), Some(&chunked), &limits).unwrap(), Framing::Length(5));
        assert_eq!(framing(None, Some(&chunked), &limits).unwrap(), Framing::Chunked);
        assert_eq!(framing(Some(0), None, &limits).unwrap(), Framing::None);
        assert_eq!(framing(None, None, &limits).unwrap(), Framing::None);
        assert_eq!(framing(None, Some(&[TransferEncoding::Gzip]), &limits).unwrap(), Framing::None);
    }

    #[test]
    fn framing_too_large() {
        let res = framing(Some(u64::MAX), None, &Limits::default());
        assert_eq!(format!("{:?}", res.err().unwrap()), format!("{:?}", BodyTooLarge))
    }

    #[test]
    fn sized_body_all_at_once() {
        test_sized(11, vec![
            (vec![b"hello world"], Value(b"hello world".to_vec()))
        ])
    }

    #[test]
    fn stops_reading_once_size_is_reached() {
        test_sized(11, vec![
            (vec![b"hello worldhello world"], Value(b"hello world".to_vec())),
        ])
    }

    #[test]
    fn sized_body_partial() {
        test_sized(11, vec![
            (vec![], ErrorKind::WouldBlock.into()),
            (vec![b"h", b"ell"], ErrorKind::WouldBlock.into()),
            (vec![b"o"], ErrorKind::WouldBlock.into()),
            (vec![], ErrorKind::WouldBlock.into()),
            (vec![b" w", b"o", b"rl"], ErrorKind::WouldBlock.into()),
            (vec![b"d"], Value(b"hello world".to_vec())),
        ])
    }

    #[test]
    fn sized_body_eof_before_size_reached() {
        test_sized(11, vec![
            (vec![b"h", b"ell"], ErrorKind::WouldBlock.into()),
            (vec![b" w", b"o", b"rl"], ErrorKind::WouldBlock.into()),
            (vec![b""], IoErr(Error::from(ErrorKind::UnexpectedEof))),
        ])
    }

    #[test]
    fn no_framing_reads_nothing() {
        let parser = BodyParser::new(Framing::None, Limits::default(), MessageKind::Request);
        test_util::test_endless_bytes(parser, vec![], b"blah", Value(vec![]))
    }

    #[test]
    fn chunks_partial() {
        test_chunked(vec![
            (vec![b"5\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"hello"], ErrorKind::WouldBlock.into()),
            (vec![b"\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"1\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b" "], ErrorKind::WouldBlock.into()),
            (vec![b"\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"5\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"world"], ErrorKind::WouldBlock.into()),
            (vec![b"\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"0\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"\r\n"], Value(b"hello world".to_vec())),
        ]);
    }

    #[test]
    fn chunks_all_at_once() {
        test_chunked(vec![
            (vec![b"1e\r\nall your base are belong to us\r\n0\r\n\r\n"], Value(b"all your base are belong to us".to_vec())),
        ]);
    }

    #[test]
    fn chunks_all_at_once_fragmented() {
        test_chunked(vec![
            (vec![b"5\r", b"\nhel", b"lo\r", b"\n1\r\n", b" \r\n5", b"\r\nwor", b"ld\r\n", b"0\r\n", b"\r", b"\n"], Value(b"hello world".to_vec())),
        ]);
    }

    #[test]
    fn one_empty_chunk() {
        test_chunked(vec![
            (vec![b"0\r\n", b"\r\n"], Value(vec![]))
        ]);
    }

    #[test]
    fn chunk_size_in_hex() {
        test_chunked(vec![
            (vec![b"F\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"fifteen letters\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"0\r\n\r\n"], Value(b"fifteen letters".to_vec()))
        ]);
    }

    #[test]
    fn stops_reading_at_empty_chunk() {
        test_chunked(vec![
            (vec![b"5\r\n", b"hello\r\n", b"0\r\n\r\n", b"7\r\n", b"goodbye\r\n", b"0\r\n\r\n"], Value(b"hello".to_vec())),
        ]);
    }

    #[test]
    fn invalid_chunk_size() {
        test_chunked(vec![
            (vec![b"5x\r\n"], ParseErr(InvalidRequest))
        ]);
        test_chunked(vec![
            (vec![b"+5\r\n"], ParseErr(InvalidRequest))
        ]);
        test_chunked(vec![
            (vec![b"\r\n"], ParseErr(InvalidRequest))
        ]);
    }

    #[test]
    fn invalid_chunk_size_in_response() {
        let parser = BodyParser::new(Framing::Chunked, Limits::default(), MessageKind::Response);
        test_util::test_blocking(parser, vec![
            (vec![b"zz\r\n"], ParseErr(InvalidResponse))
        ]);
    }

    #[test]
    fn chunk_size_too_large() {
        test_chunked(vec![
            (vec![b"fffffff\r\n"], ParseErr(BodyTooLarge))
        ]);
    }

    #[test]
    fn chunk_size_near_max_after_data() {
        test_chunked(vec![
            (vec![b"1\r\na\r\nffffffffffffffff\r\n"], ParseErr(BodyTooLarge))
        ]);
    }

    #[test]
    fn chunk_size_overflow() {
        test_chunked(vec![
            (vec![b"fffffffffffffffffffff\r\n"], ParseErr(InvalidRequest))
        ]);
    }

    #[test]
    fn endless_chunk_size_line() {
        test_util::test_endless_bytes(chunked_parser(), vec![], b"f", ParseErr(LineTooLong));
    }

    #[test]
    fn endless_chunks() {
        test_util::test_endless_bytes(chunked_parser(), vec![], b"1\r\na\r\n", ParseErr(TooManyChunks));
    }

    #[test]
    fn chunks_over_body_limit() {
        let limits = Limits { max_body_size: 8, ..Limits::default() };
        let parser = BodyParser::new(Framing::Chunked, limits, MessageKind::Request);
        test_util::test_blocking(parser, vec![
            (vec![b"5\r\nhello\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"5\r\n"], ParseErr(BodyTooLarge)),
        ]);
    }

    #[test]
    fn chunk_body_too_large() {
        test_chunked(vec![
            (vec![b"5\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"helloo\r\n"], ParseErr(InvalidRequest)),
        ]);
    }

    #[test]
    fn chunk_body_too_short() {
        test_chunked(vec![
            (vec![b"5\r\n"], ErrorKind::WouldBlock.into()),
            (vec![b"hell\r\n"], ParseErr(InvalidRequest)),
        ]);
    }

    #[test]
    fn trailers_rejected() {
        test_chunked(vec![
            (vec![b"5\r\nhello\r\n0\r\nExpires: never\r\n\r\n"], ParseErr(InvalidRequest)),
        ]);
    }
}
