use std::io::{BufRead, ErrorKind};

use crate::parse::deframe::{Deframe, LineDeframer};
use crate::parse::error::{DecodeError, MessageKind};
use crate::parse::error_take::{is_limit_reached, ReadExt};
use crate::parse::parse::{Parse, ParseStatus};
use crate::parse::parse::ParseStatus::{Done, IoErr};

/// Parses a CRLF terminated line no longer than a maximum length.
pub struct CrlfLineParser {
    line: LineDeframer,
    max_length: usize,
    kind: MessageKind,
}

impl CrlfLineParser {
    /// Creates a new CRLF line parser. Lines longer than max_length bytes, CRLF included, fail with LineTooLong.
    pub fn new(max_length: usize, kind: MessageKind) -> CrlfLineParser {
        CrlfLineParser { line: LineDeframer::new(), max_length, kind }
    }

    /// Returns how many bytes this parser has read so far.
    pub fn read_so_far(&self) -> usize {
        self.line.read_so_far()
    }
}

impl Parse<String> for CrlfLineParser {
    fn parse(self, reader: &mut impl BufRead) -> Result<ParseStatus<String, Self>, DecodeError> {
        let Self { line, max_length, kind } = self;

        let remaining = max_length.saturating_sub(line.read_so_far());
        let mut reader = reader.error_take(remaining as u64);

        Ok(match line.parse(&mut reader)? {
            Done(line) => Done(parse_crlf_line(line, kind)?),
            IoErr(_, err) if is_limit_reached(&err) => return Err(DecodeError::LineTooLong),
            IoErr(_, err) if err.kind() == ErrorKind::InvalidData => return Err(kind.malformed()),
            IoErr(line, err) => IoErr(Self { line, max_length, kind }, err)
        })
    }
}

/// Parses the given line as a CRLF terminated line. Assumes the '\n' was already removed.
/// A bare CR anywhere else in the line is rejected.
pub fn parse_crlf_line(mut line: String, kind: MessageKind) -> Result<String, DecodeError> {
    match line.pop() {
        Some('\r') if !line.contains('\r') => Ok(line),
        _ => Err(kind.malformed())
    }
}
