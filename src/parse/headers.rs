use std::cmp::min;
use std::io::BufRead;

use crate::common::header::HeaderName;
use crate::common::token::trim_whitespace;
use crate::parse::crlf_line::CrlfLineParser;
use crate::parse::dispatch::HeaderSink;
use crate::parse::error::{DecodeError, MessageKind};
use crate::parse::limits::Limits;
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::parse::ParseStatus::{Done, IoErr};

/// Parser for the header section of a message. Each line is dispatched into the message as soon
/// as it is complete. Finishes at the empty line ending the section.
pub struct HeadersParser<M> {
    message: M,
    inner: CrlfLineParser,
    count: usize,
    read: usize,
    limits: Limits,
    kind: MessageKind,
}

impl<M: HeaderSink> HeadersParser<M> {
    /// Creates a new headers parser that decodes into the given message.
    pub fn new(message: M, limits: Limits, kind: MessageKind) -> HeadersParser<M> {
        HeadersParser { message, inner: line_parser(&limits, 0, kind), count: 0, read: 0, limits, kind }
    }

    /// The message decoded so far.
    pub fn message(&self) -> &M {
        &self.message
    }
}

/// Creates a line parser for the next header line. The line may not be longer than what is left
/// of the header section budget.
fn line_parser(limits: &Limits, read: usize, kind: MessageKind) -> CrlfLineParser {
    let remaining = limits.max_headers_size.saturating_sub(read);
    CrlfLineParser::new(min(limits.max_line_length, remaining), kind)
}

impl<M: HeaderSink> Parse<M> for HeadersParser<M> {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<M, Self> {
        let Self { mut message, mut inner, mut count, mut read, limits, kind } = self;

        loop {
            match inner.parse(reader) {
                Err(DecodeError::LineTooLong) if limits.max_headers_size.saturating_sub(read) < limits.max_line_length => {
                    return Err(DecodeError::HeadersTooLarge);
                }
                Err(err) => return Err(err),
                Ok(Done(line)) if line.is_empty() => return Ok(Done(message)),
                Ok(Done(line)) => {
                    count += 1;
                    if count > limits.max_header_count {
                        return Err(DecodeError::TooManyHeaders);
                    }
                    read += line.len() + 2;

                    let (name, value) = parse_header(&line, kind)?;
                    message.add_header(name, value)?;

                    inner = line_parser(&limits, read, kind);
                }
                Ok(IoErr(inner, err)) => return Ok(IoErr(HeadersParser { message, inner, count, read, limits, kind }, err))
            }
        }
    }
}

/// Parses the given line as a header. Splits the line at the first ':' and trims spaces around the value.
fn parse_header(raw: &str, kind: MessageKind) -> Result<(HeaderName, &str), DecodeError> {
    let (name, value) = raw.split_once(':').ok_or(kind.malformed())?;
    Ok((HeaderName::parse(name)?, trim_whitespace(value)))
}
