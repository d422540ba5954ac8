use std::io::BufRead;

use crate::common::body::Body;
use crate::common::response::Response;
use crate::common::status::Status;
use crate::common::version::Version;
use crate::parse::body::{Framing, framing};
use crate::parse::crlf_line::CrlfLineParser;
use crate::parse::error::{DecodeError, MessageKind};
use crate::parse::limits::Limits;
use crate::parse::message::{Message, MessageParser};
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::parse::ParseStatus::{Done, IoErr};

/// Parser for responses.
pub struct ResponseParser(MessageParser<FirstLineParser, Response>);

impl ResponseParser {
    /// Creates a new response parser.
    pub fn new(limits: Limits) -> ResponseParser {
        ResponseParser(MessageParser::new(FirstLineParser::new(limits), limits, MessageKind::Response, true))
    }

    /// Creates a parser for the response to a HEAD request. The headers describe a body that is never sent.
    pub fn head_only(limits: Limits) -> ResponseParser {
        ResponseParser(MessageParser::new(FirstLineParser::new(limits), limits, MessageKind::Response, false))
    }
}

impl Parse<Response> for ResponseParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<Response, Self> {
        Ok(match self.0.parse(reader)? {
            Done(response) => Done(response),
            IoErr(parser, err) => IoErr(Self(parser), err)
        })
    }
}

impl Message for Response {
    fn framing(&self, limits: &Limits) -> Result<Framing, DecodeError> {
        if !self.status_allows_body() {
            return Ok(Framing::None);
        }
        framing(self.content_length, self.transfer_encoding.as_deref(), limits)
    }

    fn set_decoded_body(&mut self, body: Body) {
        self.set_framed_body(body)
    }
}

/// The parser for the status line of a response.
struct FirstLineParser(CrlfLineParser);

impl FirstLineParser {
    fn new(limits: Limits) -> FirstLineParser {
        FirstLineParser(CrlfLineParser::new(limits.max_line_length, MessageKind::Response))
    }
}

impl Parse<Response> for FirstLineParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<Response, Self> {
        Ok(match self.0.parse(reader)? {
            Done(line) => Done(parse_status_line(&line)?),
            IoErr(parser, err) => IoErr(Self(parser), err)
        })
    }
}

/// Parses a status line like "HTTP/1.1 404 Not Found".
fn parse_status_line(line: &str) -> Result<Response, DecodeError> {
    let (version, status) = line.split_once(' ').ok_or(DecodeError::InvalidResponse)?;

    let mut response = Response::default();
    response.version = Version::parse(version)?;
    response.status = Status::parse(status)?;
    Ok(response)
}
