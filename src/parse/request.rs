use std::io::BufRead;

use crate::common::body::Body;
use crate::common::method::Method;
use crate::common::request::Request;
use crate::common::url::Url;
use crate::common::version::Version;
use crate::parse::body::{Framing, framing};
use crate::parse::crlf_line::CrlfLineParser;
use crate::parse::error::{DecodeError, MessageKind};
use crate::parse::limits::Limits;
use crate::parse::message::{Message, MessageParser};
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::parse::ParseStatus::{Done, IoErr};

/// Parser for requests.
pub struct RequestParser(MessageParser<FirstLineParser, Request>);

impl RequestParser {
    /// Creates a new request parser that reads the whole request, body included.
    pub fn new(limits: Limits) -> RequestParser {
        RequestParser(MessageParser::new(FirstLineParser::new(limits), limits, MessageKind::Request, true))
    }

    /// Creates a new request parser that stops after the headers, leaving the body unread.
    pub fn head_only(limits: Limits) -> RequestParser {
        RequestParser(MessageParser::new(FirstLineParser::new(limits), limits, MessageKind::Request, false))
    }

    /// Returns true if this parser has read any data so far.
    pub fn has_data(&self) -> bool {
        self.0.first_line_parser().map(|p| { p.0.read_so_far() > 0 }).unwrap_or(true)
    }

    /// Returns true if the headers asked for "100 Continue" and the body is still to come.
    pub fn awaiting_continue(&self) -> bool {
        self.0.message_without_body().map_or(false, Request::expects_continue)
    }
}

impl Parse<Request> for RequestParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<Request, Self> {
        Ok(match self.0.parse(reader)? {
            Done(request) => Done(request),
            IoErr(parser, err) => IoErr(Self(parser), err)
        })
    }
}

impl Message for Request {
    fn framing(&self, limits: &Limits) -> Result<Framing, DecodeError> {
        framing(self.content_length, self.transfer_encoding.as_deref(), limits)
    }

    fn set_decoded_body(&mut self, body: Body) {
        self.set_framed_body(body)
    }
}

/// The parser for the first line of a request.
struct FirstLineParser(CrlfLineParser);

impl FirstLineParser {
    /// Creates a new parser for a requests first line.
    fn new(limits: Limits) -> FirstLineParser {
        FirstLineParser(CrlfLineParser::new(limits.max_line_length, MessageKind::Request))
    }
}

impl Parse<Request> for FirstLineParser {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<Request, Self> {
        Ok(match self.0.parse(reader)? {
            Done(line) => Done(parse_first_line(&line)?),
            IoErr(parser, err) => IoErr(Self(parser), err)
        })
    }
}

/// Parses the given string as the first line of a request: method, URL and version separated by single spaces.
fn parse_first_line(line: &str) -> Result<Request, DecodeError> {
    let mut split = line.split(' ');

    let (method, url, version) = match (split.next(), split.next(), split.next(), split.next()) {
        (Some(method), Some(url), Some(version), None) => (method, url, version),
        _ => return Err(DecodeError::InvalidRequest)
    };

    let mut request = Request::new(Method::parse(method)?, Url::parse(url)?);
    request.version = Version::parse(version)?;
    request.host = request.url.host.clone();

    Ok(request)
}
