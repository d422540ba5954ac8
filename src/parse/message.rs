use std::io::BufRead;

use crate::common::body::Body;
use crate::parse::body::{BodyParser, Framing};
use crate::parse::dispatch::HeaderSink;
use crate::parse::error::{DecodeError, MessageKind};
use crate::parse::headers::HeadersParser;
use crate::parse::limits::Limits;
use crate::parse::message::State::{Finished, FirstLine, Headers};
use crate::parse::parse::{Parse, ParseResult};
use crate::parse::parse::ParseStatus::{Done, IoErr};

/// A message that can be decoded: headers are dispatched into it and its typed fields decide how
/// the body is framed.
pub trait Message: HeaderSink {
    /// Decides the body framing once all headers are known.
    fn framing(&self, limits: &Limits) -> Result<Framing, DecodeError>;

    /// Stores the decoded body.
    fn set_decoded_body(&mut self, body: Body);
}

/// Generic HTTP message parser, used by both response and request parsing.
/// The first line parser produces the message that the headers and body are decoded into.
pub struct MessageParser<R, M> {
    state: State<R, M>,
    limits: Limits,
    kind: MessageKind,
    read_body: bool,
}

impl<R, M: Message> MessageParser<R, M> {
    /// Creates a new message parser with the given parser to parse the first line.
    /// If read_body is false then parsing ends after the headers and the body is left unread.
    pub fn new(first_line_parser: R, limits: Limits, kind: MessageKind, read_body: bool) -> MessageParser<R, M> {
        MessageParser { state: FirstLine(first_line_parser), limits, kind, read_body }
    }

    /// Gets the first line parser used by this message parser.
    /// May return None if the first line parser is no longer in use.
    pub fn first_line_parser(&self) -> Option<&R> {
        match &self.state {
            FirstLine(parser) => Some(parser),
            _ => None
        }
    }

    /// Gets the message if its headers are complete and its body is being read.
    pub fn message_without_body(&self) -> Option<&M> {
        match &self.state {
            State::Body(message, _) => Some(message),
            _ => None
        }
    }
}

/// The state of a message parser.
enum State<R, M> {
    /// Parsing the first line of the message.
    FirstLine(R),
    /// Parsing the headers.
    Headers(HeadersParser<M>),
    /// Parsing the body.
    Body(M, BodyParser),
    /// Parsing is complete.
    Finished(M),
}

impl<M: Message, R: Parse<M>> Parse<M> for MessageParser<R, M> {
    fn parse(self, reader: &mut impl BufRead) -> ParseResult<M, Self> {
        let Self { mut state, limits, kind, read_body } = self;

        loop {
            let result = match state {
                FirstLine(parser) => first_line_state(reader, parser, limits, kind)?,
                Headers(parser) => headers_state(reader, parser, limits, kind, read_body)?,
                State::Body(message, parser) => body_state(reader, message, parser)?,
                Finished(message) => return Ok(Done(message))
            };

            state = match result {
                Done(state) => state,
                IoErr(state, err) => return Ok(IoErr(Self { state, limits, kind, read_body }, err))
            }
        }
    }
}

/// Parses the first line and returns the next state if possible.
fn first_line_state<M: Message, R: Parse<M>>(reader: &mut impl BufRead, parser: R, limits: Limits, kind: MessageKind) -> ParseResult<State<R, M>, State<R, M>> {
    Ok(match parser.parse(reader)? {
        Done(message) => Done(Headers(HeadersParser::new(message, limits, kind))),
        IoErr(parser, err) => IoErr(FirstLine(parser), err)
    })
}

/// Parses the headers and returns the next state if possible.
fn headers_state<M: Message, R>(reader: &mut impl BufRead, parser: HeadersParser<M>, limits: Limits, kind: MessageKind, read_body: bool) -> ParseResult<State<R, M>, State<R, M>> {
    Ok(match parser.parse(reader)? {
        Done(message) if !read_body => Done(Finished(message)),
        Done(message) => {
            let body_parser = BodyParser::new(message.framing(&limits)?, limits, kind);
            Done(State::Body(message, body_parser))
        }
        IoErr(parser, err) => IoErr(Headers(parser), err)
    })
}

/// Parses the body and returns the next state if possible.
fn body_state<M: Message, R>(reader: &mut impl BufRead, mut message: M, parser: BodyParser) -> ParseResult<State<R, M>, State<R, M>> {
    Ok(match parser.parse(reader)? {
        Done(body) => {
            message.set_decoded_body(Body::from(body));
            Done(Finished(message))
        }
        IoErr(parser, err) => IoErr(State::Body(message, parser), err)
    })
}
