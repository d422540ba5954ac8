use std::io::BufRead;

use crate::common::body::{Body, BodyStream};
use crate::common::request::Request;
use crate::common::response::Response;
use crate::parse::error::{DecodeError, MessageKind};
use crate::parse::limits::Limits;
use crate::parse::message::Message;
use crate::parse::parse::Parse;
use crate::parse::request::RequestParser;
use crate::parse::response::ResponseParser;

/// Decodes a full request from a blocking reader.
pub fn decode_request(reader: &mut impl BufRead, limits: &Limits) -> Result<Request, DecodeError> {
    RequestParser::new(*limits).parse_blocking(reader)
}

/// Decodes a full response from a blocking reader.
pub fn decode_response(reader: &mut impl BufRead, limits: &Limits) -> Result<Response, DecodeError> {
    ResponseParser::new(*limits).parse_blocking(reader)
}

/// Decodes the response to a HEAD request. Its headers describe a body that is never sent, so none is read.
pub fn decode_response_to_head(reader: &mut impl BufRead, limits: &Limits) -> Result<Response, DecodeError> {
    ResponseParser::head_only(*limits).parse_blocking(reader)
}

/// Decodes the head of a request and leaves the body on the reader. The returned request owns
/// the reader through a streaming body, which decodes the body lazily as it is read.
/// The reader can be taken back from the stream with `BodyStream::into_inner` once the body is read.
pub fn decode_request_streaming<R: BufRead + Send + 'static>(mut reader: R, limits: &Limits) -> Result<Request, DecodeError> {
    let mut request = RequestParser::head_only(*limits).parse_blocking(&mut reader)?;
    let framing = request.framing(limits)?;
    request.set_framed_body(Body::Streaming(BodyStream::new(reader, framing, *limits, MessageKind::Request)));
    Ok(request)
}
