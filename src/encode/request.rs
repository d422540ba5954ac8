use std::io::Write;

use crate::common::header::{ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, ACCEPT_LANGUAGE, AUTHORIZATION, CONNECTION, CONTENT_LENGTH, CONTENT_TYPE, COOKIE, EXPECT, HOST, KEEP_ALIVE, TRANSFER_ENCODING, USER_AGENT};
use crate::common::quality::join_list;
use crate::common::request::Request;
use crate::encode::error::EncodeError;
use crate::encode::head::HeadWriter;

/// Writes the request to the writer and flushes it.
/// Typed headers come first in a fixed order, then generic headers, then one Cookie line per cookie.
/// The body is written as it is, so the Content-Length or Transfer-Encoding must already describe it.
pub fn encode_request(request: &Request, writer: &mut impl Write) -> Result<(), EncodeError> {
    let mut head = HeadWriter::new(format!("{} {} {}", request.method, request.url.request_target(), request.version));

    head.optional(&HOST, &request.host)?;
    head.optional(&CONTENT_TYPE, &request.content_type)?;
    head.optional(&CONTENT_LENGTH, &request.content_length)?;
    head.optional(&USER_AGENT, &request.user_agent)?;
    head.optional(&ACCEPT, &request.accept.as_deref().map(join_list))?;
    head.optional(&ACCEPT_LANGUAGE, &request.accept_language.as_deref().map(join_list))?;
    head.optional(&ACCEPT_ENCODING, &request.accept_encoding.as_deref().map(join_list))?;
    head.optional(&ACCEPT_CHARSET, &request.accept_charset.as_deref().map(join_list))?;
    head.optional(&AUTHORIZATION, &request.authorization)?;
    head.optional(&KEEP_ALIVE, &request.keep_alive)?;
    head.optional(&CONNECTION, &request.connection)?;
    head.optional(&TRANSFER_ENCODING, &request.transfer_encoding.as_deref().map(join_list))?;
    head.optional(&EXPECT, &request.expect)?;
    head.headers(&request.headers)?;
    for cookie in &request.cookies {
        head.header(&COOKIE, cookie)?;
    }

    head.finish(writer, request.body())
}
