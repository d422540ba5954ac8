use std::io::Write;

use crate::common::header::{CONNECTION, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, SET_COOKIE, TRANSFER_ENCODING};
use crate::common::quality::join_list;
use crate::common::response::Response;
use crate::encode::error::EncodeError;
use crate::encode::head::HeadWriter;

/// Writes the response to the writer and flushes it.
/// Typed headers come first in a fixed order, then generic headers, then one Set-Cookie line per cookie.
pub fn encode_response(response: &Response, writer: &mut impl Write) -> Result<(), EncodeError> {
    let mut head = HeadWriter::new(format!("{} {}", response.version, response.status));

    head.optional(&CONTENT_TYPE, &response.content_type)?;
    head.optional(&CONTENT_LENGTH, &response.content_length)?;
    head.optional(&CONNECTION, &response.connection)?;
    head.optional(&CONTENT_ENCODING, &response.content_encoding.as_deref().map(join_list))?;
    head.optional(&TRANSFER_ENCODING, &response.transfer_encoding.as_deref().map(join_list))?;
    head.headers(&response.headers)?;
    for cookie in &response.set_cookies {
        head.header(&SET_COOKIE, cookie)?;
    }

    head.finish(writer, response.body())
}
