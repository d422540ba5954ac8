use crate::common::authorization::Authorization;
use crate::common::charset::Charset;
use crate::common::connection::{Connection, Expect};
use crate::common::cookie::{Cookie, SetCookie};
use crate::common::encoding::{ContentEncoding, parse_list, TransferEncoding};
use crate::common::header::{HeaderName, StandardHeader};
use crate::common::language::Language;
use crate::common::media::{ContentType, MediaType};
use crate::common::quality::parse_weighted_list;
use crate::common::request::Request;
use crate::common::response::Response;
use crate::common::token::parse_decimal;
use crate::common::url::Host;
use crate::parse::error::DecodeError;

/// A message that header lines can be decoded into.
pub trait HeaderSink {
    /// Decodes a header value into the field for its name, or keeps it as a generic header.
    fn add_header(&mut self, name: HeaderName, value: &str) -> Result<(), DecodeError>;
}

impl HeaderSink for Request {
    fn add_header(&mut self, name: HeaderName, value: &str) -> Result<(), DecodeError> {
        match name.standard() {
            Some(StandardHeader::Host) => {
                // a host from an absolute request line wins
                if self.url.host.is_none() {
                    self.host = Some(Host::parse(value)?);
                }
            }
            Some(StandardHeader::UserAgent) => self.user_agent = Some(non_empty(value)?.to_string()),
            Some(StandardHeader::Accept) => self.accept = Some(parse_weighted_list(value, MediaType::parse)?),
            Some(StandardHeader::AcceptLanguage) => self.accept_language = Some(parse_weighted_list(value, Language::parse)?),
            Some(StandardHeader::AcceptEncoding) => {
                let list = parse_weighted_list(value, ContentEncoding::parse)?;
                self.accept_encoding.get_or_insert_with(Vec::new).extend(list);
            }
            Some(StandardHeader::AcceptCharset) => self.accept_charset = Some(parse_weighted_list(value, Charset::parse)?),
            Some(StandardHeader::Authorization) => self.authorization = Some(Authorization::parse(value)?),
            Some(StandardHeader::KeepAlive) => self.keep_alive = Some(parse_number(value)?),
            Some(StandardHeader::Connection) => self.connection = Some(Connection::parse(value)?),
            Some(StandardHeader::Expect) => self.expect = Some(Expect::parse(value)?),
            Some(StandardHeader::ContentType) => self.content_type = Some(ContentType::parse(value)?),
            Some(StandardHeader::ContentLength) => self.content_length = Some(parse_number(value)?),
            Some(StandardHeader::TransferEncoding) => self.transfer_encoding = Some(parse_list(value, TransferEncoding::parse)?),
            Some(StandardHeader::Cookie) => self.cookies.extend(Cookie::parse_list(value)?),
            _ => {
                self.headers.insert(name, value.to_string());
            }
        }
        Ok(())
    }
}

impl HeaderSink for Response {
    fn add_header(&mut self, name: HeaderName, value: &str) -> Result<(), DecodeError> {
        match name.standard() {
            Some(StandardHeader::Connection) => self.connection = Some(Connection::parse(value)?),
            Some(StandardHeader::ContentEncoding) => self.content_encoding = Some(parse_list(value, ContentEncoding::parse)?),
            Some(StandardHeader::ContentType) => self.content_type = Some(ContentType::parse(value)?),
            Some(StandardHeader::ContentLength) => self.content_length = Some(parse_number(value)?),
            Some(StandardHeader::TransferEncoding) => self.transfer_encoding = Some(parse_list(value, TransferEncoding::parse)?),
            Some(StandardHeader::SetCookie) => self.set_cookies.push(SetCookie::parse(value)?),
            _ => {
                self.headers.insert(name, value.to_string());
            }
        }
        Ok(())
    }
}

fn parse_number(value: &str) -> Result<u64, DecodeError> {
    parse_decimal(value).ok_or(DecodeError::InvalidHeaderValue)
}

fn non_empty(value: &str) -> Result<&str, DecodeError> {
    match value.is_empty() {
        true => Err(DecodeError::InvalidHeaderValue),
        false => Ok(value)
    }
}
