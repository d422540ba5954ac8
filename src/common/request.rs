use crate::common::authorization::Authorization;
use crate::common::body::Body;
use crate::common::charset::Charset;
use crate::common::connection::{Connection, Expect};
use crate::common::cookie::Cookie;
use crate::common::encoding::{ContentEncoding, TransferEncoding};
use crate::common::header::Headers;
use crate::common::language::Language;
use crate::common::media::{ContentType, MediaType};
use crate::common::method::Method;
use crate::common::quality::Weighted;
use crate::common::url::{Host, Url};
use crate::common::version::Version;

/// An HTTP request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Request {
    /// The method.
    pub method: Method,
    /// The URL from the request line.
    pub url: Url,
    pub version: Version,
    pub host: Option<Host>,
    pub user_agent: Option<String>,
    pub accept: Option<Vec<Weighted<MediaType>>>,
    pub accept_language: Option<Vec<Weighted<Language>>>,
    pub accept_encoding: Option<Vec<Weighted<ContentEncoding>>>,
    pub accept_charset: Option<Vec<Weighted<Charset>>>,
    pub authorization: Option<Authorization>,
    /// The Keep-Alive timeout in seconds.
    pub keep_alive: Option<u64>,
    pub connection: Option<Connection>,
    pub expect: Option<Expect>,
    pub content_type: Option<ContentType>,
    pub content_length: Option<u64>,
    pub transfer_encoding: Option<Vec<TransferEncoding>>,
    /// Headers without a typed field.
    pub headers: Headers,
    pub cookies: Vec<Cookie>,
    body: Body,
}

impl Request {
    /// Creates a request with no headers and no body.
    pub fn new(method: Method, url: impl Into<Url>) -> Request {
        Request { method, url: url.into(), ..Default::default() }
    }

    /// Sets the body and the Content-Length to match it.
    /// An empty body is stored as no body, with a Content-Length of 0.
    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        let body = body.into();
        self.content_length = Some(body.len() as u64);
        self.body = Body::from(body);
    }

    /// Sets the body and the Content-Length, returning the request.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Request {
        self.set_body(body);
        self
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Takes the body out of this request, leaving no body. The Content-Length is kept.
    pub fn take_body(&mut self) -> Body {
        std::mem::take(&mut self.body)
    }

    /// The body as UTF-8 text. None if there is no in-memory body or it is not valid UTF-8.
    pub fn body_string(&self) -> Option<String> {
        match &self.body {
            Body::Bytes(bytes) => String::from_utf8(bytes.clone()).ok(),
            _ => None
        }
    }

    /// Checks if the connection should be kept open after this request. Only "Connection: close" ends it.
    pub fn should_keep_alive(&self) -> bool {
        self.connection != Some(Connection::Close)
    }

    /// Checks if the client is waiting for a "100 Continue" before sending the body.
    pub fn expects_continue(&self) -> bool {
        self.expect == Some(Expect::Continue)
    }

    /// Sets a body that was framed by the message itself, leaving the Content-Length as it was received.
    pub(crate) fn set_framed_body(&mut self, body: Body) {
        self.body = body;
    }
}
