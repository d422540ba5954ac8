use crate::common::body::Body;
use crate::common::connection::Connection;
use crate::common::cookie::SetCookie;
use crate::common::encoding::{ContentEncoding, TransferEncoding};
use crate::common::header::Headers;
use crate::common::media::ContentType;
use crate::common::status;
use crate::common::status::Status;
use crate::common::version::Version;

/// An HTTP response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Response {
    /// The status.
    pub status: Status,
    pub version: Version,
    pub connection: Option<Connection>,
    pub content_encoding: Option<Vec<ContentEncoding>>,
    pub content_type: Option<ContentType>,
    pub content_length: Option<u64>,
    pub transfer_encoding: Option<Vec<TransferEncoding>>,
    /// Headers without a typed field.
    pub headers: Headers,
    /// One entry per Set-Cookie header.
    pub set_cookies: Vec<SetCookie>,
    body: Body,
}

impl Response {
    /// Creates an empty response with the given status and a Content-Length of 0.
    pub fn new(status: Status) -> Response {
        Response { status, content_length: Some(0), ..Default::default() }
    }

    /// Creates a "200 OK" plain text response.
    pub fn string(body: impl Into<String>) -> Response {
        Response::with_content(ContentType::text(), body.into().into_bytes())
    }

    /// Creates a "200 OK" HTML response.
    pub fn html(body: impl Into<String>) -> Response {
        Response::with_content(ContentType::html(), body.into().into_bytes())
    }

    /// Creates a "200 OK" response carrying raw bytes.
    pub fn bytes(body: impl Into<Vec<u8>>) -> Response {
        Response::with_content(ContentType::stream(), body.into())
    }

    fn with_content(content_type: ContentType, body: Vec<u8>) -> Response {
        let mut response = Response::new(status::OK);
        response.content_type = Some(content_type);
        response.set_body(body);
        response
    }

    /// Sets the body and the Content-Length to match it.
    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        let body = body.into();
        self.content_length = Some(body.len() as u64);
        self.body = Body::from(body);
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Takes the body out of this response, leaving no body. The Content-Length is kept.
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

    /// Checks if a message body may follow this status. 1xx, 204 and 304 responses never have one.
    pub fn status_allows_body(&self) -> bool {
        !(self.status.is_informational() || self.status.code == 204 || self.status.code == 304)
    }

    pub(crate) fn set_framed_body(&mut self, body: Body) {
        self.body = body;
    }
}

impl From<Status> for Response {
    fn from(status: Status) -> Self {
        Response::new(status)
    }
}

impl From<String> for Response {
    /// Creates a plain text response with the given string as its body.
    fn from(body: String) -> Self {
        Response::string(body)
    }
}

impl From<&str> for Response {
    fn from(body: &str) -> Self {
        Response::string(body)
    }
}

impl From<Vec<u8>> for Response {
    /// Creates a response with the given bytes as its body.
    fn from(body: Vec<u8>) -> Self {
        Response::bytes(body)
    }
}
