use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use crate::parse::error::DecodeError;

/// An HTTP status.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct Status {
    /// The status code.
    pub code: u16,
    /// The reason phrase for the status.
    pub reason: Cow<'static, str>,
}

impl Status {
    /// Creates a status with a code and reason outside of the standard table.
    pub fn custom(code: u16, reason: impl Into<String>) -> Status {
        Status { code, reason: Cow::Owned(reason.into()) }
    }

    /// Parses the part of a status line after the version, like "404 Not Found".
    /// Standard codes use the standard reason phrase, other codes keep the received reason.
    pub fn parse(raw: &str) -> Result<Status, DecodeError> {
        let (code, reason) = raw.split_once(' ').unwrap_or((raw, ""));

        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::InvalidStatus);
        }

        let code: u16 = code.parse().map_err(|_| DecodeError::InvalidStatus)?;

        Ok(Status::from_code(code).unwrap_or_else(|| Status::custom(code, reason)))
    }

    /// Checks if this is an informational (1xx) status. These responses never carry a body.
    pub fn is_informational(&self) -> bool {
        (100..200).contains(&self.code)
    }
}

impl Default for Status {
    fn default() -> Self {
        OK
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.reason)
    }
}

macro_rules! status_codes {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $num:literal, $phrase:literal);
        )+
    ) => {
        $(
            $(#[$docs])*
            pub const $name: Status = Status { code: $num, reason: Cow::Borrowed($phrase) };
        )+

        impl Status {
            /// Gets the standard status for the given status code.
            pub fn from_code(code: u16) -> Option<Status> {
                match code {
                    $(
                    $num => Some($name),
                    )+
                    _ => None
                }
            }
        }
    }
}

status_codes! {
    (CONTINUE, 100, "Continue");
    (SWITCHING_PROTOCOLS, 101, "Switching Protocols");
    (OK, 200, "OK");
    (CREATED, 201, "Created");
    (ACCEPTED, 202, "Accepted");
    (NON_AUTHORITATIVE_INFORMATION, 203, "Non-Authoritative Information");
    (NO_CONTENT, 204, "No Content");
    (RESET_CONTENT, 205, "Reset Content");
    (PARTIAL_CONTENT, 206, "Partial Content");
    (MULTIPLE_CHOICES, 300, "Multiple Choices");
    (MOVED_PERMANENTLY, 301, "Moved Permanently");
    (FOUND, 302, "Found");
    (SEE_OTHER, 303, "See Other");
    (NOT_MODIFIED, 304, "Not Modified");
    (USE_PROXY, 305, "Use Proxy");
    (TEMPORARY_REDIRECT, 307, "Temporary Redirect");
    (PERMANENT_REDIRECT, 308, "Permanent Redirect");
    (BAD_REQUEST, 400, "Bad Request");
    (UNAUTHORIZED, 401, "Unauthorized");
    (PAYMENT_REQUIRED, 402, "Payment Required");
    (FORBIDDEN, 403, "Forbidden");
    (NOT_FOUND, 404, "Not Found");
    (METHOD_NOT_ALLOWED, 405, "Method Not Allowed");
    (NOT_ACCEPTABLE, 406, "Not Acceptable");
    (PROXY_AUTHENTICATION_REQUIRED, 407, "Proxy Authentication Required");
    (REQUEST_TIMEOUT, 408, "Request Timeout");
    (CONFLICT, 409, "Conflict");
    (GONE, 410, "Gone");
    (LENGTH_REQUIRED, 411, "Length Required");
    (PRECONDITION_FAILED, 412, "Precondition Failed");
    (PAYLOAD_TOO_LARGE, 413, "Payload Too Large");
    (URI_TOO_LONG, 414, "URI Too Long");
    (UNSUPPORTED_MEDIA_TYPE, 415, "Unsupported Media Type");
    (RANGE_NOT_SATISFIABLE, 416, "Range Not Satisfiable");
    (EXPECTATION_FAILED, 417, "Expectation Failed");
    (UNPROCESSABLE_ENTITY, 422, "Unprocessable Entity");
    (UPGRADE_REQUIRED, 426, "Upgrade Required");
    (PRECONDITION_REQUIRED, 428, "Precondition Required");
    (TOO_MANY_REQUESTS, 429, "Too Many Requests");
    (REQUEST_HEADER_FIELDS_TOO_LARGE, 431, "Request Header Fields Too Large");
    (INTERNAL_SERVER_ERROR, 500, "Internal Server Error");
    (NOT_IMPLEMENTED, 501, "Not Implemented");
    (BAD_GATEWAY, 502, "Bad Gateway");
    (SERVICE_UNAVAILABLE, 503, "Service Unavailable");
    (GATEWAY_TIMEOUT, 504, "Gateway Timeout");
    (HTTP_VERSION_NOT_SUPPORTED, 505, "HTTP Version Not Supported");
}
