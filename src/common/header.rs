use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::common::token::{folded_hash, TokenTable};
use crate::parse::error::DecodeError;

/// A case-insensitive header name. The original casing is kept for writing the header back out,
/// while equality and hashing fold ASCII case.
#[derive(Debug, Clone)]
pub struct HeaderName {
    name: Cow<'static, str>,
    hash: u64,
}

impl HeaderName {
    /// Creates a header name from a static string. Does not validate the name.
    pub const fn from_static(name: &'static str) -> HeaderName {
        HeaderName { name: Cow::Borrowed(name), hash: folded_hash(name.as_bytes()) }
    }

    /// Parses a header name received on the wire. The name must be a non-empty token.
    pub fn parse(raw: &str) -> Result<HeaderName, DecodeError> {
        if raw.is_empty() || !raw.bytes().all(is_token_byte) {
            return Err(DecodeError::InvalidHeaderName);
        }
        Ok(HeaderName::from(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Gets the standard header this name refers to, if any.
    pub fn standard(&self) -> Option<StandardHeader> {
        standard_table().find(&self.name).copied()
    }
}

/// Checks if the byte is allowed in a token (RFC 7230 tchar).
pub fn is_token_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&byte)
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for HeaderName {}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash)
    }
}

impl Display for HeaderName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for HeaderName {
    fn from(value: &str) -> HeaderName {
        HeaderName::from(value.to_string())
    }
}

impl From<String> for HeaderName {
    fn from(value: String) -> HeaderName {
        let hash = folded_hash(value.as_bytes());
        HeaderName { name: Cow::Owned(value), hash }
    }
}

macro_rules! standard_headers {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $variant:ident, $value:literal);
        )+
    ) => {
        $(
            $(#[$docs])*
            pub const $name: HeaderName = HeaderName::from_static($value);
        )+

        /// The header names known to this library.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum StandardHeader {
            $($variant,)+
        }

        fn standard_table() -> &'static TokenTable<StandardHeader> {
            static TABLE: std::sync::OnceLock<TokenTable<StandardHeader>> = std::sync::OnceLock::new();
            TABLE.get_or_init(|| TokenTable::new(vec![
                $(($value, StandardHeader::$variant),)+
            ]))
        }
    }
}

standard_headers! {
    (ACCEPT, Accept, "Accept");
    (ACCEPT_CHARSET, AcceptCharset, "Accept-Charset");
    (ACCEPT_ENCODING, AcceptEncoding, "Accept-Encoding");
    (ACCEPT_LANGUAGE, AcceptLanguage, "Accept-Language");
    (ACCEPT_RANGES, AcceptRanges, "Accept-Ranges");
    (ACCESS_CONTROL_ALLOW_CREDENTIALS, AccessControlAllowCredentials, "Access-Control-Allow-Credentials");
    (ACCESS_CONTROL_ALLOW_HEADERS, AccessControlAllowHeaders, "Access-Control-Allow-Headers");
    (ACCESS_CONTROL_ALLOW_METHODS, AccessControlAllowMethods, "Access-Control-Allow-Methods");
    (ACCESS_CONTROL_ALLOW_ORIGIN, AccessControlAllowOrigin, "Access-Control-Allow-Origin");
    (ACCESS_CONTROL_EXPOSE_HEADERS, AccessControlExposeHeaders, "Access-Control-Expose-Headers");
    (ACCESS_CONTROL_MAX_AGE, AccessControlMaxAge, "Access-Control-Max-Age");
    (ACCESS_CONTROL_REQUEST_HEADERS, AccessControlRequestHeaders, "Access-Control-Request-Headers");
    (ACCESS_CONTROL_REQUEST_METHOD, AccessControlRequestMethod, "Access-Control-Request-Method");
    (AGE, Age, "Age");
    (ALLOW, Allow, "Allow");
    (AUTHORIZATION, Authorization, "Authorization");
    (CACHE_CONTROL, CacheControl, "Cache-Control");
    (CONNECTION, Connection, "Connection");
    (CONTENT_DISPOSITION, ContentDisposition, "Content-Disposition");
    (CONTENT_ENCODING, ContentEncoding, "Content-Encoding");
    (CONTENT_LANGUAGE, ContentLanguage, "Content-Language");
    (CONTENT_LENGTH, ContentLength, "Content-Length");
    (CONTENT_LOCATION, ContentLocation, "Content-Location");
    (CONTENT_RANGE, ContentRange, "Content-Range");
    (CONTENT_TYPE, ContentType, "Content-Type");
    (COOKIE, Cookie, "Cookie");
    (DNT, Dnt, "DNT");
    (DATE, Date, "Date");
    (ETAG, ETag, "ETag");
    (EXPECT, Expect, "Expect");
    (EXPIRES, Expires, "Expires");
    (FORWARDED, Forwarded, "Forwarded");
    (FROM, From, "From");
    (HOST, Host, "Host");
    (IF_MATCH, IfMatch, "If-Match");
    (IF_MODIFIED_SINCE, IfModifiedSince, "If-Modified-Since");
    (IF_NONE_MATCH, IfNoneMatch, "If-None-Match");
    (IF_RANGE, IfRange, "If-Range");
    (IF_UNMODIFIED_SINCE, IfUnmodifiedSince, "If-Unmodified-Since");
    (KEEP_ALIVE, KeepAlive, "Keep-Alive");
    (LAST_MODIFIED, LastModified, "Last-Modified");
    (LINK, Link, "Link");
    (LOCATION, Location, "Location");
    (MAX_FORWARDS, MaxForwards, "Max-Forwards");
    (ORIGIN, Origin, "Origin");
    (PRAGMA, Pragma, "Pragma");
    (PROXY_AUTHENTICATE, ProxyAuthenticate, "Proxy-Authenticate");
    (PROXY_AUTHORIZATION, ProxyAuthorization, "Proxy-Authorization");
    (RANGE, Range, "Range");
    (REFERER, Referer, "Referer");
    (REFERRER_POLICY, ReferrerPolicy, "Referrer-Policy");
    (RETRY_AFTER, RetryAfter, "Retry-After");
    (SERVER, Server, "Server");
    (SET_COOKIE, SetCookie, "Set-Cookie");
    (STRICT_TRANSPORT_SECURITY, StrictTransportSecurity, "Strict-Transport-Security");
    (TE, Te, "TE");
    (TRAILER, Trailer, "Trailer");
    (TRANSFER_ENCODING, TransferEncoding, "Transfer-Encoding");
    (USER_AGENT, UserAgent, "User-Agent");
    (UPGRADE, Upgrade, "Upgrade");
    (UPGRADE_INSECURE_REQUESTS, UpgradeInsecureRequests, "Upgrade-Insecure-Requests");
    (VARY, Vary, "Vary");
    (VIA, Via, "Via");
    (WARNING, Warning, "Warning");
    (WWW_AUTHENTICATE, WwwAuthenticate, "WWW-Authenticate");
    (X_CONTENT_TYPE_OPTIONS, XContentTypeOptions, "X-Content-Type-Options");
    (X_FRAME_OPTIONS, XFrameOptions, "X-Frame-Options");
}

/// Creates a header map. Names can be header constants or strings.
/// ```
/// use my_http::common::header::{CONNECTION, CONTENT_LENGTH, HeaderName};
/// use my_http::header_map;
///
/// let headers = header_map![
///    (CONNECTION, "keep-alive"),
///    (CONTENT_LENGTH, "5"),
///    ("custom-header", "hello"),
/// ];
///
/// assert_eq!(headers.get(&CONNECTION), Some("keep-alive"));
/// assert_eq!(headers.get(&HeaderName::from("Custom-Header")), Some("hello"));
/// ```
#[macro_export]
macro_rules! header_map {
    () => { $crate::common::header::Headers::new() };
    ($(($header:expr, $value:expr)),+ $(,)?) => {
        $crate::common::header::Headers::from_pairs(vec![
            $(($header.into(), $value.into()),)+
        ])
    }
}

/// Headers that have no typed field, in the order they were first seen.
/// A repeated name replaces the earlier value where it stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(HeaderName, String)>,
}

impl Headers {
    pub fn new() -> Headers {
        Headers { entries: vec![] }
    }

    /// Gets a header map from the given header name and value pairs.
    pub fn from_pairs(pairs: Vec<(HeaderName, String)>) -> Headers {
        pairs.into_iter().fold(Headers::new(), |mut headers, (name, value)| {
            headers.insert(name, value);
            headers
        })
    }

    /// Sets the value of a header, returning the previous value if there was one.
    pub fn insert(&mut self, name: HeaderName, value: String) -> Option<String> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &HeaderName) -> Option<&str> {
        self.entries.iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &HeaderName) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &HeaderName) -> Option<String> {
        let index = self.entries.iter().position(|(existing, _)| existing == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item=(&HeaderName, &str)> {
        self.entries.iter().map(|(name, value)| (name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
