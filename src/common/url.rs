use std::fmt::{Display, Formatter};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::common::punycode;
use crate::common::token::parse_decimal;
use crate::parse::error::DecodeError;

/// Characters that pass through query encoding as is.
const QUERY_UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Characters that pass through path encoding as is.
const PATH_UNRESERVED: &AsciiSet = &QUERY_UNRESERVED.remove(b'/');

/// URL scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// A host and optional port, from an absolute URL or the Host header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Host {
    pub address: String,
    pub port: Option<u16>,
}

impl Host {
    pub fn new(address: impl Into<String>, port: Option<u16>) -> Host {
        Host { address: address.into(), port }
    }

    /// Parses "address" or "address:port". Bracketed IPv6 addresses are supported.
    pub fn parse(raw: &str) -> Result<Host, DecodeError> {
        let (address, port) = if raw.starts_with('[') {
            let end = raw.find(']').ok_or(DecodeError::InvalidHeaderValue)?;
            let rest = &raw[end + 1..];
            let port = match rest {
                "" => None,
                _ => Some(rest.strip_prefix(':').ok_or(DecodeError::InvalidHeaderValue)?)
            };
            (&raw[..=end], port)
        } else {
            match raw.rsplit_once(':') {
                Some((address, port)) => (address, Some(port)),
                None => (raw, None)
            }
        };

        if address.is_empty() || address.bytes().any(|b| b.is_ascii_control() || b == b' ' || b == b'/') {
            return Err(DecodeError::InvalidHeaderValue);
        }

        let port = match port {
            Some(port) => Some(parse_decimal(port)
                .and_then(|port| u16::try_from(port).ok())
                .ok_or(DecodeError::InvalidHeaderValue)?),
            None => None
        };

        Ok(Host::new(address, port))
    }

    /// Gets this host with its address converted to ASCII (punycode) form.
    pub fn to_ascii(&self) -> Host {
        Host::new(punycode::encode_domain(&self.address), self.port)
    }

    /// Gets this host with any punycode labels in its address decoded.
    pub fn to_unicode(&self) -> Option<Host> {
        Some(Host::new(punycode::decode_domain(&self.address)?, self.port))
    }
}

impl Display for Host {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

/// Query parameters. Keeps insertion order for encoding, a repeated name replaces the earlier value.
/// Two queries are equal when they hold the same pairs in any order.
#[derive(Debug, Clone, Default, Eq)]
pub struct Query {
    values: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Query {
        Query::default()
    }

    /// Parses a raw query string. Segments without "=" are skipped.
    pub fn parse(raw: &str) -> Query {
        let mut query = Query::new();
        for segment in raw.split('&').filter(|segment| segment.contains('=')) {
            if let Some((name, value)) = form_urlencoded::parse(segment.as_bytes()).next() {
                query.insert(name.into_owned(), value.into_owned());
            }
        }
        query
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.values.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.iter().find(|(existing, _)| existing == name).map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item=(&str, &str)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Query {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut query = Query::new();
        for (name, value) in pairs {
            query.insert(name, value);
        }
        query
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", utf8_percent_encode(name, QUERY_UNRESERVED), utf8_percent_encode(value, QUERY_UNRESERVED))?;
        }
        Ok(())
    }
}

/// A URL. Equality only compares the path and query.
#[derive(Debug, Clone, Eq)]
pub struct Url {
    pub scheme: Option<Scheme>,
    pub host: Option<Host>,
    /// The decoded path.
    pub path: String,
    pub query: Query,
    pub fragment: Option<String>,
}

impl Url {
    /// Creates a URL with only a path.
    pub fn new(path: impl Into<String>) -> Url {
        Url { scheme: None, host: None, path: path.into(), query: Query::new(), fragment: None }
    }

    pub fn with_query(path: impl Into<String>, query: Query) -> Url {
        Url { query, ..Url::new(path) }
    }

    /// Parses a URL in origin form ("/path?query") or absolute form ("http://host/path").
    pub fn parse(raw: &str) -> Result<Url, DecodeError> {
        if raw.is_empty() || raw.bytes().any(|b| b.is_ascii_control() || b == b' ') {
            return Err(DecodeError::InvalidUrl);
        }

        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (raw, None)
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Query::parse(query)),
            None => (rest, Query::new())
        };

        let (scheme, host, path) = match split_scheme(rest) {
            Some((scheme, after_scheme)) => {
                let path_start = after_scheme.find('/').unwrap_or(after_scheme.len());
                let host = Host::parse(&after_scheme[..path_start]).map_err(|_| DecodeError::InvalidUrl)?;
                let path = match &after_scheme[path_start..] {
                    "" => "/",
                    path => path
                };
                (Some(scheme), Some(host), path)
            }
            None if rest.starts_with('/') || rest == "*" => (None, None, rest),
            None => return Err(DecodeError::InvalidUrl)
        };

        let path = percent_decode_str(path)
            .decode_utf8()
            .map_err(|_| DecodeError::InvalidUrl)?
            .into_owned();

        Ok(Url { scheme, host, path, query, fragment })
    }

    /// The form of this URL used in a request line: the encoded path followed by the query, if any.
    /// The asterisk form ("*") is written as it is.
    pub fn request_target(&self) -> String {
        let mut target = match self.path.as_str() {
            "*" => String::from("*"),
            path => utf8_percent_encode(path, PATH_UNRESERVED).to_string()
        };
        if !self.query.is_empty() {
            target.push('?');
            target.push_str(&self.query.to_string());
        }
        target
    }
}

fn split_scheme(raw: &str) -> Option<(Scheme, &str)> {
    let (scheme, rest) = raw.split_once("://")?;
    if scheme.eq_ignore_ascii_case("http") {
        Some((Scheme::Http, rest))
    } else if scheme.eq_ignore_ascii_case("https") {
        Some((Scheme::Https, rest))
    } else {
        None
    }
}

impl Default for Url {
    fn default() -> Self {
        Url::new("/")
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.query == other.query
    }
}

impl From<&str> for Url {
    /// Creates a URL with the given path and no query.
    fn from(path: &str) -> Self {
        Url::new(path)
    }
}

impl Display for Url {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(scheme) = self.scheme {
            write!(f, "{}://", scheme.as_str())?;
        }
        if let Some(host) = &self.host {
            write!(f, "{}", host)?;
        }
        f.write_str(&self.request_target())?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
