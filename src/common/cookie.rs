use std::fmt::{Display, Formatter};

use crate::common::token::{parse_decimal, trim_whitespace};
use crate::parse::error::DecodeError;

/// A cookie sent by a client in the Cookie header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Cookie {
        Cookie { name: name.into(), value: value.into() }
    }

    /// Parses a single "name=value" pair.
    pub fn parse(raw: &str) -> Result<Cookie, DecodeError> {
        let (name, value) = raw.split_once('=').ok_or(DecodeError::InvalidHeaderValue)?;
        let name = trim_whitespace(name);
        if name.is_empty() {
            return Err(DecodeError::InvalidHeaderValue);
        }
        Ok(Cookie::new(name, trim_whitespace(value)))
    }

    /// Parses the value of a Cookie header, a list of pairs separated by ";".
    pub fn parse_list(raw: &str) -> Result<Vec<Cookie>, DecodeError> {
        raw.split(';')
            .map(trim_whitespace)
            .filter(|pair| !pair.is_empty())
            .map(Cookie::parse)
            .collect()
    }
}

impl Display for Cookie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// A cookie set by a server in the Set-Cookie header, with its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    /// Expiry date, kept as received.
    pub expires: Option<String>,
    pub max_age: Option<u64>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub secure: bool,
    pub http_only: bool,
}

impl SetCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> SetCookie {
        SetCookie { name: name.into(), value: value.into(), ..SetCookie::default() }
    }

    /// Parses a Set-Cookie value. Unknown attributes are ignored.
    pub fn parse(raw: &str) -> Result<SetCookie, DecodeError> {
        let mut parts = raw.split(';').map(trim_whitespace);
        let cookie = Cookie::parse(parts.next().unwrap_or_default())?;
        let mut set_cookie = SetCookie::new(cookie.name, cookie.value);

        for attribute in parts.filter(|attribute| !attribute.is_empty()) {
            let (name, value) = match attribute.split_once('=') {
                Some((name, value)) => (trim_whitespace(name), Some(trim_whitespace(value))),
                None => (attribute, None)
            };

            match (name.to_ascii_lowercase().as_str(), value) {
                ("expires", Some(value)) => set_cookie.expires = Some(value.to_string()),
                ("max-age", Some(value)) => {
                    set_cookie.max_age = Some(parse_decimal(value).ok_or(DecodeError::InvalidHeaderValue)?)
                }
                ("domain", Some(value)) => set_cookie.domain = Some(value.to_string()),
                ("path", Some(value)) => set_cookie.path = Some(value.to_string()),
                ("secure", _) => set_cookie.secure = true,
                ("httponly", _) => set_cookie.http_only = true,
                _ => {}
            }
        }

        Ok(set_cookie)
    }
}

impl Display for SetCookie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(expires) = &self.expires {
            write!(f, "; Expires={}", expires)?;
        }
        if let Some(max_age) = self.max_age {
            write!(f, "; Max-Age={}", max_age)?;
        }
        if let Some(domain) = &self.domain {
            write!(f, "; Domain={}", domain)?;
        }
        if let Some(path) = &self.path {
            write!(f, "; Path={}", path)?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        Ok(())
    }
}
