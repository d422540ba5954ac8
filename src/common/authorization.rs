use std::fmt::{Display, Formatter};

use crate::common::token::{closed_tokens, trim_whitespace};
use crate::parse::error::DecodeError;

closed_tokens! {
    /// Authorization schemes with their own variant in `Authorization`.
    pub enum AuthScheme: InvalidHeaderValue {
        (Basic, "Basic");
        (Bearer, "Bearer");
        (Token, "Token");
    }
}

/// The value of an Authorization header: a scheme followed by credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    Basic(String),
    Bearer(String),
    Token(String),
    Custom { scheme: String, credentials: String },
}

impl Authorization {
    /// Parses "scheme credentials". The scheme is matched ignoring case. Credentials are required.
    pub fn parse(raw: &str) -> Result<Authorization, DecodeError> {
        let (scheme, credentials) = raw.split_once(' ').ok_or(DecodeError::InvalidHeaderValue)?;
        let credentials = trim_whitespace(credentials);

        if scheme.is_empty() || credentials.is_empty() {
            return Err(DecodeError::InvalidHeaderValue);
        }

        let credentials = credentials.to_string();
        Ok(match AuthScheme::parse(scheme) {
            Ok(AuthScheme::Basic) => Authorization::Basic(credentials),
            Ok(AuthScheme::Bearer) => Authorization::Bearer(credentials),
            Ok(AuthScheme::Token) => Authorization::Token(credentials),
            Err(_) => Authorization::Custom { scheme: scheme.to_string(), credentials },
        })
    }
}

impl Display for Authorization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Authorization::Basic(credentials) => write!(f, "{} {}", AuthScheme::Basic, credentials),
            Authorization::Bearer(credentials) => write!(f, "{} {}", AuthScheme::Bearer, credentials),
            Authorization::Token(credentials) => write!(f, "{} {}", AuthScheme::Token, credentials),
            Authorization::Custom { scheme, credentials } => write!(f, "{} {}", scheme, credentials),
        }
    }
}
