use crate::common::token::closed_tokens;

closed_tokens! {
    /// An HTTP protocol version.
    pub enum Version: InvalidVersion {
        /// "HTTP/0.9"
        (Http09, "HTTP/0.9");
        /// "HTTP/1.0"
        (Http10, "HTTP/1.0");
        /// "HTTP/1.1"
        (Http11, "HTTP/1.1");
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::Http11
    }
}

#[cfg(test)]
mod tests {
    use crate::common::version::Version;
    use crate::parse::error::DecodeError;

    #[test]
    fn supported() {
        assert_eq!(Version::parse("HTTP/1.1").unwrap(), Version::Http11);
        assert_eq!(Version::parse("HTTP/1.0").unwrap(), Version::Http10);
        assert_eq!(Version::parse("HTTP/0.9").unwrap(), Version::Http09);
        assert_eq!(Version::parse("http/1.1").unwrap(), Version::Http11);
    }

    #[test]
    fn unsupported() {
        assert!(matches!(Version::parse("HTTP/2"), Err(DecodeError::InvalidVersion)));
        assert!(matches!(Version::parse("HTTP/1.1 "), Err(DecodeError::InvalidVersion)));
        assert!(matches!(Version::parse(""), Err(DecodeError::InvalidVersion)));
    }

    #[test]
    fn default_is_1_1() {
        assert_eq!(Version::default().as_str(), "HTTP/1.1");
    }
}
