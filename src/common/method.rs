use crate::common::token::closed_tokens;

closed_tokens! {
    /// An HTTP method. Only these methods are supported, any other verb fails to parse.
    pub enum Method: InvalidMethod {
        /// GET method.
        (GET, "GET");
        /// HEAD method.
        (HEAD, "HEAD");
        /// POST method.
        (POST, "POST");
        /// PUT method.
        (PUT, "PUT");
        /// DELETE method.
        (DELETE, "DELETE");
        /// OPTIONS method.
        (OPTIONS, "OPTIONS");
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::GET
    }
}

#[cfg(test)]
mod tests {
    use crate::common::method::Method;
    use crate::parse::error::DecodeError;

    #[test]
    fn parse_all() {
        assert_eq!(Method::parse("GET").unwrap(), Method::GET);
        assert_eq!(Method::parse("HEAD").unwrap(), Method::HEAD);
        assert_eq!(Method::parse("POST").unwrap(), Method::POST);
        assert_eq!(Method::parse("PUT").unwrap(), Method::PUT);
        assert_eq!(Method::parse("DELETE").unwrap(), Method::DELETE);
        assert_eq!(Method::parse("OPTIONS").unwrap(), Method::OPTIONS);
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Method::parse("get").unwrap(), Method::GET);
        assert_eq!(Method::parse("dElEtE").unwrap(), Method::DELETE);
    }

    #[test]
    fn unknown_method() {
        assert!(matches!(Method::parse("PATCH"), Err(DecodeError::InvalidMethod)));
        assert!(matches!(Method::parse("BREW"), Err(DecodeError::InvalidMethod)));
        assert!(matches!(Method::parse(""), Err(DecodeError::InvalidMethod)));
    }

    #[test]
    fn display() {
        assert_eq!(Method::OPTIONS.to_string(), "OPTIONS");
    }
}
