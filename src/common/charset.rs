use crate::common::token::tokens;

tokens! {
    /// A character set, as used by Accept-Charset and the Content-Type charset parameter.
    pub enum Charset {
        (IsoLatin1, "ISO-8859-1");
        (Utf8, "utf-8");
        (UsAscii, "US-ASCII");
        (Utf16, "utf-16");
        (Any, "*");
    }
}

#[cfg(test)]
mod tests {
    use crate::common::charset::Charset;

    #[test]
    fn parse() {
        assert_eq!(Charset::parse("iso-8859-1").unwrap(), Charset::IsoLatin1);
        assert_eq!(Charset::parse("UTF-8").unwrap(), Charset::Utf8);
        assert_eq!(Charset::parse("*").unwrap(), Charset::Any);
        assert_eq!(Charset::parse("utf-7").unwrap(), Charset::Custom("utf-7".to_string()));
        assert!(Charset::parse("").is_err());
    }
}
