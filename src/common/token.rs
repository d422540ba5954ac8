use std::collections::HashMap;

/// Case-folded djb2 hash. Every byte is OR'd with 0x20 before mixing, so ASCII letters hash the
/// same in either case. Other bytes may also collide, so a hash match must be confirmed.
pub const fn folded_hash(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 5381;
    let mut i = 0;
    while i < bytes.len() {
        hash = (hash << 5).wrapping_add(hash).wrapping_add((bytes[i] | 0x20) as u64);
        i += 1;
    }
    hash
}

/// A lookup table from known literals to values, keyed by the case-folded hash of the literal.
/// Hash matches are confirmed with a case-insensitive comparison before a value is returned.
pub struct TokenTable<T> {
    buckets: HashMap<u64, Vec<(&'static str, T)>>,
}

impl<T> TokenTable<T> {
    /// Creates a table from the given literal and value pairs.
    pub fn new(entries: Vec<(&'static str, T)>) -> TokenTable<T> {
        let mut buckets: HashMap<u64, Vec<(&'static str, T)>> = HashMap::with_capacity(entries.len());
        for (literal, value) in entries {
            buckets.entry(folded_hash(literal.as_bytes())).or_default().push((literal, value));
        }
        TokenTable { buckets }
    }

    /// Finds the value for the literal equal to raw, ignoring ASCII case.
    pub fn find(&self, raw: &str) -> Option<&T> {
        self.buckets.get(&folded_hash(raw.as_bytes()))?
            .iter()
            .find(|(literal, _)| literal.eq_ignore_ascii_case(raw))
            .map(|(_, value)| value)
    }
}

/// Declares a header value grammar: a closed set of known literals plus a `Custom` variant that
/// keeps unrecognized values as they were received.
macro_rules! tokens {
    (
        $(#[$docs:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_docs:meta])*
                ($variant:ident, $literal:literal);
            )+
        }
    ) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_docs])*
                $variant,
            )+
            /// A value outside of the known set, kept exactly as it was received.
            Custom(String),
        }

        impl $name {
            /// Parses a raw value. Known values are matched ignoring ASCII case, anything else
            /// becomes `Custom`. Empty input is an error.
            pub fn parse(raw: &str) -> Result<$name, $crate::parse::error::DecodeError> {
                static TABLE: std::sync::OnceLock<$crate::common::token::TokenTable<$name>> = std::sync::OnceLock::new();

                if raw.is_empty() {
                    return Err($crate::parse::error::DecodeError::InvalidHeaderValue);
                }

                let table = TABLE.get_or_init(|| $crate::common::token::TokenTable::new(vec![
                    $(($literal, $name::$variant),)+
                ]));

                Ok(table.find(raw).cloned().unwrap_or_else(|| $name::Custom(raw.to_string())))
            }

            /// The wire form of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $literal,)+
                    $name::Custom(value) => value.as_str(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declares a header value grammar with no escape for unknown values. Parsing anything outside
/// the known set fails with the given error.
macro_rules! closed_tokens {
    (
        $(#[$docs:meta])*
        pub enum $name:ident: $error:ident {
            $(
                $(#[$variant_docs:meta])*
                ($variant:ident, $literal:literal);
            )+
        }
    ) => {
        $(#[$docs])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_docs])*
                $variant,
            )+
        }

        impl $name {
            /// Parses a raw value, ignoring ASCII case.
            pub fn parse(raw: &str) -> Result<$name, $crate::parse::error::DecodeError> {
                static TABLE: std::sync::OnceLock<$crate::common::token::TokenTable<$name>> = std::sync::OnceLock::new();

                let table = TABLE.get_or_init(|| $crate::common::token::TokenTable::new(vec![
                    $(($literal, $name::$variant),)+
                ]));

                table.find(raw).copied().ok_or($crate::parse::error::DecodeError::$error)
            }

            /// The wire form of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use closed_tokens;
pub(crate) use tokens;

/// Removes leading and trailing spaces and tabs.
pub fn trim_whitespace(raw: &str) -> &str {
    raw.trim_matches(|c| c == ' ' || c == '\t')
}

/// Parses a string of ASCII digits as a decimal number. Signs, spaces and empty input are rejected.
pub fn parse_decimal(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use crate::common::token::{folded_hash, parse_decimal, TokenTable, trim_whitespace};

    #[test]
    fn hash_ignores_case() {
        assert_eq!(folded_hash(b"Content-Type"), folded_hash(b"content-type"));
        assert_eq!(folded_hash(b"Content-Type"), folded_hash(b"CONTENT-TYPE"));
        assert_ne!(folded_hash(b"Content-Type"), folded_hash(b"Content-Length"));
    }

    #[test]
    fn hash_of_empty() {
        assert_eq!(folded_hash(b""), 5381);
    }

    #[test]
    fn table_confirms_hash_matches() {
        // '@' | 0x20 == '`', so these two hash the same but are different tokens
        assert_eq!(folded_hash(b"a@"), folded_hash(b"a`"));

        let table = TokenTable::new(vec![("a@", 1)]);

        assert_eq!(table.find("a@"), Some(&1));
        assert_eq!(table.find("A@"), Some(&1));
        assert_eq!(table.find("a`"), None);
    }

    #[test]
    fn table_missing() {
        let table = TokenTable::new(vec![("gzip", 1), ("deflate", 2)]);
        assert_eq!(table.find("br"), None);
        assert_eq!(table.find("DEFLATE"), Some(&2));
    }

    #[test]
    fn trim() {
        assert_eq!(trim_whitespace("  hello there \t"), "hello there");
        assert_eq!(trim_whitespace(""), "");
    }

    #[test]
    fn decimal() {
        assert_eq!(parse_decimal("300"), Some(300));
        assert_eq!(parse_decimal("0"), Some(0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("+5"), None);
        assert_eq!(parse_decimal("5 "), None);
        assert_eq!(parse_decimal("99999999999999999999999"), None);
    }
}
