use crate::common::token::{tokens, trim_whitespace};
use crate::parse::error::DecodeError;

tokens! {
    /// A content coding, used by Accept-Encoding and Content-Encoding.
    pub enum ContentEncoding {
        (Gzip, "gzip");
        (Deflate, "deflate");
        (Compress, "compress");
        (Br, "br");
        (Identity, "identity");
        (Any, "*");
    }
}

tokens! {
    /// A transfer coding, used by Transfer-Encoding.
    pub enum TransferEncoding {
        (Chunked, "chunked");
        (Compress, "compress");
        (Deflate, "deflate");
        (Gzip, "gzip");
        (Identity, "identity");
    }
}

/// Parses a comma separated list of codings. Empty items are skipped, an empty list is an error.
pub fn parse_list<T>(raw: &str, parse_value: impl Fn(&str) -> Result<T, DecodeError>) -> Result<Vec<T>, DecodeError> {
    let list = raw.split(',')
        .map(trim_whitespace)
        .filter(|item| !item.is_empty())
        .map(parse_value)
        .collect::<Result<Vec<T>, DecodeError>>()?;

    if list.is_empty() {
        return Err(DecodeError::InvalidHeaderValue);
    }

    Ok(list)
}
