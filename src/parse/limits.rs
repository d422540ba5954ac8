/// Size limits applied while decoding a message. Exceeding any of them is an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of the start line, a header line, or a chunk size line, including the CRLF.
    pub max_line_length: usize,
    /// Maximum number of header lines.
    pub max_header_count: usize,
    /// Maximum number of bytes taken up by all header lines together.
    pub max_headers_size: usize,
    /// Maximum number of chunks in a chunked body.
    pub max_chunk_count: usize,
    /// Maximum size of a body.
    pub max_body_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_line_length: 8 * 1024,
            max_header_count: 100,
            max_headers_size: 64 * 1024,
            max_chunk_count: 4096,
            max_body_size: 3 * 1024 * 1024, // 3 megabytes
        }
    }
}
