/// Authorization header schemes.
pub mod authorization;
/// Message bodies, in memory or streamed from the connection.
pub mod body;
/// Character sets for Accept-Charset and Content-Type.
pub mod charset;
/// Connection and Expect header values.
pub mod connection;
/// Cookie and Set-Cookie header values.
pub mod cookie;
/// Content and transfer codings.
pub mod encoding;
/// HTTP header data types and functions.
pub mod header;
/// Language tags for Accept-Language.
pub mod language;
/// Media types and the Content-Type header.
pub mod media;
/// HTTP method data type and functions.
pub mod method;
/// Punycode for internationalized host names.
pub mod punycode;
/// Quality weighted lists for content negotiation headers.
pub mod quality;
/// HTTP request data type and functions.
pub mod request;
/// HTTP response data type and functions
pub mod response;
/// HTTP status data type and functions.
pub mod status;
/// Case-insensitive token matching.
pub mod token;
/// URLs, hosts and query strings.
pub mod url;
/// HTTP version constants and functions.
pub mod version;
