use std::fmt::{Display, Formatter};

use crate::common::charset::Charset;
use crate::common::token::{closed_tokens, tokens, trim_whitespace};
use crate::parse::error::DecodeError;

closed_tokens! {
    /// Top level types with a known set of subtypes.
    pub enum TopLevelType: InvalidHeaderValue {
        (Text, "text");
        (Application, "application");
        (Image, "image");
        (Multipart, "multipart");
    }
}

tokens! {
    /// Subtypes of "text".
    pub enum TextType {
        (Plain, "plain");
        (Html, "html");
        (Css, "css");
        (Csv, "csv");
        (Javascript, "javascript");
        (Xml, "xml");
        (Any, "*");
    }
}

tokens! {
    /// Subtypes of "application".
    pub enum ApplicationType {
        (Json, "json");
        (Xml, "xml");
        (UrlEncoded, "x-www-form-urlencoded");
        (Stream, "stream");
        (OctetStream, "octet-stream");
        (Javascript, "javascript");
        (Pdf, "pdf");
        (Zip, "zip");
        (Any, "*");
    }
}

tokens! {
    /// Subtypes of "image".
    pub enum ImageType {
        (Png, "png");
        (Jpeg, "jpeg");
        (Gif, "gif");
        (Svg, "svg+xml");
        (Webp, "webp");
        (Icon, "x-icon");
        (Any, "*");
    }
}

tokens! {
    /// Subtypes of "multipart".
    pub enum MultipartType {
        (FormData, "form-data");
        (Mixed, "mixed");
        (Alternative, "alternative");
        (ByteRanges, "byteranges");
        (Any, "*");
    }
}

/// A media type, like "text/html". Used by Accept and Content-Type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// "*/*"
    Any,
    Text(TextType),
    Application(ApplicationType),
    Image(ImageType),
    Multipart(MultipartType),
    /// A type outside of the known top level types, kept whole as received.
    Custom(String),
}

impl MediaType {
    /// Parses a "type/subtype" pair. A missing slash or an empty half is an error.
    pub fn parse(raw: &str) -> Result<MediaType, DecodeError> {
        let (top, sub) = raw.split_once('/').ok_or(DecodeError::InvalidHeaderValue)?;
        if top.is_empty() || sub.is_empty() {
            return Err(DecodeError::InvalidHeaderValue);
        }

        let media_type = match TopLevelType::parse(top) {
            Ok(TopLevelType::Text) => MediaType::Text(TextType::parse(sub)?),
            Ok(TopLevelType::Application) => MediaType::Application(ApplicationType::parse(sub)?),
            Ok(TopLevelType::Image) => MediaType::Image(ImageType::parse(sub)?),
            Ok(TopLevelType::Multipart) => MediaType::Multipart(MultipartType::parse(sub)?),
            Err(_) if top == "*" && sub == "*" => MediaType::Any,
            Err(_) => MediaType::Custom(raw.to_string())
        };

        Ok(media_type)
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Any => f.write_str("*/*"),
            MediaType::Text(sub) => write!(f, "{}/{}", TopLevelType::Text, sub),
            MediaType::Application(sub) => write!(f, "{}/{}", TopLevelType::Application, sub),
            MediaType::Image(sub) => write!(f, "{}/{}", TopLevelType::Image, sub),
            MediaType::Multipart(sub) => write!(f, "{}/{}", TopLevelType::Multipart, sub),
            MediaType::Custom(raw) => f.write_str(raw),
        }
    }
}

/// The value of a Content-Type header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    pub media_type: MediaType,
    pub charset: Option<Charset>,
    /// Boundary for multipart bodies.
    pub boundary: Option<String>,
}

impl ContentType {
    pub fn new(media_type: MediaType) -> ContentType {
        ContentType { media_type, charset: None, boundary: None }
    }

    pub fn text() -> ContentType {
        ContentType::new(MediaType::Text(TextType::Plain))
    }

    pub fn html() -> ContentType {
        ContentType::new(MediaType::Text(TextType::Html))
    }

    pub fn json() -> ContentType {
        ContentType::new(MediaType::Application(ApplicationType::Json))
    }

    pub fn stream() -> ContentType {
        ContentType::new(MediaType::Application(ApplicationType::Stream))
    }

    pub fn url_encoded() -> ContentType {
        ContentType::new(MediaType::Application(ApplicationType::UrlEncoded))
    }

    /// Parses a Content-Type value. Parameters other than charset and boundary are ignored.
    pub fn parse(raw: &str) -> Result<ContentType, DecodeError> {
        let mut parts = raw.split(';').map(trim_whitespace);
        let mut content_type = ContentType::new(MediaType::parse(parts.next().unwrap_or_default())?);

        for param in parts.filter(|param| !param.is_empty()) {
            let (name, value) = param.split_once('=').ok_or(DecodeError::InvalidHeaderValue)?;
            let value = trim_whitespace(value).trim_matches('"');
            match trim_whitespace(name) {
                name if name.eq_ignore_ascii_case("charset") => content_type.charset = Some(Charset::parse(value)?),
                name if name.eq_ignore_ascii_case("boundary") => content_type.boundary = Some(value.to_string()),
                _ => {}
            }
        }

        Ok(content_type)
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.media_type)?;
        if let Some(charset) = &self.charset {
            write!(f, "; charset={}", charset)?;
        }
        if let Some(boundary) = &self.boundary {
            write!(f, "; boundary={}", boundary)?;
        }
        Ok(())
    }
}
