use std::io::BufReader;
use std::net::TcpStream;

use log::debug;
use thiserror::Error;

use crate::common::connection::Connection;
use crate::common::method::Method;
use crate::common::request::Request;
use crate::common::response::Response;
use crate::common::url::{Host, Url};
use crate::encode::{encode_request, EncodeError};
use crate::parse::{decode_response, decode_response_to_head, DecodeError, Limits};

/// An error from making a request.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not decode response: {0}")]
    Decode(#[from] DecodeError),
    #[error("could not encode request: {0}")]
    Encode(#[from] EncodeError),
}

/// A blocking HTTP client for one host. The connection is opened on the first request and kept
/// open between requests until the server closes it or a request fails.
pub struct Client {
    host: Host,
    limits: Limits,
    stream: Option<BufReader<TcpStream>>,
}

impl Client {
    pub fn new(address: impl Into<String>, port: u16) -> Client {
        Client { host: Host::new(address, Some(port)), limits: Limits::default(), stream: None }
    }

    /// Sets the limits used for decoding responses.
    pub fn with_limits(mut self, limits: Limits) -> Client {
        self.limits = limits;
        self
    }

    /// Opens a new connection, replacing the current one.
    pub fn connect(&mut self) -> Result<(), ClientError> {
        self.disconnect();
        let port = self.host.port.unwrap_or(80);
        let stream = TcpStream::connect((self.host.address.as_str(), port))?;
        debug!("connected to {}", self.host);
        self.stream = Some(BufReader::new(stream));
        Ok(())
    }

    pub fn disconnect(&mut self) {
        self.stream = None;
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Sends the request and waits for its response, connecting first if needed.
    /// The Host header is filled in when the request has none.
    /// Interim "100 Continue" responses are skipped.
    pub fn make_request(&mut self, mut request: Request) -> Result<Response, ClientError> {
        if request.host.is_none() {
            request.host = Some(self.host.clone());
        }

        let result = self.exchange(&request);
        match &result {
            Ok(response) if response.connection == Some(Connection::Close) => self.disconnect(),
            Ok(_) => {}
            Err(_) => self.disconnect()
        }
        result
    }

    fn exchange(&mut self, request: &Request) -> Result<Response, ClientError> {
        if !self.is_connected() {
            self.connect()?;
        }
        let stream = match self.stream.as_mut() {
            Some(stream) => stream,
            None => return Err(std::io::Error::from(std::io::ErrorKind::NotConnected).into())
        };

        encode_request(request, stream.get_mut())?;

        loop {
            let response = if request.method == Method::HEAD {
                decode_response_to_head(stream, &self.limits)?
            } else {
                decode_response(stream, &self.limits)?
            };
            if !response.status.is_informational() {
                return Ok(response);
            }
        }
    }

    pub fn get(&mut self, url: impl Into<Url>) -> Result<Response, ClientError> {
        self.make_request(Request::new(Method::GET, url))
    }

    pub fn head(&mut self, url: impl Into<Url>) -> Result<Response, ClientError> {
        self.make_request(Request::new(Method::HEAD, url))
    }

    /// Posts the body with a matching Content-Length.
    pub fn post(&mut self, url: impl Into<Url>, body: impl Into<Vec<u8>>) -> Result<Response, ClientError> {
        self.make_request(Request::new(Method::POST, url).with_body(body))
    }

    /// Puts the body with a matching Content-Length.
    pub fn put(&mut self, url: impl Into<Url>, body: impl Into<Vec<u8>>) -> Result<Response, ClientError> {
        self.make_request(Request::new(Method::PUT, url).with_body(body))
    }

    pub fn delete(&mut self, url: impl Into<Url>) -> Result<Response, ClientError> {
        self.make_request(Request::new(Method::DELETE, url))
    }

    pub fn options(&mut self, url: impl Into<Url>) -> Result<Response, ClientError> {
        self.make_request(Request::new(Method::OPTIONS, url))
    }
}
