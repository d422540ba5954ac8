use std::io::{ErrorKind, Read, Write};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use log::{debug, error, info, warn};
use mio::net::TcpStream;

use crate::common::connection::Connection as ConnectionHeader;
use crate::common::method::Method;
use crate::common::request::Request;
use crate::common::response::Response;
use crate::common::status;
use crate::common::status::Status;
use crate::encode::{encode_response, EncodeError};
use crate::parse::error::DecodeError;
use crate::server::config::Config;
use crate::server::connection::{Connection, ReadRequestError};
use crate::server::connection::ReadRequestResult::{Closed, Error, NotReady, Ready};
use crate::server::poll::listen;
use crate::server::router::{Router, RouterError};
use crate::util::thread_pool::ThreadPool;

/// A connection shared between the poll loop and the worker threads. None once it has been closed.
type SharedConnection = Arc<Mutex<Option<Connection<TcpStream>>>>;

/// Starts an HTTP server. This function blocks.
pub fn listen_http(config: Config) -> std::io::Result<()> {
    let addr: SocketAddr = config.addr.parse()
        .map_err(|err| std::io::Error::new(ErrorKind::InvalidInput, format!("invalid socket address {}: {}", config.addr, err)))?;
    let thread_pool = ThreadPool::new(config.connection_handler_threads);

    info!("listening on {} with {} connection handler threads", addr, config.connection_handler_threads);

    let config = Arc::new(config);

    listen(addr,
           |socket, addr| {
               debug!("accepted connection from {}", addr);
               Arc::new(Mutex::new(Some(Connection::new(addr, socket, config.limits))))
           },
           |key, connection: &SharedConnection, closer| {
               let connection = Arc::clone(connection);
               let config = Arc::clone(&config);
               let closer = closer.clone();
               thread_pool.execute(move || {
                   if handle_io_ready_connection(&config, &connection) {
                       closer.close(key);
                   }
               });
           })
}

/// Tries reading requests and responding for the given connection.
/// Returns true if this call closed the connection.
fn handle_io_ready_connection(config: &Config, connection: &SharedConnection) -> bool {
    let mut lock = match connection.lock() {
        Ok(lock) => lock,
        // a handler panicked while holding the connection, drop it
        Err(poisoned) => return poisoned.into_inner().take().is_some()
    };

    let mut connection = match lock.take() {
        Some(connection) => connection,
        None => return false
    };

    // first try to flush any existing unflushed data
    if let Err(err) = connection.flush() {
        debug!("dropping connection to {} after failed write: {}", connection.addr, err);
        return true;
    }

    if !connection.is_closing() && respond_to_requests(&mut connection, &config.router) {
        connection.close_after_output();
    }

    if connection.is_closing() && !connection.has_pending_output() {
        debug!("closed connection to {}", connection.addr);
        return true;
    }

    lock.replace(connection);
    false
}

/// Responds to requests in the given connection using the given router. Returns true if the connection should be closed.
pub(crate) fn respond_to_requests<S: Read + Write>(connection: &mut Connection<S>, router: &Router) -> bool {
    loop {
        match connection.read_request() {
            Ready(request) => {
                let response = route_request(router, &request);
                match encode_response(&response, connection) {
                    Ok(()) => {}
                    Err(EncodeError::InvalidHeaderValue(name)) => {
                        error!("response to {} {} has an invalid {} header", request.method, request.url.path, name);
                        write_error_response(connection, status::INTERNAL_SERVER_ERROR);
                        return true;
                    }
                    Err(EncodeError::Io(err)) => {
                        debug!("could not write response to {}: {}", connection.addr, err);
                        return true;
                    }
                }
                if !request.should_keep_alive() {
                    return true;
                }
            }
            NotReady => return false,
            Closed => return true,
            Error(ReadRequestError::ParseErr(err)) => {
                warn!("could not decode request from {}: {}", connection.addr, err);
                write_error_response(connection, error_status(&err));
                return true;
            }
            Error(ReadRequestError::IoErr(err)) => {
                debug!("connection to {} failed: {}", connection.addr, err);
                return true;
            }
        }
    }
}

/// Gets the response to the request from the router. Routing misses become 404 and handler errors 500.
fn route_request(router: &Router, request: &Request) -> Response {
    let mut response = match router.handle(request) {
        Ok(response) => response,
        Err(RouterError::NotFound) => {
            warn!("not found: {}", request.url.path);
            Response::new(status::NOT_FOUND)
        }
        Err(RouterError::Handler(err)) => {
            error!("handler for {} {} failed: {}", request.method, request.url.path, err);
            Response::new(status::INTERNAL_SERVER_ERROR)
        }
    };

    if request.method == Method::HEAD || !response.status_allows_body() {
        response.take_body();
    }
    if !request.should_keep_alive() {
        response.connection = Some(ConnectionHeader::Close);
    }

    debug!("{} {} -> {}", request.method, request.url.path, response.status.code);
    response
}

/// The status of the response to a request that could not be decoded.
fn error_status(err: &DecodeError) -> Status {
    match err {
        DecodeError::LineTooLong | DecodeError::TooManyHeaders | DecodeError::HeadersTooLarge => status::REQUEST_HEADER_FIELDS_TOO_LARGE,
        DecodeError::TooManyChunks | DecodeError::BodyTooLarge => status::PAYLOAD_TOO_LARGE,
        _ => status::BAD_REQUEST
    }
}

/// Writes an empty response with the given status that closes the connection.
fn write_error_response(writer: &mut impl Write, status: Status) {
    let mut response = Response::new(status);
    response.connection = Some(ConnectionHeader::Close);
    if let Err(err) = encode_response(&response, writer) {
        debug!("could not write error response: {}", err);
    }
}
