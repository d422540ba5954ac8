extern crate my_http;

use std::io::{BufReader, Read, Write};
use std::net::{Shutdown, TcpStream};

use my_http::client::Client;
use my_http::common::authorization::Authorization;
use my_http::common::body::Body;
use my_http::common::header::{ACCEPT_RANGES, HeaderName, Headers};
use my_http::common::method::Method;
use my_http::common::request::Request;
use my_http::common::response::Response;
use my_http::common::status;
use my_http::common::status::Status;
use my_http::header_map;
use my_http::parse::{decode_response, Limits};
use my_http::server::{Controller, middleware, Middleware, Router};

use crate::util::test_server::{start_server, test_server};

mod util;

const BAD_REQUEST: &str = "HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

fn large_body(size: usize) -> Vec<u8> {
    (0..size).map(|i| b'a' + (i % 26) as u8).collect()
}

fn many_headers(prefix: &str, count: usize) -> Headers {
    Headers::from_pairs((0..count)
        .map(|i| (HeaderName::from(format!("{}-{}", prefix, i)), format!("value number {} of a custom header", i)))
        .collect())
}

/// Reads everything the server sends until it closes the connection.
fn read_until_closed(stream: &mut TcpStream) -> String {
    let mut output = String::new();
    stream.read_to_string(&mut output).unwrap();
    output
}

#[test]
fn many_requests_with_short_headers_and_short_bodies() {
    let mut custom_response = Response::new(Status::custom(234, "hi"));
    custom_response.headers = header_map![("custom-header-2", "custom header value 2")];
    custom_response.set_body("welcome");

    let mut custom_request = Request::new(Method::POST, "/foo").with_body("hello");
    custom_request.headers = header_map![("custom-header", "custom header value")];

    test_server(7000, 13, vec![
        (Request::new(Method::GET, "/"), Response::new(status::OK)),
        (custom_request, custom_response),
    ])
}

#[test]
fn many_connections_and_many_large_messages() {
    let mut request = Request::new(Method::PUT, "/hello/world/html").with_body(large_body(500_000));
    request.headers = many_headers("custom-header", 30);

    let mut response = Response::bytes(large_body(200_000));
    response.headers = many_headers("hello", 12);
    response.headers.insert(ACCEPT_RANGES, "bytes".to_string());

    test_server(7001, 15, vec![(request, response)])
}

#[test]
fn many_connections_with_one_simple_request() {
    test_server(7002, 200, vec![
        (Request::new(Method::GET, "/"), Response::string("hi"))
    ])
}

#[test]
fn many_connections_with_many_simple_requests() {
    test_server(7003, 10, (0..20)
        .map(|i| (Request::new(Method::GET, format!("/{}", i).as_str()), Response::string(format!("response {}", i))))
        .collect())
}

#[test]
fn client_request() {
    let mut router = Router::new();
    router.get("/", |_, _| Ok(Response::string("i work")));
    start_server(7004, router, Limits::default());

    let response = Client::new("127.0.0.1", 7004).get("/").unwrap();

    assert_eq!(response.status, status::OK);
    assert_eq!(response.body_string(), Some("i work".to_string()));
}

#[test]
fn raw_request() {
    let mut router = Router::new();
    router.get("/", |_, _| Ok(Response::string("i work")));
    start_server(7005, router, Limits::default());

    let mut stream = TcpStream::connect("127.0.0.1:7005").unwrap();
    stream.write_all(b"GET / HTTP/1.1\r\nConnection: close\r\n\r\n").unwrap();

    assert_eq!(read_until_closed(&mut stream),
               "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 6\r\nConnection: close\r\n\r\ni work");
}

#[test]
fn pipelined_requests() {
    let mut router = Router::new();
    router.get("/:name", |_, params| Ok(Response::string(params.get("name").unwrap_or_default())));
    start_server(7006, router, Limits::default());

    let mut stream = TcpStream::connect("127.0.0.1:7006").unwrap();
    stream.write_all(b"GET /a HTTP/1.1\r\n\r\nGET /b HTTP/1.1\r\n\r\nGET /c HTTP/1.1\r\nConnection: close\r\n\r\n").unwrap();

    let mut reader = BufReader::new(stream);
    let bodies: Vec<String> = (0..3)
        .map(|_| decode_response(&mut reader, &Limits::default()).unwrap().body_string().unwrap())
        .collect();

    assert_eq!(bodies, vec!["a", "b", "c"]);
}

#[test]
fn malformed_request() {
    start_server(7007, Router::new(), Limits::default());

    let mut stream = TcpStream::connect("127.0.0.1:7007").unwrap();
    stream.write_all(b"blah\r\n\r\n").unwrap();

    assert_eq!(read_until_closed(&mut stream), BAD_REQUEST);
}

#[test]
fn request_line_over_limit() {
    start_server(7008, Router::new(), Limits { max_line_length: 16, ..Limits::default() });

    let mut stream = TcpStream::connect("127.0.0.1:7008").unwrap();
    stream.write_all(b"GET /a/very/long/path/over/the/limit HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(read_until_closed(&mut stream),
               "HTTP/1.1 431 Request Header Fields Too Large\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
}

#[test]
fn body_over_limit() {
    let mut router = Router::new();
    router.post("/", |_, _| Ok(Response::new(status::OK)));
    start_server(7009, router, Limits { max_body_size: 4, ..Limits::default() });

    let mut client = Client::new("127.0.0.1", 7009);
    let response = client.post("/", "too long").unwrap();

    assert_eq!(response.status, status::PAYLOAD_TOO_LARGE);
    assert!(!client.is_connected());
}

#[test]
fn expect_continue() {
    let mut router = Router::new();
    router.post("/upload", |request, _| Ok(Response::string(format!("got {}", request.body_string().unwrap_or_default()))));
    start_server(7010, router, Limits::default());

    let mut stream = TcpStream::connect("127.0.0.1:7010").unwrap();
    stream.write_all(b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\nExpect: 100-continue\r\n\r\n").unwrap();

    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let interim = decode_response(&mut reader, &Limits::default()).unwrap();
    assert_eq!(interim.status, status::CONTINUE);

    stream.write_all(b"data").unwrap();
    let response = decode_response(&mut reader, &Limits::default()).unwrap();
    assert_eq!(response.status, status::OK);
    assert_eq!(response.body_string(), Some("got data".to_string()));
}

#[test]
fn chunked_request() {
    let mut router = Router::new();
    router.post("/", |request, _| Ok(Response::bytes(request.body().as_bytes().unwrap_or_default().to_vec())));
    start_server(7011, router, Limits::default());

    let mut stream = TcpStream::connect("127.0.0.1:7011").unwrap();
    stream.write_all(b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n5\r\nhello\r\n6\r\n world\r\n0\r\n\r\n").unwrap();

    let response = decode_response(&mut BufReader::new(stream), &Limits::default()).unwrap();
    assert_eq!(response.body(), &Body::Bytes(b"hello world".to_vec()));
}

#[test]
fn not_found_and_handler_error() {
    let mut router = Router::new();
    router.get("/fail", |_, _| Err("something broke".into()));
    start_server(7012, router, Limits::default());

    let mut client = Client::new("127.0.0.1", 7012);
    assert_eq!(client.get("/missing").unwrap().status, status::NOT_FOUND);
    assert_eq!(client.get("/fail").unwrap().status, status::INTERNAL_SERVER_ERROR);
    assert_eq!(client.delete("/fail").unwrap().status, status::NOT_FOUND);
    assert!(client.is_connected());
}

#[test]
fn head_request() {
    let mut router = Router::new();
    router.get("/", |_, _| Ok(Response::string("content")));
    start_server(7013, router, Limits::default());

    let mut client = Client::new("127.0.0.1", 7013);
    let response = client.head("/").unwrap();
    assert_eq!(response.status, status::OK);
    assert_eq!(response.content_length, Some(7));
    assert!(response.body().is_none());

    let response = client.get("/").unwrap();
    assert_eq!(response.body_string(), Some("content".to_string()));
}

struct SecretController;

impl Controller for SecretController {
    fn base_path(&self) -> &str {
        "/secret"
    }

    fn middleware(&self) -> Vec<Middleware> {
        vec![middleware(|request, params, next| match request.authorization {
            Some(Authorization::Bearer(ref token)) if token == "letmein" => next(request, params),
            _ => Ok(Response::new(status::UNAUTHORIZED))
        })]
    }

    fn setup(&self, router: &mut Router) {
        router.get("/:word", |_, params| Ok(Response::string(format!("the word is {}", params.get("word").unwrap_or_default()))));
    }
}

#[test]
fn controller_with_middleware() {
    let mut router = Router::new();
    router.add_controller(&SecretController);
    start_server(7014, router, Limits::default());

    let mut client = Client::new("127.0.0.1", 7014);
    assert_eq!(client.get("/secret/swordfish").unwrap().status, status::UNAUTHORIZED);

    let mut request = Request::new(Method::GET, "/secret/swordfish");
    request.authorization = Some(Authorization::Bearer("letmein".to_string()));
    let response = client.make_request(request).unwrap();
    assert_eq!(response.body_string(), Some("the word is swordfish".to_string()));
}

#[test]
fn client_closed_connection() {
    let mut router = Router::new();
    router.get("/", |_, _| Ok(Response::string("still here")));
    start_server(7015, router, Limits::default());

    for _ in 0..10 {
        let stream = TcpStream::connect("127.0.0.1:7015").unwrap();
        stream.shutdown(Shutdown::Both).unwrap();
    }

    let mut stream = TcpStream::connect("127.0.0.1:7015").unwrap();
    stream.write_all(b"GET / HTTP/1.1\r\n").unwrap();
    drop(stream);

    let response = Client::new("127.0.0.1", 7015).get("/").unwrap();
    assert_eq!(response.body_string(), Some("still here".to_string()));
}
