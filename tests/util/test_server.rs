use std::sync::Arc;
use std::thread::{sleep, spawn};
use std::time::Duration;

use my_http::client::Client;
use my_http::common::request::Request;
use my_http::common::response::Response;
use my_http::parse::Limits;
use my_http::server;
use my_http::server::{Config, MethodSet, Router};

/// Starts a server that answers each of the given requests with its paired response, then makes
/// the requests in order on num_connections concurrent connections and checks every response.
pub fn test_server(port: u16, num_connections: usize, messages: Vec<(Request, Response)>) {
    start_server(port, get_router(&messages), Limits::default());

    let messages = Arc::new(messages);

    let mut handlers = vec![];
    for _ in 0..num_connections {
        let messages = Arc::clone(&messages);
        handlers.push(spawn(move || {
            let mut client = Client::new("127.0.0.1", port);
            for (request, expected) in messages.iter() {
                let response = client.make_request(request.clone()).unwrap();
                assert_eq!(response.status, expected.status);
                assert_eq!(response.headers, expected.headers);
                assert_eq!(response.content_length, expected.content_length);
                assert_eq!(response.body(), expected.body());
            }
        }));
    }

    for handler in handlers {
        handler.join().unwrap();
    }
}

/// Runs a server with the given router on a background thread and waits for it to start listening.
pub fn start_server(port: u16, router: Router, limits: Limits) {
    spawn(move || {
        server::listen_http(Config {
            addr: format!("127.0.0.1:{}", port),
            connection_handler_threads: 5,
            router,
            limits,
        }).unwrap()
    });
    sleep(Duration::from_millis(100));
}

/// A router answering each request with its paired response. A request that reaches a route
/// without matching the expected request fails its handler.
fn get_router(messages: &[(Request, Response)]) -> Router {
    let mut router = Router::new();

    for (request, response) in messages {
        let expected = request.clone();
        let response = response.clone();
        router.route(MethodSet::from(request.method), &request.url.path, move |request, _| {
            if request.headers == expected.headers && request.body() == expected.body() {
                Ok(response.clone())
            } else {
                Err(format!("unexpected request to {}", request.url.path).into())
            }
        });
    }

    router
}
