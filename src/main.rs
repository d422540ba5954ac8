use std::io::Error;
use std::time::Instant;

use clap::Parser;
use log::{debug, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use my_http::args::Args;
use my_http::common::authorization::Authorization;
use my_http::common::response::Response;
use my_http::common::status;
use my_http::parse::Limits;
use my_http::server;
use my_http::server::{Config, Controller, middleware, Middleware, Router};

fn main() -> Result<(), Error> {
    let args = Args::parse();

    TermLogger::init(
        args.log_level,
        ConfigBuilder::new().set_target_level(log::LevelFilter::Error).build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ).map_err(|err| Error::new(std::io::ErrorKind::Other, err))?;

    let mut router = Router::with_middleware(vec![timing()]);

    router.get("/", |_, _| Ok(Response::html("<h1>Hello!</h1>")));

    router.get("/greet", |request, _| {
        let name = request.url.query.get("name").unwrap_or("stranger");
        Ok(Response::string(format!("Hello, {}!", name)))
    });

    router.post("/echo", |request, _| {
        Ok(Response::bytes(request.body().as_bytes().unwrap_or_default().to_vec()))
    });

    router.add_controller(&NotesController);

    let addr = format!("{}:{}", args.host, args.port);
    info!("running on {}", addr);

    server::listen_http(Config {
        addr,
        connection_handler_threads: args.threads as usize,
        router,
        limits: Limits::default(),
    })
}

/// Logs how long each request took to handle.
fn timing() -> Middleware {
    middleware(|request, params, next| {
        let start = Instant::now();
        let result = next(request, params);
        debug!("{} {} handled in {:?}", request.method, request.url, start.elapsed());
        result
    })
}

/// Rejects requests without a bearer token.
fn require_token() -> Middleware {
    middleware(|request, params, next| {
        match &request.authorization {
            Some(Authorization::Bearer(_)) => next(request, params),
            _ => Ok(Response::new(status::UNAUTHORIZED))
        }
    })
}

/// Read only notes, served under "/notes".
struct NotesController;

const NOTES: [&str; 3] = ["buy milk", "call home", "water the plants"];

impl Controller for NotesController {
    fn base_path(&self) -> &str {
        "/notes"
    }

    fn middleware(&self) -> Vec<Middleware> {
        vec![require_token()]
    }

    fn setup(&self, router: &mut Router) {
        router.get("/", |_, _| Ok(Response::string(NOTES.join("\n"))));

        router.get("/:index", |_, params| {
            let note = params.get("index")
                .and_then(|index| index.parse::<usize>().ok())
                .and_then(|index| NOTES.get(index));

            Ok(match note {
                Some(note) => Response::string(*note),
                None => Response::new(status::NOT_FOUND)
            })
        });
    }
}
