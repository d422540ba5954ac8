use std::ops::BitOr;
use std::sync::Arc;

use thiserror::Error;

use crate::common::method::Method;
use crate::common::request::Request;
use crate::common::response::Response;
use crate::server::path::{Params, PathTemplate};

/// Error returned by a handler. The server answers it with a 500 response.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// The result of a handler.
pub type HandlerResult = Result<Response, HandlerError>;

/// A function that responds to a routed request.
pub type Handler = Arc<dyn Fn(&Request, &Params) -> HandlerResult + Send + Sync>;

/// Wraps a handler with another handler, which decides whether and how to call the wrapped one.
pub type Middleware = Arc<dyn Fn(Handler) -> Handler + Send + Sync>;

/// Error for when the router can't produce a response.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No route matches the method and path of the request.
    #[error("no route found")]
    NotFound,
    #[error("handler failed: {0}")]
    Handler(HandlerError),
}

/// A set of methods a route responds to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MethodSet(u8);

impl MethodSet {
    pub const NONE: MethodSet = MethodSet(0);
    pub const GET: MethodSet = MethodSet(1);
    pub const HEAD: MethodSet = MethodSet(1 << 1);
    pub const POST: MethodSet = MethodSet(1 << 2);
    pub const PUT: MethodSet = MethodSet(1 << 3);
    pub const DELETE: MethodSet = MethodSet(1 << 4);
    pub const OPTIONS: MethodSet = MethodSet(1 << 5);
    pub const ALL: MethodSet = MethodSet(0b11_1111);

    pub fn contains(&self, method: Method) -> bool {
        let bit = MethodSet::from(method).0;
        self.0 & bit == bit
    }
}

impl From<Method> for MethodSet {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => MethodSet::GET,
            Method::HEAD => MethodSet::HEAD,
            Method::POST => MethodSet::POST,
            Method::PUT => MethodSet::PUT,
            Method::DELETE => MethodSet::DELETE,
            Method::OPTIONS => MethodSet::OPTIONS,
        }
    }
}

impl BitOr for MethodSet {
    type Output = MethodSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        MethodSet(self.0 | rhs.0)
    }
}

/// Creates middleware from a function that gets the request, the route parameters and the next handler.
/// ```
/// use my_http::server::{middleware, Router};
/// use my_http::common::response::Response;
/// use my_http::common::status;
///
/// let auth = middleware(|request, params, next| {
///     match request.authorization {
///         Some(_) => next(request, params),
///         None => Ok(Response::new(status::UNAUTHORIZED)),
///     }
/// });
///
/// let mut router = Router::new();
/// router.get_through("/secret", vec![auth], |_, _| Ok(Response::string("hi")));
/// ```
pub fn middleware<F>(f: F) -> Middleware
    where F: Fn(&Request, &Params, &Handler) -> HandlerResult + Send + Sync + 'static
{
    let f = Arc::new(f);
    Arc::new(move |next: Handler| {
        let f = Arc::clone(&f);
        let handler: Handler = Arc::new(move |request: &Request, params: &Params| f(request, params, &next));
        handler
    })
}

/// Wraps the handler with the middleware. The first middleware is the outermost.
fn apply_middleware(middleware: &[Middleware], handler: Handler) -> Handler {
    middleware.iter().rev().fold(handler, |handler, middleware| middleware(handler))
}

/// A group of routes registered together under a base path.
pub trait Controller {
    /// The path the routes of this controller are mounted at.
    fn base_path(&self) -> &str;

    /// Middleware wrapping every route of this controller.
    fn middleware(&self) -> Vec<Middleware> {
        vec![]
    }

    /// Registers the routes of this controller. Paths are relative to the base path.
    fn setup(&self, router: &mut Router);
}

struct Route {
    methods: MethodSet,
    template: PathTemplate,
    handler: Handler,
}

/// Routes requests to handlers by method and path.
/// Routes are tried in the order they were added. The first route whose path and methods match handles the request.
pub struct Router {
    routes: Vec<Route>,
    middleware: Vec<Middleware>,
}

impl Router {
    /// Creates a new empty router.
    pub fn new() -> Router {
        Router { routes: vec![], middleware: vec![] }
    }

    /// Creates an empty router whose routes are all wrapped by the given middleware.
    pub fn with_middleware(middleware: Vec<Middleware>) -> Router {
        Router { routes: vec![], middleware }
    }

    /// Adds middleware that wraps every route of this router, including routes added earlier.
    pub fn add_middleware(&mut self, middleware: Middleware) {
        self.middleware.push(middleware)
    }

    /// Calls the handler for requests with one of the given methods and a path matching the template.
    pub fn route(&mut self, methods: MethodSet, path: &str, handler: impl Fn(&Request, &Params) -> HandlerResult + Send + Sync + 'static) {
        self.route_through(methods, path, vec![], handler)
    }

    /// Like route, but the handler is wrapped by the given middleware.
    pub fn route_through(&mut self, methods: MethodSet, path: &str, middleware: Vec<Middleware>,
                         handler: impl Fn(&Request, &Params) -> HandlerResult + Send + Sync + 'static) {
        let handler = apply_middleware(&middleware, Arc::new(handler));
        self.routes.push(Route { methods, template: PathTemplate::parse(path), handler });
    }

    pub fn get(&mut self, path: &str, handler: impl Fn(&Request, &Params) -> HandlerResult + Send + Sync + 'static) {
        self.route(MethodSet::GET, path, handler)
    }

    pub fn get_through(&mut self, path: &str, middleware: Vec<Middleware>, handler: impl Fn(&Request, &Params) -> HandlerResult + Send + Sync + 'static) {
        self.route_through(MethodSet::GET, path, middleware, handler)
    }

    pub fn head(&mut self, path: &str, handler: impl Fn(&Request, &Params) -> HandlerResult + Send + Sync + 'static) {
        self.route(MethodSet::HEAD, path, handler)
    }

    pub fn post(&mut self, path: &str, handler: impl Fn(&Request, &Params) -> HandlerResult + Send + Sync + 'static) {
        self.route(MethodSet::POST, path, handler)
    }

    pub fn put(&mut self, path: &str, handler: impl Fn(&Request, &Params) -> HandlerResult + Send + Sync + 'static) {
        self.route(MethodSet::PUT, path, handler)
    }

    pub fn delete(&mut self, path: &str, handler: impl Fn(&Request, &Params) -> HandlerResult + Send + Sync + 'static) {
        self.route(MethodSet::DELETE, path, handler)
    }

    pub fn options(&mut self, path: &str, handler: impl Fn(&Request, &Params) -> HandlerResult + Send + Sync + 'static) {
        self.route(MethodSet::OPTIONS, path, handler)
    }

    /// Adds all routes of the given router under the base path. The middleware of the given router
    /// wraps its routes, outside of any middleware the routes were added with.
    /// ```
    /// use my_http::server::Router;
    /// use my_http::common::response::Response;
    ///
    /// let mut users = Router::new();
    /// users.get("/:id", |_, params| Ok(Response::string(format!("user {}", params.get("id").unwrap_or_default()))));
    ///
    /// let mut router = Router::new();
    /// router.mount("/users", users); // responds to "/users/42"
    /// ```
    pub fn mount(&mut self, base_path: &str, router: Router) {
        let base = PathTemplate::parse(base_path);
        for route in router.routes {
            self.routes.push(Route {
                methods: route.methods,
                template: base.join(&route.template),
                handler: apply_middleware(&router.middleware, route.handler),
            });
        }
    }

    /// Mounts the routes of the controller at its base path.
    pub fn add_controller(&mut self, controller: &impl Controller) {
        let mut router = Router::with_middleware(controller.middleware());
        controller.setup(&mut router);
        self.mount(controller.base_path(), router);
    }

    /// Gets the response to the given request from the first matching route.
    /// HEAD requests fall back to GET routes when no HEAD route matches.
    pub fn handle(&self, request: &Request) -> Result<Response, RouterError> {
        let (route, params) = self.find(request.method, &request.url.path)
            .or_else(|| match request.method {
                Method::HEAD => self.find(Method::GET, &request.url.path),
                _ => None
            })
            .ok_or(RouterError::NotFound)?;

        let handler = apply_middleware(&self.middleware, Arc::clone(&route.handler));
        handler(request, &params).map_err(RouterError::Handler)
    }

    fn find(&self, method: Method, path: &str) -> Option<(&Route, Params)> {
        self.routes.iter()
            .filter(|route| route.methods.contains(method))
            .find_map(|route| route.template.matches(path).map(|params| (route, params)))
    }
}

impl Default for Router {
    fn default() -> Self {
        Router::new()
    }
}
