//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. A path that matches under
//! some other method answers `405`; a path that matches nothing answers `404`.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;
use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Registration methods return `self` so they chain.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

/// Outcome of matching a method + path against the route table.
pub(crate) enum Lookup {
    Found(BoxedHandler, HashMap<String, String>),
    MethodNotAllowed,
    NotFound,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax and are read with `req.param("name")`.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`. Routes are fixed at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Put, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Delete, path, handler)
    }

    pub(crate) fn lookup(&self, method: Option<Method>, path: &str) -> Lookup {
        if let Some(tree) = method.and_then(|m| self.routes.get(&m)) {
            if let Ok(matched) = tree.at(path) {
                let handler = Arc::clone(matched.value);
                let params = matched.params.iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect();
                return Lookup::Found(handler, params);
            }
        }

        if self.routes.values().any(|tree| tree.at(path).is_ok()) {
            Lookup::MethodNotAllowed
        } else {
            Lookup::NotFound
        }
    }

    /// Routes one request and produces one response.
    pub(crate) async fn handle(&self, req: Request) -> Response {
        let method = Method::from_http(req.method());
        let response = match self.lookup(method, req.path()) {
            Lookup::Found(handler, params) => handler.call(req.with_params(params)).await,
            Lookup::MethodNotAllowed => Response::status(Status::MethodNotAllowed),
            Lookup::NotFound => Response::status(Status::NotFound),
        };
        debug!(status = response.status_code().as_u16(), "request handled");
        response
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
