//! Radix-tree request router.
//!
//! One tree per HTTP method plus one tree for method-agnostic routes.
//! O(path-length) lookup. You register a path, you get a handler.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Registrations return `self` so they chain.
///
/// Lookup tries the tree for the request's method first, then the
/// method-agnostic tree. Routes registered with [`Router::any`] therefore see
/// every method, including non-standard ones, and can answer `405` themselves.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    any: MatchitRouter<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), any: MatchitRouter::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax, catch-alls `{*name}`:
    ///
    /// ```rust
    /// # use contacts::{Method, Request, Response, Router};
    /// # async fn asset(_: Request) -> Response { Response::text("") }
    /// Router::new().on(Method::Get, "/static/{*path}", asset);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is malformed or conflicts with a route already
    /// registered for `method`. Routes are fixed at start-up, so this
    /// surfaces immediately.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        let tree = self.routes.entry(method).or_default();
        insert(tree, path, handler);
        self
    }

    /// Register a handler that matches `path` for every method.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Router::on`].
    pub fn any(mut self, path: &str, handler: impl Handler) -> Self {
        insert(&mut self.any, path, handler);
        self
    }

    /// Routes one request and runs its handler. Unmatched requests get a
    /// `404` JSON error.
    pub async fn dispatch(&self, mut req: Request) -> Response {
        match self.lookup(req.method(), req.path()) {
            Some((handler, params)) => {
                req.set_params(params);
                handler.call(req).await
            }
            None => Response::error(Status::NotFound),
        }
    }

    fn lookup(
        &self,
        method: &str,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let by_method = method
            .parse::<Method>()
            .ok()
            .and_then(|m| self.routes.get(&m))
            .and_then(|tree| tree.at(path).ok());
        let matched = by_method.or_else(|| self.any.at(path).ok())?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

fn insert(tree: &mut MatchitRouter<BoxedHandler>, path: &str, handler: impl Handler) {
    tree
        .insert(path, handler.into_boxed_handler())
        .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
