use crate::handler::{Context, Handler, Request, Response};
use crate::middleware::Middleware;
use futures_util::future::BoxFuture;
use hyper::StatusCode;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps request paths to handlers and carries the global middleware chain.
///
/// `Router` is a startup-time builder: routes and middleware are registered
/// once, then [`Router::into_handler`] freezes everything into an immutable
/// `Arc<dyn Handler>` that is safe to share across concurrently-handled
/// requests.
#[derive(Default)]
pub struct Router {
    routes: HashMap<String, Arc<dyn Handler>>,
    prefixes: Vec<(String, Arc<dyn Handler>)>,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for an exact path. Exact matches always win over
    /// prefix matches.
    pub fn route(&mut self, path: impl Into<String>, handler: Arc<dyn Handler>) -> &mut Self {
        self.routes.insert(path.into(), handler);
        self
    }

    /// Registers a handler for a path prefix. On dispatch the longest
    /// matching prefix wins; mounting `/` makes the handler a universal
    /// catch-all.
    pub fn mount(&mut self, prefix: impl Into<String>, handler: Arc<dyn Handler>) -> &mut Self {
        self.prefixes.push((prefix.into(), handler));
        self
    }

    /// Attaches a global middleware. The first one registered becomes the
    /// outermost wrapper: it runs first on the way in and last on the way
    /// out, around the route matching itself, so it sees every request —
    /// catch-all hits included.
    pub fn use_with<M: Middleware>(&mut self, middleware: M) -> &mut Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Freezes the route table and folds the global middleware chain around
    /// it, innermost-last.
    pub fn into_handler(self) -> Arc<dyn Handler> {
        let Router {
            routes,
            prefixes,
            middleware,
        } = self;

        let mut handler: Arc<dyn Handler> = Arc::new(RouteTable { routes, prefixes });
        for mw in middleware.iter().rev() {
            handler = mw.wrap(handler);
        }
        handler
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes.keys())
            .field(
                "prefixes",
                &self.prefixes.iter().map(|(p, _)| p).collect::<Vec<_>>(),
            )
            .field("middleware", &self.middleware.len())
            .finish()
    }
}

/// The frozen dispatch step: exact match first, then longest registered
/// prefix. With `/` mounted every request resolves to something; a bare
/// miss is answered 404 directly so dispatch can never fail.
struct RouteTable {
    routes: HashMap<String, Arc<dyn Handler>>,
    prefixes: Vec<(String, Arc<dyn Handler>)>,
}

impl RouteTable {
    fn resolve(&self, path: &str) -> Option<&Arc<dyn Handler>> {
        if let Some(handler) = self.routes.get(path) {
            return Some(handler);
        }

        self.prefixes
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, handler)| handler)
    }
}

impl Handler for RouteTable {
    fn handle<'a>(
        &'a self,
        req: &'a Request,
        ctx: &'a mut Context,
        res: &'a mut Response,
    ) -> BoxFuture<'a, ()> {
        match self.resolve(req.path()) {
            Some(handler) => handler.handle(req, ctx, res),
            None => Box::pin(async move {
                res.status(StatusCode::NOT_FOUND).send("Not Found");
            }),
        }
    }
}
