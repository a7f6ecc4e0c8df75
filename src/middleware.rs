use crate::handler::Handler;
use std::sync::Arc;

mod auth;
mod logging;

pub use auth::{BasicAuthMiddleware, IS_ADMIN};
pub use logging::LoggingMiddleware;

/// A cross-cutting behavior expressed as a `Handler -> Handler`
/// transformation.
///
/// Middleware is composed by explicit chaining at startup: wrapping returns a
/// new handler with the same contract, which may do work before or after
/// delegating to the wrapped one, or skip it entirely (short-circuit). The
/// same shape serves both attachment points — a single route handler or a
/// whole router.
pub trait Middleware: Send + Sync + 'static {
    fn wrap(&self, inner: Arc<dyn Handler>) -> Arc<dyn Handler>;
}

/// Blanket impl for closures or functions that transform handlers.
impl<F> Middleware for F
where
    F: Fn(Arc<dyn Handler>) -> Arc<dyn Handler> + Send + Sync + 'static,
{
    fn wrap(&self, inner: Arc<dyn Handler>) -> Arc<dyn Handler> {
        (self)(inner)
    }
}
