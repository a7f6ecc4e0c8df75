use crate::handler::{Context, Handler, Request, Response};
use crate::middleware::Middleware;
use futures_util::future::BoxFuture;
use log::info;
use std::sync::Arc;

/// Middleware that logs each incoming HTTP request.
///
/// Logs the method, path and remote address, then always delegates. Attached
/// to the whole router so it observes every request, including ones that end
/// at the catch-all handler or short-circuit in a later middleware.
///
/// Example log output:
/// ```text
/// GET /hello (127.0.0.1:52114)
/// ```
#[derive(Debug, Clone)]
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn wrap(&self, inner: Arc<dyn Handler>) -> Arc<dyn Handler> {
        Arc::new(LogRequest { inner })
    }
}

struct LogRequest {
    inner: Arc<dyn Handler>,
}

impl Handler for LogRequest {
    fn handle<'a>(
        &'a self,
        req: &'a Request,
        ctx: &'a mut Context,
        res: &'a mut Response,
    ) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            info!("{} {} ({})", req.method(), req.path(), req.remote_addr());
            self.inner.handle(req, ctx, res).await;
        })
    }
}
