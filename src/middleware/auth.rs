use crate::handler::{Context, Handler, Request, Response};
use crate::middleware::Middleware;
use futures_util::future::BoxFuture;
use hyper::StatusCode;
use log::{info, warn};
use std::sync::Arc;

/// Context key under which the authentication gate records its decision.
pub const IS_ADMIN: &str = "is_admin";

/// Per-route authentication gate over HTTP Basic Auth.
///
/// Requests without a well-formed credential pair are rejected with 403 and
/// the wrapped handler never runs. Requests carrying any credential pair are
/// let through with `IS_ADMIN = true` stored in the request context.
///
/// The admin decision is a stand-in for a credential-store lookup: presence
/// of credentials alone grants admin, the values are never validated. Keep it
/// that way until a real validator collaborator exists.
#[derive(Debug, Clone)]
pub struct BasicAuthMiddleware;

impl Middleware for BasicAuthMiddleware {
    fn wrap(&self, inner: Arc<dyn Handler>) -> Arc<dyn Handler> {
        Arc::new(AuthGate { inner })
    }
}

struct AuthGate {
    inner: Arc<dyn Handler>,
}

impl Handler for AuthGate {
    fn handle<'a>(
        &'a self,
        req: &'a Request,
        ctx: &'a mut Context,
        res: &'a mut Response,
    ) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            let Some(credentials) = req.basic_auth() else {
                warn!("Authentication error!");
                res.status(StatusCode::FORBIDDEN).send("Authentication error!");
                return;
            };

            ctx.set(IS_ADMIN, true);
            info!("User {} logged in.", credentials.username);

            self.inner.handle(req, ctx, res).await;
        })
    }
}
