use futures_util::future::BoxFuture;

mod context;
pub mod request;
pub mod response;

pub use context::{Context, ContextError};
pub use request::{Credentials, Request};
pub use response::Response;

/// A unit of request-handling logic.
///
/// Handlers receive the immutable request descriptor, the per-request
/// [`Context`] and the [`Response`] sink. Middleware wraps values of this
/// trait without changing the contract.
pub trait Handler: Send + Sync + 'static {
    fn handle<'a>(
        &'a self,
        req: &'a Request,
        ctx: &'a mut Context,
        res: &'a mut Response,
    ) -> BoxFuture<'a, ()>;
}

/// Blanket impl so plain functions and closures with the matching signature
/// can be registered as handlers directly.
impl<F> Handler for F
where
    F: for<'a> Fn(&'a Request, &'a mut Context, &'a mut Response) -> BoxFuture<'a, ()>
        + Send
        + Sync
        + 'static,
{
    fn handle<'a>(
        &'a self,
        req: &'a Request,
        ctx: &'a mut Context,
        res: &'a mut Response,
    ) -> BoxFuture<'a, ()> {
        (self)(req, ctx, res)
    }
}
