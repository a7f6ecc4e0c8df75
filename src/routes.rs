use crate::handler::{Context, Request, Response};
use crate::middleware::IS_ADMIN;
use futures_util::future::BoxFuture;
use hyper::StatusCode;
use hyper::header::HeaderValue;
use log::error;

const HTML: HeaderValue = HeaderValue::from_static("text/html; charset=utf-8");

/// Open greeting route. Responds 200 with a fixed body regardless of input.
pub fn hello<'a>(
    _req: &'a Request,
    _ctx: &'a mut Context,
    res: &'a mut Response,
) -> BoxFuture<'a, ()> {
    Box::pin(async move {
        res.r#type(HTML).send("<h1>Hello World!</h1>");
    })
}

/// Restricted route. Reads the admin flag the auth gate stored in the
/// request context.
///
/// An absent flag means the route was dispatched without its auth middleware,
/// a wiring bug. That case is kept distinct from "authenticated but not
/// admin": it logs at error level and responds 500 instead of downgrading to
/// the user branch.
pub fn secret<'a>(
    _req: &'a Request,
    ctx: &'a mut Context,
    res: &'a mut Response,
) -> BoxFuture<'a, ()> {
    Box::pin(async move {
        let body = match ctx.get::<bool>(IS_ADMIN) {
            Ok(&true) => "<h1>Hello on secret route.</h1><p>You are admin.</p>",
            Ok(&false) => "<h1>Hello on secret route.</h1><p>You are user.</p>",
            Err(err) => {
                error!("secret route dispatched without auth middleware: {err}");
                res.status(StatusCode::INTERNAL_SERVER_ERROR)
                    .send("Internal Server Error");
                return;
            }
        };
        res.r#type(HTML).send(body);
    })
}

/// Universal fallback, registered at the `/` prefix. Responds 404 with a
/// fixed body.
pub fn not_found<'a>(
    _req: &'a Request,
    _ctx: &'a mut Context,
    res: &'a mut Response,
) -> BoxFuture<'a, ()> {
    Box::pin(async move {
        res.status(StatusCode::NOT_FOUND)
            .r#type(HTML)
            .send("<h1>404 Page Not Found</h1>");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Handler;
    use hyper::{HeaderMap, Method, Uri};

    fn request(path: &str) -> Request {
        Request::new(
            Method::GET,
            path.parse::<Uri>().unwrap(),
            HeaderMap::new(),
            "127.0.0.1:9999".parse().unwrap(),
        )
    }

    #[tokio::test]
    async fn hello_is_200_with_fixed_greeting() {
        let req = request("/hello");
        let mut ctx = Context::new();
        let mut res = Response::new();

        hello.handle(&req, &mut ctx, &mut res).await;

        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.body(), b"<h1>Hello World!</h1>");
    }

    #[tokio::test]
    async fn not_found_is_404_with_fixed_body() {
        let req = request("/whatever");
        let mut ctx = Context::new();
        let mut res = Response::new();

        not_found.handle(&req, &mut ctx, &mut res).await;

        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(res.body(), b"<h1>404 Page Not Found</h1>");
    }

    #[tokio::test]
    async fn secret_with_admin_flag_true() {
        let req = request("/secret");
        let mut ctx = Context::new();
        ctx.set(IS_ADMIN, true);
        let mut res = Response::new();

        secret.handle(&req, &mut ctx, &mut res).await;

        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(
            res.body(),
            b"<h1>Hello on secret route.</h1><p>You are admin.</p>"
        );
    }

    #[tokio::test]
    async fn secret_with_admin_flag_false() {
        let req = request("/secret");
        let mut ctx = Context::new();
        ctx.set(IS_ADMIN, false);
        let mut res = Response::new();

        secret.handle(&req, &mut ctx, &mut res).await;

        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(
            res.body(),
            b"<h1>Hello on secret route.</h1><p>You are user.</p>"
        );
    }

    #[tokio::test]
    async fn secret_without_flag_is_internal_error_not_user_branch() {
        let req = request("/secret");
        let mut ctx = Context::new();
        let mut res = Response::new();

        secret.handle(&req, &mut ctx, &mut res).await;

        assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.body(), b"Internal Server Error");
    }
}
