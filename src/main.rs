use minimux::middleware::{BasicAuthMiddleware, LoggingMiddleware, Middleware};
use minimux::{Router, Server, routes};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut router = Router::new();

    // the logger middleware wraps the complete router
    router.use_with(LoggingMiddleware);

    router.route("/hello", Arc::new(routes::hello));
    // this route goes through the authentication gate first
    router.route("/secret", BasicAuthMiddleware.wrap(Arc::new(routes::secret)));

    router.mount("/", Arc::new(routes::not_found));

    let addr: SocketAddr = ([127, 0, 0, 1], 3333).into();
    if let Err(err) = Server::bind(addr, router.into_handler()).await {
        log::error!("failed to start server on {addr}: {err}");
        std::process::exit(1);
    }
}
