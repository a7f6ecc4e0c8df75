use crate::handler::{Context, Handler, Request, Response};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

pub struct Server;

impl Server {
    /// Binds the listener and serves the given handler until Ctrl+C.
    ///
    /// Each accepted connection gets its own task; each request gets a fresh
    /// [`Context`] and [`Response`], so concurrently-handled requests share
    /// nothing but the immutable handler chain. A bind failure is returned to
    /// the caller, which treats it as fatal.
    pub async fn bind(
        addr: SocketAddr,
        handler: Arc<dyn Handler>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let listener = TcpListener::bind(addr).await?;
        log::info!("Server started on {addr}");

        let mut shutdown = tokio::spawn(async {
            signal::ctrl_c().await.expect("failed to listen for ctrl_c");
            log::info!("🛑 Received Ctrl+C, shutting down server...");
        });

        loop {
            tokio::select! {
                Ok((stream, remote_addr)) = listener.accept() => {
                    let handler = handler.clone();
                    let io = TokioIo::new(stream);

                    tokio::spawn(async move {
                        let service = service_fn(move |req: hyper::Request<Incoming>| {
                            let handler = handler.clone();
                            async move {
                                Ok::<_, Infallible>(dispatch(handler, req, remote_addr).await)
                            }
                        });

                        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                            log::error!("Connection error: {err}");
                        }
                    });
                }
                _ = &mut shutdown => {
                    break;
                }
            }
        }

        Ok(())
    }
}

async fn dispatch(
    handler: Arc<dyn Handler>,
    req: hyper::Request<Incoming>,
    remote_addr: SocketAddr,
) -> hyper::Response<Full<Bytes>> {
    let (parts, _body) = req.into_parts();
    let req = Request::from_parts(parts, remote_addr);

    let mut ctx = Context::new();
    let mut res = Response::new();
    handler.handle(&req, &mut ctx, &mut res).await;

    res.into_hyper()
}
