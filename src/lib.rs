pub mod handler;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod server;

pub use router::Router;
pub use server::Server;
