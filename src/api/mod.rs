//! Inbound REST surface: routes, handlers, error mapping and server bootstrap.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use routes::build_router;
pub use server::serve;
