//! HTTP server module.
//!
//! Plain HTTP only. The server binds once on all interfaces and runs until the
//! process is killed; there is no graceful shutdown and no TLS.

mod server;

pub use server::{start_server, ServerError};
