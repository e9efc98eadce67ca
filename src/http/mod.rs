//! HTTP server module.
//!
//! Serves plain HTTP with graceful shutdown on SIGTERM/SIGINT. TLS is expected
//! to be terminated by whatever sits in front of the probe endpoints.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
