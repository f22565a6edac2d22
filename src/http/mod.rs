//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP listener on the configured host and port
//! - Graceful shutdown on SIGTERM/SIGINT with a bounded drain window

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
