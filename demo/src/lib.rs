//! Demonstration client for the dummy counter server.
//!
//! # Overview
//! Reads the counter, adds 25, subtracts 10, reads it again, and prints the
//! server's operation log. Requests are built and parsed by `dummy-core`;
//! this crate owns the transport, configuration, and console output.
//!
//! # Design
//! - `Session` is the only holder of transport state and is closed exactly
//!   once by `run`.
//! - All console text goes through a caller-supplied `Write`, so the flow is
//!   testable without capturing stdout. Diagnostics go to `tracing`.

pub mod config;
pub mod error;
pub mod flow;
pub mod render;
pub mod session;

pub use config::Config;
pub use error::DemoError;
pub use flow::{run, Outcome};
pub use render::render_log;
pub use session::Session;
