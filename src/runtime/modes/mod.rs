//! Execution modes
//!
//! Only the HTTP server runs long-lived; configuration helpers are plain CLI
//! subcommands handled in `main`.

pub mod server;

pub use server::run_server;
