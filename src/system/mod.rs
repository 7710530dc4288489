//! System-level modules
//!
//! Process-wide concerns that are not part of the request path.

pub mod logging;

pub use logging::init_logging;
