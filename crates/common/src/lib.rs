//! Common utilities for setcalc crates.
//!
//! - [`logging`] - Per-component logging controlled via `DEBUG` environment variable

pub mod logging;

pub use logging::init as init_logging;
