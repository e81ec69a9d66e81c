//! Structured logging setup for the plugdash tools.

pub mod logger;

pub use logger::init_logger;
