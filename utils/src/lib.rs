//! Shared utilities for the coinview service.

pub mod logging;

pub use logging::{init_logging, LogFormat, LogFormatError};
