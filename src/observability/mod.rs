//! Observability
//!
//! Structured JSON logging for the registry service.

mod logger;

pub use logger::{Logger, Severity};
