//! Shared utilities for cinder.

pub mod logging;

pub use logging::init_tracing;
