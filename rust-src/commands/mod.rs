//! CLI command implementations.

pub mod log;
