//! Lanai Library
//!
//! This library contains a concurrency-safe ternary search tree used as an
//! ordered symbol table keyed by strings, the result queues it returns prefix
//! query results through, and the configuration and error handling shared
//! with the `lanai` binary.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Strict component boundaries
//! - Pluggable collaborators for testability
//! - One tree-wide reader/writer lock rather than per-node locking
//! - Comprehensive error handling and propagation

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
