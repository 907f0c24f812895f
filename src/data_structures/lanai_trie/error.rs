//! Error types for the Lanai Ternary Search Tree.
//!
//! This module defines the error types that can occur during Lanai Trie operations.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key is longer than the configured limit.
    #[error("Key '{key}' exceeds maximum key length of {max_length}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed length in characters.
        max_length: usize,
    },

    /// Error when no stored key matches the lookup.
    #[error("No match found for: {0}")]
    NotFound(String),
}
