//! Test modules for the Lanai library.
//!
//! This module contains crate-level testing infrastructure, including:
//! - Property-based tests for the trie using proptest
//! - Configuration loading tests
//! - Error reporting tests
//! - Test fixtures and utilities
//!
//! Unit tests for individual components live next to the code they test.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_set_strategy, key_strategy, unicode_key_strategy, TestFixture};
