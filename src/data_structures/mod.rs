//! Data structures for the Lanai library.
//!
//! This module contains the ternary search tree and the result queues it
//! uses to return ordered multi-key query results.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Coarse-grained, honestly documented locking
//! - Typed, recoverable errors instead of panics

pub mod lanai_trie;
pub mod result_queue;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult};
pub use result_queue::{ArrayQueue, LinkedQueue, QueueError, QueueFactory, ResultQueue};
