// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for result queues.

/// Errors that can occur in result queue operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum QueueError {
    /// Queue has no items left to dequeue
    #[error("Queue is empty")]
    Empty,
}

/// Result type for result queue operations
pub type QueueResult<T> = std::result::Result<T, QueueError>;
