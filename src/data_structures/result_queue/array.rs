// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Array-backed result queue.

use std::collections::VecDeque;

use super::{QueueError, QueueResult, ResultQueue};

/// A FIFO queue stored in a growable ring buffer.
///
/// This is the default collaborator handed out by a trie built with
/// [`LanaiTrie::default`](crate::data_structures::LanaiTrie).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayQueue<T> {
    items: VecDeque<T>,
}

impl<T> ArrayQueue<T> {
    /// Creates a new empty `ArrayQueue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates a new empty `ArrayQueue` able to hold `capacity` items
    /// before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResultQueue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn dequeue(&mut self) -> QueueResult<T> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
