// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Link-backed result queue.

use std::collections::LinkedList;

use super::{QueueError, QueueResult, ResultQueue};

/// A FIFO queue built on a linked list of nodes.
///
/// Every enqueue allocates one node, so there is never a bulk reallocation
/// while a large prefix query is being collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedQueue<T> {
    nodes: LinkedList<T>,
}

impl<T> LinkedQueue<T> {
    /// Creates a new empty `LinkedQueue`.
    pub fn new() -> Self {
        Self {
            nodes: LinkedList::new(),
        }
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResultQueue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.nodes.push_back(item);
    }

    fn dequeue(&mut self) -> QueueResult<T> {
        self.nodes.pop_front().ok_or(QueueError::Empty)
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}
