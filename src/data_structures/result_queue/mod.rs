// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Result queues for multi-key trie queries.
//!
//! Prefix queries on the [`LanaiTrie`](crate::data_structures::LanaiTrie)
//! return their keys through a FIFO collaborator rather than a hard-wired
//! collection. Anything implementing [`ResultQueue`] can be used, and a
//! [`QueueFactory`] hands the trie a fresh, empty queue for every query.
//!
//! Two implementations ship with the crate:
//!
//! - [`ArrayQueue`], backed by a ring buffer.
//! - [`LinkedQueue`], backed by a linked list.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::result_queue::{ArrayQueue, QueueError, ResultQueue};
//!
//! let mut queue = ArrayQueue::new();
//! queue.enqueue("cape".to_string());
//! queue.enqueue("cats".to_string());
//!
//! assert_eq!(queue.dequeue().unwrap(), "cape");
//! assert_eq!(queue.dequeue().unwrap(), "cats");
//! assert_eq!(queue.dequeue(), Err(QueueError::Empty));
//! ```

mod array;
mod error;
mod linked;

pub use array::ArrayQueue;
pub use error::{QueueError, QueueResult};
pub use linked::LinkedQueue;

/// First-in-first-out container used to hand back ordered query results.
///
/// Implementations must not impose a capacity limit.
pub trait ResultQueue<T> {
    /// Appends an item to the back of the queue.
    fn enqueue(&mut self, item: T);

    /// Removes and returns the item at the front of the queue.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The oldest item in the queue.
    /// * `Err(QueueError::Empty)` - The queue has no items left.
    fn dequeue(&mut self) -> QueueResult<T>;

    /// Returns the number of items currently held.
    fn size(&self) -> usize;

    /// Removes all items.
    fn clear(&mut self);

    /// Returns whether the queue holds no items.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Dequeues every remaining item, oldest first.
    fn drain_all(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.size());
        while let Ok(item) = self.dequeue() {
            items.push(item);
        }
        items
    }
}

/// Produces the result queue for one trie query.
///
/// Every call to [`create`](QueueFactory::create) must return a new, empty
/// queue. Any `Fn() -> Q` closure or function is a factory, so
/// `ArrayQueue::new` and `LinkedQueue::new` can be passed directly.
#[cfg_attr(test, mockall::automock(type Queue = ArrayQueue<String>;))]
pub trait QueueFactory {
    /// The queue type this factory produces.
    type Queue: ResultQueue<String>;

    /// Creates a fresh, empty queue.
    fn create(&self) -> Self::Queue;
}

impl<F, Q> QueueFactory for F
where
    F: Fn() -> Q,
    Q: ResultQueue<String>,
{
    type Queue = Q;

    fn create(&self) -> Q {
        self()
    }
}
