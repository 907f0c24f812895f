//! Lanai Ternary Search Tree Implementation
//!
//! This module provides a ternary search tree used as an ordered symbol table
//! keyed by strings. It supports exact lookups, longest-prefix matching and
//! ordered enumeration of every key sharing a prefix (autocomplete).
//!
//! # Concurrency
//!
//! The whole tree sits behind a single reader/writer lock. [`LanaiTrie::put`]
//! holds the write lock for its entire descent; every query holds the read
//! lock for its entire traversal, so a prefix query always reflects one
//! consistent state of the tree. There is no per-node locking.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::{LanaiTrie, ResultQueue};
//!
//! let trie: LanaiTrie<usize> = LanaiTrie::default();
//! for (i, key) in ["cats", "cape", "captain"].iter().enumerate() {
//!     trie.put(key, i).unwrap();
//! }
//!
//! assert_eq!(trie.longest_prefix("capetown").unwrap(), "cape");
//! assert_eq!(trie.starts_with("ca").unwrap().drain_all(), vec!["cape", "captain", "cats"]);
//! ```

mod error;
mod node;

use std::fmt;

use parking_lot::RwLock;

pub use error::LanaiTrieError;
use node::TrieNode;

use crate::data_structures::result_queue::{ArrayQueue, QueueFactory, ResultQueue};

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// Default upper bound on key length, in characters.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 1024;

/// Configuration options for the Lanai Trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanaiTrieConfig {
    /// Maximum key length in characters accepted by `put`
    pub max_key_length: usize,
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }
}

/// State guarded by the tree-wide lock.
#[derive(Debug)]
struct TrieState<V> {
    /// Root of the tree, absent while the trie is empty
    root: Option<Box<TrieNode<V>>>,

    /// Number of terminal nodes reachable from `root`
    size: usize,
}

/// Lanai Trie is a ternary search tree mapping string keys to values.
///
/// Multi-key queries hand their results back through a queue produced by
/// the factory `F`, so callers choose the queue implementation.
///
/// Key features:
/// * Ascending lexicographic enumeration of keys by prefix
/// * Longest stored prefix of an arbitrary query
/// * Thread-safe behind one tree-wide reader/writer lock
///
/// # Type Parameters
///
/// * `V` - Type of the values stored in the trie.
/// * `F` - Factory producing the result queue for each prefix query.
pub struct LanaiTrie<V, F = fn() -> ArrayQueue<String>> {
    /// Tree and key count, guarded together
    state: RwLock<TrieState<V>>,

    /// Source of fresh result queues
    factory: F,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl<V, F: QueueFactory> LanaiTrie<V, F> {
    /// Creates a new empty `LanaiTrie` with default configuration.
    ///
    /// # Arguments
    ///
    /// * `factory` - Produces a fresh result queue for every prefix query.
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `factory` - Produces a fresh result queue for every prefix query.
    /// * `config` - Configuration for the trie.
    pub fn with_config(factory: F, config: LanaiTrieConfig) -> Self {
        Self {
            state: RwLock::new(TrieState { root: None, size: 0 }),
            factory,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Inserts a key-value pair, replacing the value if the key exists.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert. Must be non-empty.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if a new key was inserted, `false` if the key was updated.
    /// * `Err(LanaiTrieError)` - If the key is empty or too long.
    pub fn put<K>(&self, key: K, value: V) -> LanaiTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(LanaiTrieError::EmptyKey);
        }

        let chars: Vec<char> = key.chars().collect();
        if chars.len() > self.config.max_key_length {
            return Err(LanaiTrieError::KeyTooLong {
                key: key.to_owned(),
                max_length: self.config.max_key_length,
            });
        }

        let mut state = self.state.write();
        let inserted = TrieNode::put(&mut state.root, key, &chars, value);
        if inserted {
            state.size += 1;
        }

        tracing::trace!(key, inserted, size = state.size, "trie put");
        Ok(inserted)
    }

    /// Retrieves a copy of the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(V)` - The value associated with the key.
    /// * `Err(LanaiTrieError::NotFound)` - If the key is absent or only a prefix of stored keys.
    /// * `Err(LanaiTrieError::EmptyKey)` - If the key is empty.
    pub fn get<K>(&self, key: K) -> LanaiTrieResult<V>
    where
        K: AsRef<str>,
        V: Clone,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(LanaiTrieError::EmptyKey);
        }

        let chars: Vec<char> = key.chars().collect();
        let state = self.state.read();
        TrieNode::locate(state.root.as_deref(), &chars)
            .filter(|node| node.is_terminal)
            .and_then(|node| node.value.clone())
            .ok_or_else(|| LanaiTrieError::NotFound(key.to_owned()))
    }

    /// Checks if `key` is stored in the trie.
    ///
    /// A key that is only a prefix of stored keys is not contained, and the
    /// empty key never is.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let chars: Vec<char> = key.as_ref().chars().collect();
        let state = self.state.read();
        TrieNode::locate(state.root.as_deref(), &chars).is_some_and(|node| node.is_terminal)
    }

    /// Returns the number of keys in the trie.
    pub fn size(&self) -> usize {
        self.state.read().size
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Finds the longest stored key that is a prefix of `query`.
    ///
    /// `query` itself qualifies when it is stored.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The longest matching key.
    /// * `Err(LanaiTrieError::NotFound)` - If no stored key is a prefix of `query`.
    pub fn longest_prefix<Q>(&self, query: Q) -> LanaiTrieResult<String>
    where
        Q: AsRef<str>,
    {
        let query = query.as_ref();
        let chars: Vec<char> = query.chars().collect();

        let length = {
            let state = self.state.read();
            TrieNode::longest_prefix_len(state.root.as_deref(), &chars)
        };

        if length == 0 {
            return Err(LanaiTrieError::NotFound(query.to_owned()));
        }

        Ok(chars[..length].iter().collect())
    }

    /// Collects every key beginning with `prefix`, in ascending order.
    ///
    /// `prefix` itself is included when it is stored. An empty prefix
    /// matches every key.
    ///
    /// # Returns
    ///
    /// * `Ok(F::Queue)` - A fresh queue holding the matching keys.
    /// * `Err(LanaiTrieError::NotFound)` - If no stored key begins with `prefix`.
    pub fn starts_with<P>(&self, prefix: P) -> LanaiTrieResult<F::Queue>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let state = self.state.read();

        let (start, prefix_is_key) = if prefix.is_empty() {
            (state.root.as_deref(), false)
        } else {
            let chars: Vec<char> = prefix.chars().collect();
            let node = TrieNode::locate(state.root.as_deref(), &chars)
                .ok_or_else(|| LanaiTrieError::NotFound(prefix.to_owned()))?;
            (node.mid.as_deref(), node.is_terminal)
        };

        if start.is_none() && !prefix_is_key {
            return Err(LanaiTrieError::NotFound(prefix.to_owned()));
        }

        let mut queue = self.factory.create();
        if prefix_is_key {
            queue.enqueue(prefix.to_owned());
        }
        TrieNode::collect(start, &mut queue);
        drop(state);

        tracing::debug!(prefix, matches = queue.size(), "trie prefix query");
        Ok(queue)
    }

    /// Collects every key in the trie, in ascending order.
    ///
    /// # Returns
    ///
    /// * `Ok(F::Queue)` - A fresh queue holding all keys.
    /// * `Err(LanaiTrieError::NotFound)` - If the trie is empty.
    pub fn keys(&self) -> LanaiTrieResult<F::Queue> {
        self.starts_with("")
    }
}

impl<V> Default for LanaiTrie<V> {
    fn default() -> Self {
        Self::new(ArrayQueue::new)
    }
}

impl<V, F> fmt::Debug for LanaiTrie<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanaiTrie")
            .field("size", &self.state.read().size)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::result_queue::{LinkedQueue, MockQueueFactory};
    use std::sync::Arc;
    use std::thread;
    use test_case::test_case;

    const SAMPLE_KEYS: [&str; 11] = [
        "cats", "cape", "captain", "foes", "apple", "she", "root", "shells", "the", "thermos",
        "foo",
    ];

    fn sample_trie() -> LanaiTrie<usize> {
        let trie = LanaiTrie::default();
        for (i, key) in SAMPLE_KEYS.iter().enumerate() {
            assert!(trie.put(key, i).unwrap());
        }
        trie
    }

    fn terminal_count<V, F>(trie: &LanaiTrie<V, F>) -> usize {
        let state = trie.state.read();
        state.root.as_ref().map_or(0, |root| root.count_terminals())
    }

    #[test]
    fn test_trie_basic_operations() {
        let trie: LanaiTrie<String> = LanaiTrie::default();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.size(), 0);

        // Test insertion
        assert!(trie.put("hello", "world".to_string()).unwrap());
        assert_eq!(trie.size(), 1);
        assert!(!trie.is_empty());

        // Test retrieval
        assert_eq!(trie.get("hello").unwrap(), "world");
        assert!(trie.contains("hello"));
        assert_eq!(
            trie.get("nonexistent"),
            Err(LanaiTrieError::NotFound("nonexistent".to_string()))
        );
        assert!(!trie.contains("nonexistent"));

        // Prefix of a stored key is not a stored key
        assert!(trie.get("hell").is_err());
        assert!(!trie.contains("hell"));

        // Test update
        assert!(!trie.put("hello", "planet".to_string()).unwrap());
        assert_eq!(trie.get("hello").unwrap(), "planet");
        assert_eq!(trie.size(), 1);
    }

    #[test]
    fn test_trie_sample_set() {
        let trie = sample_trie();

        assert_eq!(trie.size(), 11);
        assert_eq!(terminal_count(&trie), 11);
        assert_eq!(trie.longest_prefix("capetown").unwrap(), "cape");
        assert_eq!(
            trie.starts_with("ca").unwrap().drain_all(),
            vec!["cape", "captain", "cats"]
        );
    }

    #[test]
    fn test_trie_keys_sorted() {
        let trie = sample_trie();
        let mut expected = SAMPLE_KEYS.to_vec();
        expected.sort_unstable();

        assert_eq!(trie.keys().unwrap().drain_all(), expected);
    }

    #[test_case("capetown", Ok("cape") ; "query extends a key")]
    #[test_case("captain", Ok("captain") ; "query is a key")]
    #[test_case("shellsort", Ok("shells") ; "longest of nested keys")]
    #[test_case("shelf", Ok("she") ; "diverges after a key")]
    #[test_case("cap", Err(()) ; "query is only a path")]
    #[test_case("zebra", Err(()) ; "no shared prefix")]
    #[test_case("", Err(()) ; "empty query")]
    fn test_trie_longest_prefix(query: &str, expected: Result<&str, ()>) {
        let trie = sample_trie();
        match expected {
            Ok(key) => assert_eq!(trie.longest_prefix(query).unwrap(), key),
            Err(()) => assert_eq!(
                trie.longest_prefix(query),
                Err(LanaiTrieError::NotFound(query.to_string()))
            ),
        }
    }

    #[test]
    fn test_trie_prefix_includes_prefix_key() {
        let trie = sample_trie();
        assert_eq!(trie.starts_with("she").unwrap().drain_all(), vec!["she", "shells"]);
        assert_eq!(trie.starts_with("thermos").unwrap().drain_all(), vec!["thermos"]);
        assert_eq!(trie.starts_with("fo").unwrap().drain_all(), vec!["foes", "foo"]);
    }

    #[test]
    fn test_trie_prefix_misses() {
        let trie = sample_trie();
        assert_eq!(
            trie.starts_with("cb").unwrap_err(),
            LanaiTrieError::NotFound("cb".to_string())
        );
        assert!(trie.starts_with("thermoses").is_err());
        assert!(trie.starts_with("x").is_err());
    }

    #[test]
    fn test_trie_empty_tree_queries() {
        let trie: LanaiTrie<u32> = LanaiTrie::default();
        assert_eq!(trie.keys().unwrap_err(), LanaiTrieError::NotFound(String::new()));
        assert!(trie.starts_with("a").is_err());
        assert!(trie.longest_prefix("a").is_err());
        assert!(trie.get("a").is_err());
    }

    #[test]
    fn test_trie_key_validation() {
        let trie = LanaiTrie::with_config(
            ArrayQueue::<String>::new,
            LanaiTrieConfig { max_key_length: 4 },
        );

        assert_eq!(trie.put("", 1), Err(LanaiTrieError::EmptyKey));
        assert_eq!(trie.get(""), Err(LanaiTrieError::EmptyKey));
        assert!(!trie.contains(""));

        assert!(trie.put("four", 4).unwrap());
        assert_eq!(
            trie.put("fives", 5),
            Err(LanaiTrieError::KeyTooLong {
                key: "fives".to_string(),
                max_length: 4,
            })
        );
        assert_eq!(trie.size(), 1);
    }

    #[test]
    fn test_trie_unicode_keys() {
        let trie: LanaiTrie<i32> = LanaiTrie::default();
        trie.put("über", 1).unwrap();
        trie.put("übel", 2).unwrap();
        trie.put("naïve", 3).unwrap();

        assert_eq!(trie.get("übel").unwrap(), 2);
        assert_eq!(trie.longest_prefix("übermensch").unwrap(), "über");
        assert_eq!(trie.starts_with("üb").unwrap().drain_all(), vec!["übel", "über"]);
    }

    #[test]
    fn test_trie_linked_backend() {
        let trie = LanaiTrie::new(LinkedQueue::<String>::new);
        for key in SAMPLE_KEYS {
            trie.put(key, ()).unwrap();
        }

        let mut queue: LinkedQueue<String> = trie.starts_with("th").unwrap();
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.dequeue().unwrap(), "the");
        assert_eq!(queue.dequeue().unwrap(), "thermos");
        assert!(queue.dequeue().is_err());
    }

    #[test]
    fn test_trie_fresh_queue_per_query() {
        let mut factory = MockQueueFactory::new();
        factory
            .expect_create()
            .times(2)
            .returning(|| ArrayQueue::new());

        let trie = LanaiTrie::new(factory);
        for key in SAMPLE_KEYS {
            trie.put(key, 0u8).unwrap();
        }

        let mut first = trie.starts_with("ca").unwrap();
        first.clear();
        let all = trie.keys().unwrap();
        assert_eq!(all.size(), 11);

        // A miss never asks for a queue
        assert!(trie.starts_with("zz").is_err());
    }

    /// Tests concurrent puts on disjoint keys interleaved with reads, verifying
    /// the key count stays exact and every read sees a consistent tree.
    #[test]
    fn test_trie_concurrency() {
        const THREAD_COUNT: usize = 8;
        const OPS_PER_THREAD: usize = 50;
        const TOTAL_KEYS: usize = THREAD_COUNT * OPS_PER_THREAD;

        let trie: Arc<LanaiTrie<String>> = Arc::new(LanaiTrie::default());
        let start_barrier = Arc::new(std::sync::Barrier::new(THREAD_COUNT + 1));

        let mut handles = Vec::with_capacity(THREAD_COUNT);
        for thread_id in 0..THREAD_COUNT {
            let trie_ref = Arc::clone(&trie);
            let barrier = Arc::clone(&start_barrier);

            handles.push(thread::spawn(move || -> Result<(), String> {
                barrier.wait();

                for j in 0..OPS_PER_THREAD {
                    let key = format!("key_{thread_id}_{j}");
                    let value = format!("value_{thread_id}_{j}");

                    if !trie_ref.put(&key, value.clone()).map_err(|e| e.to_string())? {
                        return Err(format!("Thread {thread_id} saw {key} as already present"));
                    }
                    if trie_ref.get(&key).map_err(|e| e.to_string())? != value {
                        return Err(format!("Thread {thread_id} read back a wrong value for {key}"));
                    }

                    // Every key this thread wrote so far must be visible, in order
                    let own = trie_ref
                        .starts_with(format!("key_{thread_id}_"))
                        .map_err(|e| e.to_string())?
                        .drain_all();
                    if own.len() != j + 1 || !own.windows(2).all(|w| w[0] < w[1]) {
                        return Err(format!("Thread {thread_id} saw inconsistent keys: {own:?}"));
                    }
                }
                Ok(())
            }));
        }

        start_barrier.wait();
        for (i, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => panic!("Thread {i} reported error: {e}"),
                Err(e) => panic!("Thread {i} panicked: {e:?}"),
            }
        }

        assert_eq!(trie.size(), TOTAL_KEYS);
        assert_eq!(terminal_count(&trie), TOTAL_KEYS);
        assert_eq!(trie.keys().unwrap().size(), TOTAL_KEYS);
    }
}
